use crossterm::style::Color;
use rust_select_core::choice_definitions::{ColorDefinition, ThemeDefinition};
use rust_select_core::error::{Error, Result};

/// Names accepted in a theme's `name` color field, matched case-insensitively.
const NAMED_COLORS: [(&str, Color); 16] = [
    ("black", Color::Black),
    ("darkgrey", Color::DarkGrey),
    ("red", Color::Red),
    ("darkred", Color::DarkRed),
    ("green", Color::Green),
    ("darkgreen", Color::DarkGreen),
    ("yellow", Color::Yellow),
    ("darkyellow", Color::DarkYellow),
    ("blue", Color::Blue),
    ("darkblue", Color::DarkBlue),
    ("magenta", Color::Magenta),
    ("darkmagenta", Color::DarkMagenta),
    ("cyan", Color::Cyan),
    ("darkcyan", Color::DarkCyan),
    ("white", Color::White),
    ("grey", Color::Grey),
];

/// Theme colors as crossterm colors.
pub trait AsTermColor {
    /// `None` when the definition leaves every field empty.
    fn as_crossterm_color(&self) -> Result<Option<Color>>;
}

impl AsTermColor for ColorDefinition {
    fn as_crossterm_color(&self) -> Result<Option<Color>> {
        match (self.rgb, self.ansi, self.name.as_deref()) {
            (None, None, None) => Ok(None),
            (Some((r, g, b)), None, None) => Ok(Some(Color::Rgb { r, g, b })),
            (None, Some(value), None) => Ok(Some(Color::AnsiValue(value))),
            (None, None, Some(name)) => named_color(name).map(Some),
            _ => Err(Error::MultipleColorTypes),
        }
    }
}

fn named_color(name: &str) -> Result<Color> {
    NAMED_COLORS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|&(_, color)| color)
        .ok_or_else(|| Error::UnknownColorName(name.to_string()))
}

fn color_or(definition: Option<&ColorDefinition>, fallback: Color) -> Result<Color> {
    match definition {
        None => Ok(fallback),
        Some(definition) => Ok(definition.as_crossterm_color()?.unwrap_or(fallback)),
    }
}

/// Resolved markers and colors used to draw a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub pointer: String,
    pub checked: String,
    pub unchecked: String,
    pub pointer_color: Color,
    pub highlight_color: Color,
    pub description_color: Color,
    pub notice_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            pointer: "❯".to_string(),
            checked: "◉".to_string(),
            unchecked: "◯".to_string(),
            pointer_color: Color::Cyan,
            highlight_color: Color::Cyan,
            description_color: Color::DarkGrey,
            notice_color: Color::Red,
        }
    }
}

impl Theme {
    /// Fills the gaps in a theme file with the built-in theme.
    ///
    /// # Errors
    ///
    /// Returns an error if a color is defined more than one way or names an
    /// unknown color.
    pub fn from_definition(definition: &ThemeDefinition) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            pointer: definition.pointer.clone().unwrap_or(defaults.pointer),
            checked: definition.checked.clone().unwrap_or(defaults.checked),
            unchecked: definition.unchecked.clone().unwrap_or(defaults.unchecked),
            pointer_color: color_or(definition.pointer_color.as_ref(), defaults.pointer_color)?,
            highlight_color: color_or(
                definition.highlight_color.as_ref(),
                defaults.highlight_color,
            )?,
            description_color: color_or(
                definition.description_color.as_ref(),
                defaults.description_color,
            )?,
            notice_color: color_or(definition.notice_color.as_ref(), defaults.notice_color)?,
        })
    }
}
