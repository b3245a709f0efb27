use std::fmt::{Display, Formatter};

use serde::Deserialize;

/// One selectable entry. Immutable once handed to a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub value: String,
    pub description: Option<String>,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            description: None,
        }
    }

    /// A choice whose value is its label.
    pub fn labelled(label: impl Into<String>) -> Self {
        let label = label.into();
        Self::new(label.clone(), label)
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Display for Choice {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.label)
    }
}

/// A choice as written in a prompt file; `value` falls back to the label.
#[derive(Deserialize, Debug, Clone)]
pub struct ChoiceDefinition {
    pub label: String,
    pub value: Option<String>,
    pub description: Option<String>,
}

impl From<ChoiceDefinition> for Choice {
    fn from(definition: ChoiceDefinition) -> Self {
        let value = definition.value.unwrap_or_else(|| definition.label.clone());
        Self {
            label: definition.label,
            value,
            description: definition.description,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Multi,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PromptDefinition {
    pub label: String,
    #[serde(default)]
    pub mode: SelectionMode,
    pub default: Option<String>,
    pub page_size: Option<usize>,
    pub choices: Vec<ChoiceDefinition>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ColorDefinition {
    pub rgb: Option<(u8, u8, u8)>,
    pub ansi: Option<u8>,
    pub name: Option<String>,
}

/// Markers and colors for the widget. Purely cosmetic.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeDefinition {
    pub pointer: Option<String>,
    pub checked: Option<String>,
    pub unchecked: Option<String>,
    pub pointer_color: Option<ColorDefinition>,
    pub highlight_color: Option<ColorDefinition>,
    pub description_color: Option<ColorDefinition>,
    pub notice_color: Option<ColorDefinition>,
}

/// Everything one prompt call needs.
#[derive(Debug, Clone)]
pub struct PromptSpec {
    pub label: String,
    pub choices: Vec<Choice>,
    pub default: Option<String>,
    pub mode: SelectionMode,
    pub page_size: Option<usize>,
    pub theme: ThemeDefinition,
}

impl PromptSpec {
    pub fn new(label: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            label: label.into(),
            choices,
            default: None,
            mode: SelectionMode::Single,
            page_size: None,
            theme: ThemeDefinition::default(),
        }
    }

    #[must_use]
    pub fn multi(mut self) -> Self {
        self.mode = SelectionMode::Multi;
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ThemeDefinition) -> Self {
        self.theme = theme;
        self
    }
}

impl From<PromptDefinition> for PromptSpec {
    fn from(definition: PromptDefinition) -> Self {
        Self {
            label: definition.label,
            choices: definition.choices.into_iter().map(Choice::from).collect(),
            default: definition.default,
            mode: definition.mode,
            page_size: definition.page_size,
            theme: ThemeDefinition::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_definition_value_falls_back_to_label() {
        let definition = ChoiceDefinition {
            label: "apple".to_string(),
            value: None,
            description: Some("red".to_string()),
        };
        let choice = Choice::from(definition);
        assert_eq!(choice.value, "apple");
        assert_eq!(choice.description.as_deref(), Some("red"));
    }

    #[test]
    fn test_prompt_definition_mode_defaults_to_single() {
        let yaml = "label: Fruit\nchoices:\n  - label: apple\n";
        let definition: PromptDefinition = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(definition.mode, SelectionMode::Single);

        let spec = PromptSpec::from(definition);
        assert_eq!(spec.choices, vec![Choice::labelled("apple")]);
    }

    #[test]
    fn test_prompt_spec_builders() {
        let spec = PromptSpec::new("Pick", vec![Choice::new("A", "a")])
            .multi()
            .with_default("1")
            .with_page_size(3);
        assert_eq!(spec.mode, SelectionMode::Multi);
        assert_eq!(spec.default.as_deref(), Some("1"));
        assert_eq!(spec.page_size, Some(3));
    }

    #[test]
    fn test_choice_display_is_label() {
        let choice = Choice::new("Banana split", "banana");
        assert_eq!(format!("{choice}"), "Banana split");
    }
}
