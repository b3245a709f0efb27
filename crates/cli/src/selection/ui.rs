//! Frame building shared by both widgets.
//!
//! Styled lines are produced here and handed to the render surface; plain
//! lines are produced for the line-mode fallback, which never emits escape
//! codes.

use std::fmt::Display;

use crossterm::style::{StyledContent, Stylize};
use rust_select_core::choice_definitions::Choice;

use super::colors::Theme;
use super::render::Line;

pub const SINGLE_HINT: &str = "(↑/↓ move, 1-9 pick, enter select, esc cancel)";
pub const MULTI_HINT: &str = "(↑/↓ move, space or 1-9 toggle, enter confirm, esc cancel)";

/// Pad a value to match the width of the largest value
pub fn pad_to_width_of<T: Display>(value: T, max_number: usize) -> String {
    let width = format!("{max_number}").len();
    format!("{:>width$}", value.to_string())
}

fn text(content: impl Into<String>) -> StyledContent<String> {
    content.into().stylize()
}

pub fn header_line(
    label: &str,
    hint: &str,
    position: Option<(usize, usize)>,
    theme: &Theme,
) -> Line {
    let mut line = vec![
        text("? ").with(theme.pointer_color).bold(),
        text(label).bold(),
        text(format!(" {hint}")).with(theme.description_color),
    ];

    if let Some((current, total)) = position {
        line.push(
            text(format!(" [{}/{}]", pad_to_width_of(current, total), total))
                .with(theme.description_color),
        );
    }

    line
}

/// One row of the list. `mark` is the checkbox for multi-select rows.
pub fn choice_line(
    index: usize,
    choice: &Choice,
    choice_count: usize,
    is_cursor: bool,
    mark: Option<&str>,
    theme: &Theme,
) -> Line {
    let pointer = if is_cursor {
        theme.pointer.clone()
    } else {
        " ".repeat(theme.pointer.chars().count())
    };

    let mut body = String::new();
    if let Some(mark) = mark {
        body.push_str(mark);
        body.push(' ');
    }
    body.push_str(&format!(
        "{}) {}",
        pad_to_width_of(index + 1, choice_count),
        choice.label
    ));

    if is_cursor {
        vec![
            text(pointer).with(theme.pointer_color),
            text(" "),
            text(body).with(theme.highlight_color).bold(),
        ]
    } else {
        vec![text(pointer), text(" "), text(body)]
    }
}

pub fn description_line(description: &str, theme: &Theme) -> Line {
    vec![text(format!("  {description}"))
        .with(theme.description_color)
        .italic()]
}

pub fn notice_line(notice: &str, theme: &Theme) -> Line {
    vec![text(format!("  {notice}")).with(theme.notice_color)]
}

/// What is left on screen once a widget confirms.
pub fn summary_line(label: &str, selected: &str, theme: &Theme) -> Line {
    vec![
        text("? ").with(theme.pointer_color).bold(),
        text(label).bold(),
        text(" "),
        text(selected).with(theme.highlight_color),
    ]
}

/// Unstyled list row for the line-mode fallback.
pub fn plain_choice_line(
    index: usize,
    choice: &Choice,
    choice_count: usize,
    checked: Option<bool>,
) -> String {
    let mark = match checked {
        Some(true) => "[x] ",
        Some(false) => "[ ] ",
        None => "",
    };

    let mut line = format!(
        "  {mark}{}) {}",
        pad_to_width_of(index + 1, choice_count),
        choice.label
    );
    if let Some(description) = &choice.description {
        line.push_str(&format!(" - {description}"));
    }
    line
}

/// Concatenated text of a styled line, without escape codes.
pub fn plain_text(line: &[StyledContent<String>]) -> String {
    line.iter().map(|segment| segment.content().as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_to_width_of() {
        assert_eq!(pad_to_width_of(3, 12), " 3");
        assert_eq!(pad_to_width_of(12, 12), "12");
        assert_eq!(pad_to_width_of(1, 9), "1");
    }

    #[test]
    fn test_header_with_position() {
        let theme = Theme::default();
        let line = header_line("Fruit", "(hint)", Some((2, 12)), &theme);
        assert_eq!(plain_text(&line), "? Fruit (hint) [ 2/12]");
    }

    #[test]
    fn test_choice_line_cursor_and_mark() {
        let theme = Theme::default();
        let choice = Choice::labelled("apple");

        let selected = choice_line(0, &choice, 3, true, Some("◉"), &theme);
        assert_eq!(plain_text(&selected), "❯ ◉ 1) apple");

        let other = choice_line(1, &choice, 3, false, None, &theme);
        assert_eq!(plain_text(&other), "  2) apple");
    }

    #[test]
    fn test_plain_choice_line() {
        let choice = Choice::labelled("cherry").with_description("dark red");
        assert_eq!(
            plain_choice_line(2, &choice, 10, Some(true)),
            "  [x]  3) cherry - dark red"
        );
        assert_eq!(plain_choice_line(0, &choice, 3, None), "  1) cherry - dark red");
    }
}
