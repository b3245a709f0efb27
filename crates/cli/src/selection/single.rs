//! Single-choice widget.
//!
//! The cursor wraps at both ends. Digits `1`-`9` confirm the matching row at
//! once; Enter confirms the row under the cursor.

use rust_select_core::choice_definitions::{Choice, PromptSpec};
use rust_select_core::resolution::{match_token, resolve_single_default};

use super::colors::Theme;
use super::render::Line;
use super::types::{navigate, KeyEvent, LineOutcome, Outcome, ViewportState};
use super::ui;
use super::widget::{LineWidget, Widget};

pub struct SelectionState<'a> {
    label: &'a str,
    choices: &'a [Choice],
    cursor: usize,
    viewport: ViewportState,
    cancelled: bool,
}

impl<'a> SelectionState<'a> {
    /// Starts on the default choice (by value, label or ordinal), else the first.
    pub fn new(spec: &'a PromptSpec, page_size: usize) -> Self {
        let cursor = resolve_single_default(&spec.choices, spec.default.as_deref()).unwrap_or(0);
        let mut viewport = ViewportState::new(page_size);
        viewport.follow(cursor);

        Self {
            label: &spec.label,
            choices: &spec.choices,
            cursor,
            viewport,
            cancelled: false,
        }
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn move_to(&mut self, index: usize) {
        self.cursor = index;
        self.viewport.follow(index);
    }

    fn confirm(&mut self, index: usize) -> Outcome {
        self.move_to(index);
        Outcome::Confirmed(self.choices[index].value.clone())
    }

    fn position(&self) -> Option<(usize, usize)> {
        let total = self.choices.len();
        (total > self.viewport.height).then_some((self.cursor + 1, total))
    }
}

impl Widget for SelectionState<'_> {
    fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        let total = self.choices.len();
        if total == 0 {
            return Outcome::Ignored;
        }

        if let Some(index) = navigate(key, self.cursor, total) {
            self.move_to(index);
            return Outcome::Redraw;
        }

        match key {
            KeyEvent::Enter => self.confirm(self.cursor),
            KeyEvent::Escape | KeyEvent::CtrlC => {
                self.cancelled = true;
                Outcome::Cancelled
            }
            _ => match key.digit() {
                Some(ordinal) if ordinal <= total => self.confirm(ordinal - 1),
                _ => Outcome::Ignored,
            },
        }
    }

    fn frame(&self, theme: &Theme) -> Vec<Line> {
        let total = self.choices.len();
        let mut lines = vec![ui::header_line(
            self.label,
            ui::SINGLE_HINT,
            self.position(),
            theme,
        )];

        for index in self.viewport.visible(total) {
            lines.push(ui::choice_line(
                index,
                &self.choices[index],
                total,
                index == self.cursor,
                None,
                theme,
            ));
        }

        if let Some(description) = self.choices.get(self.cursor).and_then(|c| c.description.as_ref()) {
            lines.push(ui::description_line(description, theme));
        }

        lines
    }

    fn max_height(&self) -> u16 {
        let rows = self.viewport.height.min(self.choices.len());
        u16::try_from(rows + 2).unwrap_or(u16::MAX)
    }

    fn summary(&self, theme: &Theme) -> Line {
        let selected = self
            .choices
            .get(self.cursor)
            .map_or("", |c| c.label.as_str());
        ui::summary_line(self.label, selected, theme)
    }
}

impl LineWidget for SelectionState<'_> {
    fn list_lines(&self) -> Vec<String> {
        let total = self.choices.len();
        self.choices
            .iter()
            .enumerate()
            .map(|(index, choice)| ui::plain_choice_line(index, choice, total, None))
            .collect()
    }

    fn prompt_text(&self) -> String {
        match self.choices.get(self.cursor) {
            Some(choice) => format!("{} [{}]: ", self.label, choice.label),
            None => format!("{}: ", self.label),
        }
    }

    fn handle_line(&mut self, line: &str) -> LineOutcome {
        let input = line.trim();
        if input.is_empty() && !self.choices.is_empty() {
            return LineOutcome::Confirmed(self.choices[self.cursor].value.clone());
        }

        match match_token(self.choices, input) {
            Some(index) => {
                self.move_to(index);
                LineOutcome::Confirmed(self.choices[index].value.clone())
            }
            None => LineOutcome::Reprompt(Some(format!(
                "`{}` does not match any option. Enter a number between 1 and {}, or a label.",
                input,
                self.choices.len()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> PromptSpec {
        PromptSpec::new(
            "Fruit",
            vec![
                Choice::labelled("apple"),
                Choice::labelled("banana"),
                Choice::labelled("cherry"),
            ],
        )
    }

    #[test]
    fn test_initial_cursor_from_default() {
        let spec = fruit().with_default("banana");
        assert_eq!(SelectionState::new(&spec, 10).cursor(), 1);

        let spec = fruit().with_default("3");
        assert_eq!(SelectionState::new(&spec, 10).cursor(), 2);

        let spec = fruit().with_default("kiwi");
        assert_eq!(SelectionState::new(&spec, 10).cursor(), 0);
    }

    #[test]
    fn test_down_n_times_returns_to_start() {
        let spec = fruit().with_default("banana");
        let mut state = SelectionState::new(&spec, 10);
        for _ in 0..spec.choices.len() {
            assert_eq!(state.handle_key(KeyEvent::Down), Outcome::Redraw);
        }
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_up_wraps_to_last() {
        let spec = fruit();
        let mut state = SelectionState::new(&spec, 10);
        state.handle_key(KeyEvent::Up);
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn test_home_end() {
        let spec = fruit();
        let mut state = SelectionState::new(&spec, 10);
        assert_eq!(state.handle_key(KeyEvent::End), Outcome::Redraw);
        assert_eq!(state.cursor(), 2);
        assert_eq!(state.handle_key(KeyEvent::Home), Outcome::Redraw);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_down_then_enter_confirms() {
        let spec = fruit().with_default("banana");
        let mut state = SelectionState::new(&spec, 10);
        state.handle_key(KeyEvent::Down);
        assert_eq!(
            state.handle_key(KeyEvent::Enter),
            Outcome::Confirmed("cherry".to_string())
        );
    }

    #[test]
    fn test_digit_confirms_without_enter() {
        for (digit, expected) in [('1', "apple"), ('2', "banana"), ('3', "cherry")] {
            let spec = fruit();
            let mut state = SelectionState::new(&spec, 10);
            assert_eq!(
                state.handle_key(KeyEvent::Printable(digit)),
                Outcome::Confirmed(expected.to_string())
            );
        }
    }

    #[test]
    fn test_out_of_range_digit_ignored() {
        let spec = fruit();
        let mut state = SelectionState::new(&spec, 10);
        assert_eq!(state.handle_key(KeyEvent::Printable('4')), Outcome::Ignored);
        assert_eq!(state.handle_key(KeyEvent::Printable('0')), Outcome::Ignored);
    }

    #[test]
    fn test_escape_and_ctrl_c_cancel() {
        for key in [KeyEvent::Escape, KeyEvent::CtrlC] {
            let spec = fruit();
            let mut state = SelectionState::new(&spec, 10);
            assert_eq!(state.handle_key(key), Outcome::Cancelled);
            assert!(state.is_cancelled());
        }
    }

    #[test]
    fn test_other_keys_ignored() {
        let spec = fruit();
        let mut state = SelectionState::new(&spec, 10);
        for key in [
            KeyEvent::Left,
            KeyEvent::Right,
            KeyEvent::Space,
            KeyEvent::Printable('x'),
            KeyEvent::FunctionKey(1),
            KeyEvent::Unknown,
        ] {
            assert_eq!(state.handle_key(key), Outcome::Ignored);
        }
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_frame_pages_long_lists() {
        let choices = (1..=12).map(|i| Choice::labelled(format!("item {i}"))).collect();
        let spec = PromptSpec::new("Items", choices);
        let theme = Theme::default();
        let mut state = SelectionState::new(&spec, 4);

        state.handle_key(KeyEvent::Up);
        let frame: Vec<String> = state.frame(&theme).iter().map(|l| ui::plain_text(l)).collect();
        assert_eq!(frame.len(), 5);
        assert!(frame[0].ends_with("[12/12]"));
        assert!(frame[1].ends_with("item 9"));
        assert!(frame[4].starts_with("❯"));
        assert!(frame[4].ends_with("item 12"));

        state.handle_key(KeyEvent::Down);
        let frame: Vec<String> = state.frame(&theme).iter().map(|l| ui::plain_text(l)).collect();
        assert!(frame[1].ends_with(" 1) item 1"));
        assert!(state.max_height() >= u16::try_from(frame.len()).unwrap());
    }

    #[test]
    fn test_frame_shows_description_of_cursor_row() {
        let spec = PromptSpec::new(
            "Fruit",
            vec![
                Choice::labelled("apple").with_description("crunchy"),
                Choice::labelled("banana"),
            ],
        );
        let theme = Theme::default();
        let mut state = SelectionState::new(&spec, 10);
        let frame = state.frame(&theme);
        assert_eq!(ui::plain_text(frame.last().unwrap()), "  crunchy");

        state.handle_key(KeyEvent::Down);
        assert_eq!(state.frame(&theme).len(), 3);
    }

    #[test]
    fn test_line_input_forms() {
        let spec = fruit().with_default("cherry");

        let mut state = SelectionState::new(&spec, 10);
        assert_eq!(
            state.handle_line("2\n"),
            LineOutcome::Confirmed("banana".to_string())
        );

        let mut state = SelectionState::new(&spec, 10);
        assert_eq!(
            state.handle_line("\n"),
            LineOutcome::Confirmed("cherry".to_string())
        );

        let mut state = SelectionState::new(&spec, 10);
        assert_eq!(
            state.handle_line("BAN"),
            LineOutcome::Confirmed("banana".to_string())
        );

        let mut state = SelectionState::new(&spec, 10);
        assert!(matches!(state.handle_line("kiwi"), LineOutcome::Reprompt(Some(_))));
    }

    #[test]
    fn test_prompt_text_shows_default() {
        let spec = fruit().with_default("banana");
        let state = SelectionState::new(&spec, 10);
        assert_eq!(state.prompt_text(), "Fruit [banana]: ");
    }
}
