//! Multi-choice widget.
//!
//! Navigation matches the single-choice widget. Space toggles the row under
//! the cursor, digits `1`-`9` toggle the matching row, and Enter only
//! confirms once at least one row is chosen.

use std::collections::BTreeSet;

use itertools::Itertools;
use rust_select_core::choice_definitions::{Choice, PromptSpec};
use rust_select_core::error::Error;
use rust_select_core::resolution::{join_values, match_token, resolve_multi_default};

use super::colors::Theme;
use super::render::Line;
use super::types::{navigate, KeyEvent, LineOutcome, Outcome, ViewportState};
use super::ui;
use super::widget::{LineWidget, Widget};

/// Words that commit a fallback selection, compared case-insensitively.
const COMMIT_WORDS: [&str; 3] = ["done", "finish", "q"];

pub struct MultiSelectionState<'a> {
    label: &'a str,
    choices: &'a [Choice],
    cursor: usize,
    viewport: ViewportState,
    chosen: BTreeSet<usize>,
    notice: Option<String>,
    cancelled: bool,
}

impl<'a> MultiSelectionState<'a> {
    /// Seeds the chosen set from the default, written as ordinals or as
    /// values/labels.
    pub fn new(spec: &'a PromptSpec, page_size: usize) -> Self {
        Self {
            label: &spec.label,
            choices: &spec.choices,
            cursor: 0,
            viewport: ViewportState::new(page_size),
            chosen: resolve_multi_default(&spec.choices, spec.default.as_deref()),
            notice: None,
            cancelled: false,
        }
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn chosen(&self) -> &BTreeSet<usize> {
        &self.chosen
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn toggle(&mut self, index: usize) {
        if !self.chosen.remove(&index) {
            self.chosen.insert(index);
        }
        self.notice = None;
    }

    /// The joined values, or the empty-selection error if nothing is chosen.
    fn commit(&self) -> Result<String, Error> {
        if self.chosen.is_empty() {
            return Err(Error::EmptySelection);
        }

        Ok(join_values(self.choices, &self.chosen))
    }

    /// Toggles every choice named in `input` and returns the tokens that
    /// named nothing.
    ///
    /// Labels may contain spaces, so the whole line is tried first, then
    /// each comma-separated segment, and only a segment that matches nothing
    /// is split on whitespace.
    fn toggle_matching(&mut self, input: &str) -> Vec<String> {
        if let Some(index) = match_token(self.choices, input) {
            self.toggle(index);
            return Vec::new();
        }

        let mut unmatched = Vec::new();
        for segment in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if let Some(index) = match_token(self.choices, segment) {
                self.toggle(index);
                continue;
            }

            for token in segment.split_whitespace() {
                match match_token(self.choices, token) {
                    Some(index) => self.toggle(index),
                    None => unmatched.push(format!("`{token}`")),
                }
            }
        }
        unmatched
    }

    fn chosen_labels(&self) -> String {
        self.chosen
            .iter()
            .filter_map(|&i| self.choices.get(i))
            .map(|c| c.label.as_str())
            .join(", ")
    }

    fn position(&self) -> Option<(usize, usize)> {
        let total = self.choices.len();
        (total > self.viewport.height).then_some((self.cursor + 1, total))
    }
}

impl Widget for MultiSelectionState<'_> {
    fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        let total = self.choices.len();
        if total == 0 {
            return Outcome::Ignored;
        }

        if let Some(index) = navigate(key, self.cursor, total) {
            self.cursor = index;
            self.viewport.follow(index);
            return Outcome::Redraw;
        }

        match key {
            KeyEvent::Space => {
                self.toggle(self.cursor);
                Outcome::Redraw
            }
            KeyEvent::Enter => match self.commit() {
                Ok(values) => Outcome::Confirmed(values),
                Err(e) => {
                    self.notice = Some(e.to_string());
                    Outcome::Redraw
                }
            },
            KeyEvent::Escape | KeyEvent::CtrlC => {
                self.cancelled = true;
                Outcome::Cancelled
            }
            _ => match key.digit() {
                Some(ordinal) if ordinal <= total => {
                    self.toggle(ordinal - 1);
                    Outcome::Redraw
                }
                _ => Outcome::Ignored,
            },
        }
    }

    fn frame(&self, theme: &Theme) -> Vec<Line> {
        let total = self.choices.len();
        let mut lines = vec![ui::header_line(
            self.label,
            ui::MULTI_HINT,
            self.position(),
            theme,
        )];

        for index in self.viewport.visible(total) {
            let mark: &str = if self.chosen.contains(&index) {
                &theme.checked
            } else {
                &theme.unchecked
            };
            lines.push(ui::choice_line(
                index,
                &self.choices[index],
                total,
                index == self.cursor,
                Some(mark),
                theme,
            ));
        }

        if let Some(description) = self.choices.get(self.cursor).and_then(|c| c.description.as_ref()) {
            lines.push(ui::description_line(description, theme));
        }

        if let Some(notice) = &self.notice {
            lines.push(ui::notice_line(notice, theme));
        }

        lines
    }

    fn max_height(&self) -> u16 {
        let rows = self.viewport.height.min(self.choices.len());
        u16::try_from(rows + 3).unwrap_or(u16::MAX)
    }

    fn summary(&self, theme: &Theme) -> Line {
        ui::summary_line(self.label, &self.chosen_labels(), theme)
    }
}

impl LineWidget for MultiSelectionState<'_> {
    fn list_lines(&self) -> Vec<String> {
        let total = self.choices.len();
        self.choices
            .iter()
            .enumerate()
            .map(|(index, choice)| {
                ui::plain_choice_line(index, choice, total, Some(self.chosen.contains(&index)))
            })
            .collect()
    }

    fn prompt_text(&self) -> String {
        format!(
            "{} (numbers or labels to toggle, empty line or `done` to finish): ",
            self.label
        )
    }

    fn handle_line(&mut self, line: &str) -> LineOutcome {
        let input = line.trim();
        let lowered = input.to_lowercase();

        if input.is_empty() || COMMIT_WORDS.contains(&lowered.as_str()) {
            return match self.commit() {
                Ok(values) => LineOutcome::Confirmed(values),
                Err(e) => LineOutcome::Reprompt(Some(e.to_string())),
            };
        }

        let unmatched = self.toggle_matching(input);

        if unmatched.is_empty() {
            LineOutcome::Reprompt(None)
        } else {
            LineOutcome::Reprompt(Some(format!(
                "No option matches {}.",
                unmatched.join(", ")
            )))
        }
    }

    fn status(&self) -> Option<String> {
        if self.chosen.is_empty() {
            Some("Selected: (none)".to_string())
        } else {
            Some(format!("Selected: {}", self.chosen_labels()))
        }
    }
}
