//! The two contracts every selection widget implements: one for the raw-mode
//! key loop, one for the line-based fallback.

use super::colors::Theme;
use super::render::Line;
use super::types::{KeyEvent, LineOutcome, Outcome};

pub trait Widget {
    /// Consumes one key while the widget is active.
    fn handle_key(&mut self, key: KeyEvent) -> Outcome;

    /// The rows to draw for the current state.
    fn frame(&self, theme: &Theme) -> Vec<Line>;

    /// Upper bound on [`Widget::frame`]'s length.
    fn max_height(&self) -> u16;

    /// The line left on screen after confirming.
    fn summary(&self, theme: &Theme) -> Line;
}

pub trait LineWidget {
    /// Numbered list printed before the first prompt.
    fn list_lines(&self) -> Vec<String>;

    fn prompt_text(&self) -> String;

    /// Consumes one line of input.
    fn handle_line(&mut self, line: &str) -> LineOutcome;

    /// Progress shown after a line that did not finish the prompt.
    fn status(&self) -> Option<String> {
        None
    }
}
