//! Type definitions for the selection widgets.
//!
//! This module defines the key events produced by the decoder, the outcome a
//! widget reports after consuming one, and the scrolling viewport shared by
//! both widgets.

/// One logical key press decoded from the terminal byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Enter,
    Escape,
    CtrlC,
    Space,
    Printable(char),
    FunctionKey(u8),
    Unknown,
}

impl KeyEvent {
    /// The 1-based ordinal for digit keys `1`-`9`.
    #[must_use]
    pub fn digit(self) -> Option<usize> {
        match self {
            KeyEvent::Printable(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize),
            _ => None,
        }
    }
}

/// What a widget wants after consuming a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed, no redraw.
    Ignored,
    /// State changed, draw a new frame.
    Redraw,
    /// The widget finished with this value.
    Confirmed(String),
    /// The user backed out.
    Cancelled,
}

/// What a widget wants after consuming a line of fallback input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Confirmed(String),
    /// Ask again, optionally explaining what was wrong.
    Reprompt(Option<String>),
}

/// Visible window over the choice list.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ViewportState {
    pub offset: usize,
    pub height: usize,
}

impl ViewportState {
    #[must_use]
    pub fn new(height: usize) -> Self {
        Self {
            offset: 0,
            height: height.max(1),
        }
    }

    /// Scrolls just enough to keep `cursor` visible.
    pub fn follow(&mut self, cursor: usize) {
        if cursor < self.offset {
            self.offset = cursor;
        } else if cursor >= self.offset + self.height {
            self.offset = cursor + 1 - self.height;
        }
    }

    /// Indices of the rows currently on screen.
    #[must_use]
    pub fn visible(&self, len: usize) -> std::ops::Range<usize> {
        let end = (self.offset + self.height).min(len);
        self.offset.min(end)..end
    }
}

/// Moves a cursor one step, wrapping at both ends.
#[must_use]
pub fn step(cursor: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }

    if forward {
        (cursor + 1) % len
    } else {
        (cursor + len - 1) % len
    }
}

/// New cursor for a navigation key, `None` for every other key.
#[must_use]
pub fn navigate(key: KeyEvent, cursor: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }

    match key {
        KeyEvent::Up => Some(step(cursor, len, false)),
        KeyEvent::Down => Some(step(cursor, len, true)),
        KeyEvent::Home => Some(0),
        KeyEvent::End => Some(len - 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate() {
        assert_eq!(navigate(KeyEvent::Up, 0, 4), Some(3));
        assert_eq!(navigate(KeyEvent::Down, 3, 4), Some(0));
        assert_eq!(navigate(KeyEvent::Home, 2, 4), Some(0));
        assert_eq!(navigate(KeyEvent::End, 0, 4), Some(3));
        assert_eq!(navigate(KeyEvent::Left, 1, 4), None);
        assert_eq!(navigate(KeyEvent::Down, 0, 0), None);
    }

    #[test]
    fn test_digit_only_for_one_to_nine() {
        assert_eq!(KeyEvent::Printable('1').digit(), Some(1));
        assert_eq!(KeyEvent::Printable('9').digit(), Some(9));
        assert_eq!(KeyEvent::Printable('0').digit(), None);
        assert_eq!(KeyEvent::Printable('a').digit(), None);
        assert_eq!(KeyEvent::Space.digit(), None);
    }

    #[test]
    fn test_step_wraps() {
        assert_eq!(step(0, 3, false), 2);
        assert_eq!(step(2, 3, true), 0);
        assert_eq!(step(1, 3, true), 2);
        assert_eq!(step(0, 0, true), 0);
    }

    #[test]
    fn test_viewport_follow_scrolls_both_ways() {
        let mut viewport = ViewportState::new(3);
        viewport.follow(4);
        assert_eq!(viewport.offset, 2);
        assert_eq!(viewport.visible(10), 2..5);

        viewport.follow(0);
        assert_eq!(viewport.offset, 0);

        viewport.follow(9);
        assert_eq!(viewport.visible(10), 7..10);
    }

    #[test]
    fn test_viewport_visible_clamps_to_len() {
        let viewport = ViewportState::new(10);
        assert_eq!(viewport.visible(3), 0..3);
    }

    #[test]
    fn test_viewport_height_is_at_least_one() {
        assert_eq!(ViewportState::new(0).height, 1);
    }
}
