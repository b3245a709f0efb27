//! One prompt from start to finish.
//!
//! A [`Prompter`] owns the streams a prompt talks to and decides, once per
//! prompt, whether to run the raw-mode widget or the line fallback.

use std::io::{self, BufRead, Stderr, StdinLock, Write};
use std::time::Duration;

use log::{debug, info, warn};
use rust_select_core::choice_definitions::{PromptSpec, SelectionMode};
use rust_select_core::config::{DEFAULT_ESCAPE_TIMEOUT, DEFAULT_PAGE_SIZE};
use rust_select_core::error::{DecodeError, Error, Result};
use rust_select_core::file_handling::validate_prompt;

use super::cancel::CancelToken;
use super::colors::Theme;
use super::fallback;
use super::keys::KeyDecoder;
use super::multi::MultiSelectionState;
use super::raw_mode::{CrosstermBackend, RawModeBackend, RawModeHandle};
use super::render::RenderSurface;
use super::single::SelectionState;
use super::source::{ByteSource, StdinSource};
use super::types::Outcome;
use super::widget::{LineWidget, Widget};

/// Rows of a frame that are not choices: header, description and notice.
const FRAME_CHROME_ROWS: usize = 3;

/// Runs prompts against a terminal backend, a key source, a line source and
/// an output stream.
///
/// The key source is read in raw mode and the line source in the fallback;
/// on a real terminal both are standard input.
pub struct Prompter<B, K, L, W> {
    backend: B,
    keys: K,
    lines: L,
    output: W,
    cancel: CancelToken,
    escape_timeout: Duration,
}

/// A prompter on the process's standard streams.
pub type StdioPrompter = Prompter<CrosstermBackend, StdinSource, StdinLock<'static>, Stderr>;

impl StdioPrompter {
    /// Reads standard input and draws on standard error, leaving standard
    /// output free for the selected value.
    #[must_use]
    pub fn stdio() -> Self {
        Prompter::new(CrosstermBackend, StdinSource, io::stdin().lock(), io::stderr())
    }
}

impl<B, K, L, W> Prompter<B, K, L, W>
where
    B: RawModeBackend,
    K: ByteSource,
    L: BufRead,
    W: Write,
{
    pub fn new(backend: B, keys: K, lines: L, output: W) -> Self {
        Self {
            backend,
            keys,
            lines,
            output,
            cancel: CancelToken::new(),
            escape_timeout: DEFAULT_ESCAPE_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    #[must_use]
    pub fn with_escape_timeout(mut self, escape_timeout: Duration) -> Self {
        self.escape_timeout = escape_timeout;
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Asks for one choice (or several, in multi mode) and returns the
    /// selected value, or the selected values joined with commas.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The prompt is invalid (no choices, duplicate values, bad theme)
    /// - The user cancels, or the cancel token fires ([`Error::Cancelled`])
    /// - Raw mode cannot be changed ([`Error::TerminalState`])
    /// - Input cannot be read or decoded, or ends early ([`Error::Decode`])
    /// - Output cannot be written ([`Error::Stdio`])
    pub fn prompt(&mut self, spec: &PromptSpec) -> Result<String> {
        validate_prompt(&format!("prompt `{}`", spec.label), spec)?;
        let theme = Theme::from_definition(&spec.theme)?;

        let interactive = self.backend.is_terminal();
        let page_size = self.page_size(spec, interactive);
        debug!("Prompting `{}` with a page size of {page_size}", spec.label);

        match spec.mode {
            SelectionMode::Single => {
                let mut widget = SelectionState::new(spec, page_size);
                self.drive(&mut widget, &theme, interactive)
            }
            SelectionMode::Multi => {
                let mut widget = MultiSelectionState::new(spec, page_size);
                self.drive(&mut widget, &theme, interactive)
            }
        }
    }

    fn page_size(&self, spec: &PromptSpec, interactive: bool) -> usize {
        let mut page_size = spec.page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if interactive {
            if let Some((_, rows)) = self.backend.size() {
                let available = usize::from(rows).saturating_sub(FRAME_CHROME_ROWS);
                page_size = page_size.min(available);
            }
        }

        page_size.min(spec.choices.len()).max(1)
    }

    fn drive<Wd>(&mut self, widget: &mut Wd, theme: &Theme, interactive: bool) -> Result<String>
    where
        Wd: Widget + LineWidget,
    {
        if !interactive {
            info!("Input is not a terminal, falling back to line prompts");
            return fallback::run(widget, &mut self.lines, &mut self.output, &self.cancel);
        }

        match self.interactive(widget, theme) {
            Err(Error::NotATty) => {
                info!("Raw mode unavailable, falling back to line prompts");
                fallback::run(widget, &mut self.lines, &mut self.output, &self.cancel)
            }
            result => result,
        }
    }

    fn interactive<Wd>(&mut self, widget: &mut Wd, theme: &Theme) -> Result<String>
    where
        Wd: Widget + ?Sized,
    {
        let mut raw_mode = RawModeHandle::enable(&self.backend)?;
        let mut keys = KeyDecoder::new(&mut self.keys, self.escape_timeout);
        let columns = self.backend.size().map(|(columns, _)| columns);
        let mut surface = RenderSurface::new(&mut self.output)
            .with_width(columns)
            .hide_cursor()?;

        surface.save_anchor(widget.max_height())?;
        surface.redraw(&widget.frame(theme))?;

        let result = loop {
            if self.cancel.is_cancelled() {
                debug!("Cancelled by caller before reading a key");
                break Err(Error::Cancelled);
            }

            let key = match keys.next_key() {
                Ok(Some(key)) => key,
                Ok(None) => break Err(DecodeError::UnexpectedEof.into()),
                Err(e) => break Err(e.into()),
            };

            match widget.handle_key(key) {
                Outcome::Ignored => {}
                Outcome::Redraw => surface.redraw(&widget.frame(theme))?,
                Outcome::Confirmed(value) => break Ok(value),
                Outcome::Cancelled => {
                    debug!("Cancelled from the keyboard");
                    break Err(Error::Cancelled);
                }
            }
        };

        let summary = result.is_ok().then(|| widget.summary(theme));
        let cleared = surface.finish(summary.as_ref());
        drop(surface);
        let restored = raw_mode.restore();

        match result {
            Ok(value) => {
                cleared?;
                restored?;
                Ok(value)
            }
            Err(e) => {
                // Keep the prompt's error, cleanup failures are only logged
                for cleanup in [cleared, restored].into_iter().filter_map(Result::err) {
                    warn!("Cleanup after a failed prompt also failed: {cleanup}");
                }
                Err(e)
            }
        }
    }
}

/// Runs one prompt on the standard streams.
///
/// # Errors
///
/// See [`Prompter::prompt`].
pub fn select(spec: &PromptSpec) -> Result<String> {
    Prompter::stdio().prompt(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::source::ReaderSource;
    use rust_select_core::choice_definitions::Choice;
    use std::cell::Cell;
    use std::io::{empty, Cursor, Empty};

    #[derive(Default)]
    struct Tty {
        rows: u16,
        fail_disable: bool,
        enabled: Cell<usize>,
        terminal_checks: Cell<usize>,
    }

    impl RawModeBackend for Tty {
        fn is_terminal(&self) -> bool {
            self.terminal_checks.set(self.terminal_checks.get() + 1);
            true
        }

        fn enable_raw_mode(&self) -> io::Result<()> {
            self.enabled.set(self.enabled.get() + 1);
            Ok(())
        }

        fn disable_raw_mode(&self) -> io::Result<()> {
            if self.fail_disable {
                return Err(io::Error::new(io::ErrorKind::Other, "tcsetattr failed"));
            }
            Ok(())
        }

        fn size(&self) -> Option<(u16, u16)> {
            Some((80, self.rows))
        }
    }

    fn prompter<'a>(tty: &'a Tty, keys: &[u8]) -> Prompter<&'a Tty, ReaderSource<Cursor<Vec<u8>>>, Empty, Vec<u8>> {
        Prompter::new(
            tty,
            ReaderSource::new(Cursor::new(keys.to_vec())),
            empty(),
            Vec::new(),
        )
    }

    fn numbers(count: usize) -> PromptSpec {
        let choices = (1..=count).map(|i| Choice::labelled(format!("n{i}"))).collect();
        PromptSpec::new("Numbers", choices)
    }

    #[test]
    fn test_page_size_clamped_to_terminal_and_choices() {
        let tty = Tty {
            rows: 8,
            ..Tty::default()
        };
        let prompter = prompter(&tty, b"");

        assert_eq!(prompter.page_size(&numbers(30), true), 5);
        assert_eq!(prompter.page_size(&numbers(3), true), 3);
        assert_eq!(prompter.page_size(&numbers(30), false), 10);
        assert_eq!(
            prompter.page_size(&numbers(30).with_page_size(20), false),
            20
        );
    }

    #[test]
    fn test_page_size_never_zero_on_tiny_terminal() {
        let tty = Tty {
            rows: 2,
            ..Tty::default()
        };
        assert_eq!(prompter(&tty, b"").page_size(&numbers(30), true), 1);
    }

    #[test]
    fn test_confirm_leaves_summary() {
        let tty = Tty {
            rows: 24,
            ..Tty::default()
        };
        let mut prompter = prompter(&tty, b"2");
        assert_eq!(prompter.prompt(&numbers(3)).unwrap(), "n2");

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert!(output.contains("\x1b[?25l"));
        assert!(output.ends_with("\x1b[?25h"));
        assert!(output.contains("n2"));
        assert_eq!(tty.enabled.get(), 1);
        assert_eq!(tty.terminal_checks.get(), 1);
    }

    #[test]
    fn test_restore_failure_does_not_hide_cancellation() {
        let tty = Tty {
            rows: 24,
            fail_disable: true,
            ..Tty::default()
        };
        let result = prompter(&tty, b"\x03").prompt(&numbers(3));
        assert!(matches!(result, Err(Error::Cancelled)));
    }

    #[test]
    fn test_restore_failure_reported_after_confirm() {
        let tty = Tty {
            rows: 24,
            fail_disable: true,
            ..Tty::default()
        };
        let result = prompter(&tty, b"1").prompt(&numbers(3));
        assert!(matches!(result, Err(Error::TerminalState(_))));
    }

    #[test]
    fn test_invalid_prompt_is_rejected_before_raw_mode() {
        let tty = Tty::default();
        let spec = PromptSpec::new("Empty", Vec::new());
        assert!(matches!(
            prompter(&tty, b"").prompt(&spec),
            Err(Error::EmptyChoices(_))
        ));
        assert_eq!(tty.enabled.get(), 0);
    }
}
