//! Line-based prompt used when input is not an interactive terminal.
//!
//! Nothing here touches raw mode or cursor control: the list is printed once
//! as numbered lines and whole lines are read until the widget confirms.

use std::io::{BufRead, Write};

use log::debug;
use rust_select_core::error::{DecodeError, Error, Result};

use super::cancel::CancelToken;
use super::types::LineOutcome;
use super::widget::LineWidget;

/// Runs `widget` over line input until it confirms.
///
/// # Errors
///
/// Returns [`Error::Cancelled`] if `cancel` fires before a read,
/// [`Error::Decode`] if reading fails or input ends first, and
/// [`Error::Stdio`] if the prompt cannot be written.
pub fn run<L, R, W>(
    widget: &mut L,
    input: &mut R,
    output: &mut W,
    cancel: &CancelToken,
) -> Result<String>
where
    L: LineWidget + ?Sized,
    R: BufRead,
    W: Write,
{
    for line in widget.list_lines() {
        writeln!(output, "{line}")?;
    }

    loop {
        if cancel.is_cancelled() {
            debug!("Cancelled by caller before reading a line");
            return Err(Error::Cancelled);
        }

        write!(output, "{}", widget.prompt_text())?;
        output.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line).map_err(DecodeError::Read)?;
        if read == 0 {
            writeln!(output)?;
            return Err(DecodeError::UnexpectedEof.into());
        }

        match widget.handle_line(&line) {
            LineOutcome::Confirmed(value) => return Ok(value),
            LineOutcome::Reprompt(message) => {
                if let Some(message) = message {
                    writeln!(output, "{message}")?;
                }
                if let Some(status) = widget.status() {
                    writeln!(output, "{status}")?;
                }
            }
        }
    }
}
