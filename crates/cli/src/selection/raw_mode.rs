//! Exclusive raw-mode ownership of the controlling terminal.
//!
//! Raw mode is only ever held through a [`RawModeHandle`]; dropping the handle
//! restores the terminal attributes saved when it was enabled, whichever way
//! the session ends.

use std::io::{self, IsTerminal};

use crossterm::terminal;
use log::{debug, warn};
use rust_select_core::error::{Error, Result};

/// The terminal operations the engine needs, so tests can stand in for a TTY.
pub trait RawModeBackend {
    /// Whether input comes from an interactive terminal.
    fn is_terminal(&self) -> bool;

    fn enable_raw_mode(&self) -> io::Result<()>;

    fn disable_raw_mode(&self) -> io::Result<()>;

    /// Columns and rows, when known.
    fn size(&self) -> Option<(u16, u16)>;
}

impl<B: RawModeBackend + ?Sized> RawModeBackend for &B {
    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }

    fn enable_raw_mode(&self) -> io::Result<()> {
        (**self).enable_raw_mode()
    }

    fn disable_raw_mode(&self) -> io::Result<()> {
        (**self).disable_raw_mode()
    }

    fn size(&self) -> Option<(u16, u16)> {
        (**self).size()
    }
}

/// Standard input read as keys, widget drawn on standard error.
///
/// crossterm saves the original termios on enable and writes it back
/// unchanged on disable.
#[derive(Default, Clone, Copy, Debug)]
pub struct CrosstermBackend;

impl RawModeBackend for CrosstermBackend {
    fn is_terminal(&self) -> bool {
        io::stdin().is_terminal() && io::stderr().is_terminal()
    }

    fn enable_raw_mode(&self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    fn disable_raw_mode(&self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }

    fn size(&self) -> Option<(u16, u16)> {
        terminal::size().ok()
    }
}

/// A descriptor that passed the terminal check can still refuse terminal
/// attributes, e.g. a pseudo-file standing in for a TTY.
#[cfg(unix)]
fn is_not_a_tty(e: &io::Error) -> bool {
    e.raw_os_error() == Some(libc::ENOTTY)
}

#[cfg(not(unix))]
fn is_not_a_tty(_e: &io::Error) -> bool {
    false
}

/// Proof of raw mode. Released exactly once: by [`RawModeHandle::restore`] or
/// on drop.
pub struct RawModeHandle<'a, B: RawModeBackend + ?Sized> {
    backend: &'a B,
    active: bool,
}

impl<'a, B: RawModeBackend + ?Sized> RawModeHandle<'a, B> {
    /// Puts the terminal into raw mode.
    ///
    /// Whether input is a terminal is the caller's decision, made once per
    /// prompt; this only asks the terminal to change mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotATty`] when the descriptor refuses terminal
    /// attributes (ENOTTY), and [`Error::TerminalState`] when the mode cannot
    /// be changed for any other reason.
    pub fn enable(backend: &'a B) -> Result<Self> {
        backend.enable_raw_mode().map_err(|e| {
            if is_not_a_tty(&e) {
                Error::NotATty
            } else {
                Error::TerminalState(e)
            }
        })?;
        debug!("Raw mode enabled");

        Ok(Self {
            backend,
            active: true,
        })
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Gives the original mode back. Safe to call more than once.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TerminalState`] if the terminal refuses the change.
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }

        // Not retried on failure: a second attempt would fail the same way
        self.active = false;
        self.backend
            .disable_raw_mode()
            .map_err(Error::TerminalState)?;
        debug!("Raw mode restored");

        Ok(())
    }
}

impl<B: RawModeBackend + ?Sized> Drop for RawModeHandle<'_, B> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("Failed to restore terminal mode: {e}");
        }
    }
}
