//! In-place redraw of a widget below the current cursor position.
//!
//! The surface saves the cursor position once (the anchor) and every frame
//! starts by returning there and clearing everything below it, so a frame
//! never leaves stale rows behind and never pushes more than one frame's
//! worth of lines into the scrollback.

use std::io::Write;
use std::ops::{Deref, DerefMut};

use crossterm::cursor::{self, MoveToColumn, MoveToNextLine, MoveUp, RestorePosition, SavePosition};
use crossterm::style::{Print, PrintStyledContent, StyledContent};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};
use log::warn;
use rust_select_core::error::Result;
use unicode_width::UnicodeWidthChar;

/// One row of styled segments.
pub type Line = Vec<StyledContent<String>>;

/// Cuts `line` down to `width` terminal columns, keeping each segment's style.
///
/// Wide glyphs count as two columns and are dropped whole rather than split.
pub fn clip_line(line: &[StyledContent<String>], width: usize) -> Line {
    let mut remaining = width;
    let mut clipped = Vec::with_capacity(line.len());

    for segment in line {
        let mut kept = String::new();
        for ch in segment.content().chars() {
            let columns = ch.width().unwrap_or(0);
            if columns > remaining {
                remaining = 0;
                break;
            }
            remaining -= columns;
            kept.push(ch);
        }

        clipped.push(StyledContent::new(*segment.style(), kept));
        if remaining == 0 {
            break;
        }
    }

    clipped
}

pub struct RenderSurface<W: Write> {
    out: W,
    anchored: bool,
    width: Option<usize>,
}

impl<W: Write> RenderSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            anchored: false,
            width: None,
        }
    }

    /// Clips every written line to `columns`, so one line is one screen row
    /// and the rows reserved by [`RenderSurface::save_anchor`] are enough.
    #[must_use]
    pub fn with_width(mut self, columns: Option<u16>) -> Self {
        self.width = columns.filter(|&c| c > 0).map(usize::from);
        self
    }

    /// Remembers the current position as the redraw origin.
    ///
    /// `reserve` rows are scrolled into view first, so the anchor does not
    /// move when a frame is drawn at the bottom of the screen.
    pub fn save_anchor(&mut self, reserve: u16) -> Result<()> {
        if reserve > 0 {
            // LF, not a cursor move: only a real line feed scrolls at the last row
            queue!(
                self.out,
                Print("\n".repeat(usize::from(reserve))),
                MoveUp(reserve)
            )?;
        }
        queue!(self.out, MoveToColumn(0), SavePosition)?;
        self.anchored = true;
        Ok(())
    }

    pub fn restore_to_anchor(&mut self) -> Result<()> {
        queue!(self.out, RestorePosition)?;
        Ok(())
    }

    pub fn clear_from_anchor_to_end(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::FromCursorDown))?;
        Ok(())
    }

    pub fn write_line(&mut self, line: &[StyledContent<String>]) -> Result<()> {
        let clipped;
        let line = match self.width {
            Some(width) => {
                clipped = clip_line(line, width);
                clipped.as_slice()
            }
            None => line,
        };

        queue!(self.out, Clear(ClearType::CurrentLine))?;
        for segment in line {
            queue!(self.out, PrintStyledContent(segment.clone()))?;
        }
        queue!(self.out, MoveToNextLine(1))?;
        Ok(())
    }

    /// Replaces the previous frame with `lines`.
    pub fn redraw(&mut self, lines: &[Line]) -> Result<()> {
        if self.anchored {
            self.restore_to_anchor()?;
        }
        self.clear_from_anchor_to_end()?;
        for line in lines {
            self.write_line(line)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Clears the last frame, leaving `summary` in its place if given.
    pub fn finish(&mut self, summary: Option<&Line>) -> Result<()> {
        let empty: [Line; 0] = [];
        match summary {
            Some(line) => self.redraw(std::slice::from_ref(line)),
            None => self.redraw(&empty),
        }
    }

    /// Hides the cursor until the returned guard is dropped.
    pub fn hide_cursor(mut self) -> Result<HiddenCursor<W>> {
        execute!(self.out, cursor::Hide)?;
        Ok(HiddenCursor { surface: self })
    }

    pub fn show_cursor(&mut self) -> Result<()> {
        execute!(self.out, cursor::Show)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// A surface whose cursor is hidden; shows it again on drop.
pub struct HiddenCursor<W: Write> {
    surface: RenderSurface<W>,
}

impl<W: Write> Deref for HiddenCursor<W> {
    type Target = RenderSurface<W>;

    fn deref(&self) -> &Self::Target {
        &self.surface
    }
}

impl<W: Write> DerefMut for HiddenCursor<W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.surface
    }
}

impl<W: Write> Drop for HiddenCursor<W> {
    fn drop(&mut self) {
        if let Err(e) = self.surface.show_cursor() {
            warn!("Failed to show cursor: {e}");
        }
    }
}
