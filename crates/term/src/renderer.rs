//! TerminalRenderer: flushes a canvas to a real terminal.
//!
//! The renderer keeps the previous frame itself so callers only hand it the
//! canvas each frame.
//!
//! Outside the alternate screen the first draw is a full redraw and later draws
//! are deltas. After `enter` or `invalidate` the next draw clears the screen and
//! diffs against a blank frame instead, so output stays correct in raw mode
//! where a bare `\n` does not return the carriage.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::core::{Canvas, FrameSnapshot};
use crate::emitter::{encode_delta_into, FrameKind};
use crate::types::Glyph;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameSnapshot>,
    clear_pending: bool,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Enable raw mode, switch to the alternate screen and hide the cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.invalidate();
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            clear_pending: false,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Clear the screen and redraw every cell on the next draw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.clear_pending = true;
    }

    /// Emit `canvas` as a delta against the previous draw, then remember it.
    ///
    /// The previous snapshot is refreshed in place, so steady-state frames do
    /// not reallocate it.
    pub fn draw(&mut self, canvas: &Canvas) -> Result<FrameKind> {
        self.buf.clear();
        if self.clear_pending {
            self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
            self.last
                .get_or_insert_with(FrameSnapshot::default)
                .reset(canvas.width(), canvas.height(), Glyph::Plain(' '));
            self.clear_pending = false;
        }

        let kind = encode_delta_into(canvas, self.last.as_ref(), &mut self.buf)?;
        if !self.buf.is_empty() {
            self.flush_buf()?;
        }

        match self.last.as_mut() {
            Some(prev) => canvas.snapshot_into(prev),
            None => self.last = Some(canvas.snapshot()),
        }
        Ok(kind)
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}
