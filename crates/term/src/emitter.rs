//! Frame emission: full redraws and cell-level deltas.
//!
//! Encoders build the escape stream into a reusable `Vec<u8>` without touching
//! any terminal; `render_*` write the encoded frame to a sink.
//!
//! Output format:
//! - full frame: `ESC [ H`, then every row, rows separated by `\n`
//! - delta frame: for each changed cell, `ESC [ row ; col H` (1-indexed) then the glyph
//! - colored glyph: `ESC [ 38;2;r;g;b m`, the character, `ESC [ 0 m`

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use crate::core::{Canvas, FrameSnapshot};
use crate::types::{Glyph, Rgb, CURSOR_HOME};

/// What an encode call produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// The whole buffer was written.
    Full,
    /// Only changed cells were written; `changed` may be zero.
    Delta { changed: usize },
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(canvas: &Canvas, out: &mut Vec<u8>) -> Result<()> {
    out.queue(Print(CURSOR_HOME))?;
    for y in 0..canvas.height() {
        if let Some(row) = canvas.row(y) {
            for &glyph in row {
                queue_glyph(out, glyph)?;
            }
        }
        if y + 1 < canvas.height() {
            out.queue(Print('\n'))?;
        }
    }
    Ok(())
}

/// Encode only the cells that differ from `prev` into `out`.
///
/// Falls back to [`encode_full_into`] when `prev` is missing or its shape
/// differs from the canvas. Nothing is written when no cell changed.
pub fn encode_delta_into(
    canvas: &Canvas,
    prev: Option<&FrameSnapshot>,
    out: &mut Vec<u8>,
) -> Result<FrameKind> {
    let prev = match prev {
        Some(prev) if prev.matches_shape(canvas.width(), canvas.height()) => prev,
        Some(_) => {
            debug!("previous frame shape differs from canvas, full redraw");
            encode_full_into(canvas, out)?;
            return Ok(FrameKind::Full);
        }
        None => {
            debug!("no previous frame, full redraw");
            encode_full_into(canvas, out)?;
            return Ok(FrameKind::Full);
        }
    };

    let mut changed = 0;
    for (y, row) in prev.rows().iter().enumerate() {
        let y = y as u16;
        let Some(current) = canvas.row(y) else {
            continue;
        };
        for (x, (&old, &new)) in row.iter().zip(current).enumerate() {
            if old == new {
                continue;
            }
            out.queue(cursor::MoveTo(x as u16, y))?;
            queue_glyph(out, new)?;
            changed += 1;
        }
    }
    Ok(FrameKind::Delta { changed })
}

/// Write a full frame to `sink` and flush.
pub fn render_full(canvas: &Canvas, sink: &mut impl Write) -> Result<()> {
    let mut buf = Vec::new();
    encode_full_into(canvas, &mut buf)?;
    sink.write_all(&buf)?;
    sink.flush()?;
    Ok(())
}

/// Write the delta against `prev` to `sink`, flushing only when something was encoded.
///
/// The caller snapshots the canvas afterwards to serve as the next `prev`.
pub fn render_delta(
    canvas: &Canvas,
    prev: Option<&FrameSnapshot>,
    sink: &mut impl Write,
) -> Result<FrameKind> {
    let mut buf = Vec::new();
    let kind = encode_delta_into(canvas, prev, &mut buf)?;
    if !buf.is_empty() {
        sink.write_all(&buf)?;
        sink.flush()?;
    }
    Ok(kind)
}

/// The exact text a glyph is emitted as.
pub fn glyph_to_ansi(glyph: Glyph) -> String {
    match glyph {
        Glyph::Plain(ch) => ch.to_string(),
        Glyph::Colored { ch, color } => {
            format!("{}{ch}{}", SetForegroundColor(rgb_to_color(color)), ResetColor)
        }
    }
}

fn queue_glyph(out: &mut Vec<u8>, glyph: Glyph) -> Result<()> {
    match glyph {
        Glyph::Plain(ch) => {
            out.queue(Print(ch))?;
        }
        Glyph::Colored { ch, color } => {
            out.queue(SetForegroundColor(rgb_to_color(color)))?;
            out.queue(Print(ch))?;
            out.queue(ResetColor)?;
        }
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
