//! Previous-frame buffer handed from one frame to the next.

use crate::types::Glyph;

/// A copy of a canvas' cells, stored as rows.
///
/// The caller owns the snapshot between frames. Rows may be ragged when
/// built with [`FrameSnapshot::from_rows`]; such a snapshot never matches a
/// canvas shape, so the delta emitter falls back to a full redraw.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameSnapshot {
    rows: Vec<Vec<Glyph>>,
}

impl FrameSnapshot {
    pub fn from_rows(rows: Vec<Vec<Glyph>>) -> Self {
        Self { rows }
    }

    /// A `width`x`height` snapshot with every cell set to `glyph`.
    pub fn filled(width: u16, height: u16, glyph: Glyph) -> Self {
        let mut snap = Self::default();
        snap.reset(width, height, glyph);
        snap
    }

    /// Reshape to `width`x`height` and set every cell to `glyph`, reusing row allocations.
    pub fn reset(&mut self, width: u16, height: u16, glyph: Glyph) {
        self.rows.resize_with(height as usize, Vec::new);
        for row in &mut self.rows {
            row.clear();
            row.resize(width as usize, glyph);
        }
    }

    pub fn rows(&self) -> &[Vec<Glyph>] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Vec<Glyph>> {
        &mut self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// True when there are exactly `height` rows of exactly `width` glyphs.
    pub fn matches_shape(&self, width: u16, height: u16) -> bool {
        self.rows.len() == height as usize
            && self.rows.iter().all(|row| row.len() == width as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }
}
