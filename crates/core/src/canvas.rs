//! Canvas: the fixed-size cell buffer every primitive draws into.
//!
//! Cells are stored in a flat row-major `Vec` (`y * width + x`). The buffer is
//! sized once at construction and never resized.
//!
//! All drawing goes through [`Canvas::write_cell`], which silently discards
//! out-of-bounds coordinates. Clipping is therefore uniform across every
//! primitive.
//!
//! A canvas is owned by a single caller and mutated through `&mut self`; it
//! carries no internal synchronization. Concurrent producers must serialize
//! access themselves.

use tracing::{debug, trace};

use crate::config::CanvasConfig;
use crate::error::{CanvasError, Result};
use crate::shade::ShadeScale;
use crate::snapshot::FrameSnapshot;
use crate::transform::Rotation;
use crate::types::{Glyph, Point};

#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u16,
    height: u16,
    default_cell: Glyph,
    cells: Vec<Glyph>,
    rotation: Rotation,
    shade: ShadeScale,
}

impl Canvas {
    /// Create a canvas with every cell set to `default_cell`.
    pub fn new(width: u16, height: u16, default_cell: impl Into<Glyph>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidDimensions { width, height });
        }
        let default_cell = default_cell.into();
        let len = (width as usize) * (height as usize);
        debug!(width, height, ?default_cell, "canvas created");
        Ok(Self {
            width,
            height,
            default_cell,
            cells: vec![default_cell; len],
            rotation: Rotation::IDENTITY,
            shade: ShadeScale::default(),
        })
    }

    pub fn from_config(config: &CanvasConfig) -> Result<Self> {
        Self::new(config.width, config.height, config.default_cell)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn default_cell(&self) -> Glyph {
        self.default_cell
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Glyph] {
        &self.cells
    }

    pub fn row(&self, y: u16) -> Option<&[Glyph]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.cells[start..start + self.width as usize])
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= i32::from(self.width) || y >= i32::from(self.height) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Glyph> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// The single clipped writer. Coordinates are cell coordinates (already
    /// transformed); anything outside the buffer is dropped.
    #[inline]
    pub(crate) fn write_cell(&mut self, x: i32, y: i32, glyph: Glyph) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = glyph;
        }
    }

    /// Reset every cell to the canvas default.
    pub fn clear(&mut self) {
        self.cells.fill(self.default_cell);
    }

    /// Set every cell to `fill`.
    pub fn clear_with(&mut self, fill: impl Into<Glyph>) {
        self.cells.fill(fill.into());
    }

    /// Rotate subsequently drawn coordinates by `degrees` about `(pivot_x, pivot_y)`.
    ///
    /// Already written cells are unaffected. The rotation stays in effect until
    /// changed again.
    pub fn set_rotation(&mut self, degrees: f64, pivot_x: i32, pivot_y: i32) {
        self.rotation = Rotation::from_degrees(degrees, pivot_x, pivot_y);
        trace!(degrees, pivot_x, pivot_y, "rotation set");
    }

    pub fn reset_rotation(&mut self) {
        self.rotation = Rotation::IDENTITY;
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Map a logical point through the active rotation.
    #[inline]
    pub fn transform_point(&self, p: impl Into<Point>) -> (i32, i32) {
        self.rotation.transform_point(p.into())
    }

    /// Glyph for `intensity` on the canvas shade scale; zero maps to the
    /// canvas default cell.
    pub fn shade_for_intensity(&self, intensity: f64) -> Glyph {
        self.shade.shade(intensity, self.default_cell)
    }

    /// The scale `shade_for_intensity` maps onto; `.:-=+*#%@` unless replaced.
    pub fn shade_scale(&self) -> &ShadeScale {
        &self.shade
    }

    pub fn set_shade_scale(&mut self, scale: ShadeScale) {
        self.shade = scale;
    }

    /// Copy the current cells into a new previous-frame snapshot.
    pub fn snapshot(&self) -> FrameSnapshot {
        let mut snap = FrameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Refresh `snap` with the current cells, reusing its row allocations.
    pub fn snapshot_into(&self, snap: &mut FrameSnapshot) {
        let rows = snap.rows_mut();
        rows.resize_with(self.height as usize, Vec::new);
        for (row, src) in rows
            .iter_mut()
            .zip(self.cells.chunks_exact(self.width as usize))
        {
            row.clear();
            row.extend_from_slice(src);
        }
    }

    /// Plain characters of each row, colors dropped.
    pub fn to_lines(&self) -> Vec<String> {
        self.cells
            .chunks_exact(self.width as usize)
            .map(|row| row.iter().map(|g| g.ch()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaced_shade_scale_drives_intensity_lookup() {
        let mut c = Canvas::new(2, 2, ' ').unwrap();
        assert_eq!(c.shade_scale().len(), 9);

        c.set_shade_scale(ShadeScale::new(['o', 'O']).unwrap());
        assert_eq!(c.shade_scale().len(), 2);
        assert_eq!(c.shade_for_intensity(0.0), Glyph::from(' '));
        assert_eq!(c.shade_for_intensity(1.0), Glyph::from('O'));
    }

    #[test]
    fn zero_width_or_height_is_rejected() {
        assert_eq!(
            Canvas::new(0, 5, '.').unwrap_err(),
            CanvasError::InvalidDimensions {
                width: 0,
                height: 5
            }
        );
        assert!(Canvas::new(5, 0, '.').is_err());
    }

    #[test]
    fn new_canvas_is_filled_with_default() {
        let c = Canvas::new(4, 3, '.').unwrap();
        assert_eq!(c.cells().len(), 12);
        assert!(c.cells().iter().all(|g| *g == Glyph::Plain('.')));
    }

    #[test]
    fn out_of_bounds_writes_are_discarded() {
        let mut c = Canvas::new(3, 3, '.').unwrap();
        let before = c.clone();
        c.write_cell(-1, 0, Glyph::from('#'));
        c.write_cell(0, -1, Glyph::from('#'));
        c.write_cell(3, 0, Glyph::from('#'));
        c.write_cell(0, 3, Glyph::from('#'));
        assert_eq!(c, before);

        c.write_cell(2, 2, Glyph::from('#'));
        assert_eq!(c.get(2, 2), Some(Glyph::from('#')));
    }

    #[test]
    fn clear_with_then_clear_restores_default() {
        let mut c = Canvas::new(2, 2, '.').unwrap();
        c.clear_with('x');
        assert_eq!(c.to_lines(), vec!["xx", "xx"]);
        c.clear();
        assert_eq!(c.to_lines(), vec!["..", ".."]);
    }

    #[test]
    fn snapshot_into_reuses_and_reshapes() {
        let mut c = Canvas::new(3, 2, '.').unwrap();
        c.write_cell(1, 1, Glyph::from('o'));
        let mut snap = FrameSnapshot::from_rows(vec![vec![Glyph::from('z'); 7]; 5]);
        c.snapshot_into(&mut snap);
        assert!(snap.matches_shape(3, 2));
        assert_eq!(snap.get(1, 1), Some(Glyph::from('o')));
        assert_eq!(snap, c.snapshot());
    }

    #[test]
    fn row_access_is_bounded() {
        let c = Canvas::new(3, 2, '.').unwrap();
        assert_eq!(c.row(1).map(|r| r.len()), Some(3));
        assert!(c.row(2).is_none());
    }
}
