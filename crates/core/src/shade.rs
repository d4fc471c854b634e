//! Intensity shading and color wrapping.

use crate::error::{CanvasError, Result};
use crate::types::{Glyph, Rgb, SHADE_CHARS};

/// Ordered glyphs of increasing visual density.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadeScale {
    glyphs: Vec<char>,
}

impl Default for ShadeScale {
    fn default() -> Self {
        Self {
            glyphs: SHADE_CHARS.chars().collect(),
        }
    }
}

impl ShadeScale {
    pub fn new(glyphs: impl IntoIterator<Item = char>) -> Result<Self> {
        let glyphs: Vec<char> = glyphs.into_iter().collect();
        if glyphs.is_empty() {
            return Err(CanvasError::EmptyShadeScale);
        }
        Ok(Self { glyphs })
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Map `intensity` (clamped to `[0, 1]`) to a glyph.
    ///
    /// Zero (and NaN) returns `empty`. Otherwise the scale is indexed at
    /// `floor(intensity * (len - 1))`.
    pub fn shade(&self, intensity: f64, empty: Glyph) -> Glyph {
        if intensity.is_nan() {
            return empty;
        }
        let clamped = intensity.clamp(0.0, 1.0);
        if clamped <= 0.0 {
            return empty;
        }
        let idx = (clamped * (self.glyphs.len() - 1) as f64) as usize;
        Glyph::Plain(self.glyphs[idx.min(self.glyphs.len() - 1)])
    }
}

/// Wrap `glyph` in a true-color foreground.
///
/// A glyph that is already colored gets its color replaced rather than nested.
pub fn colorize(glyph: impl Into<Glyph>, r: u8, g: u8, b: u8) -> Glyph {
    glyph.into().with_color(Rgb::new(r, g, b))
}
