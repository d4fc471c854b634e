//! Shared data types for the monoglyph renderer.
//!
//! Everything here is plain data with no external dependencies, so it can be used
//! by the pure rasterizer (`monoglyph-core`) and the terminal emitter
//! (`monoglyph-term`) alike.
//!
//! # Glyphs
//!
//! A [`Glyph`] is the unit stored in one canvas cell: a bare character, or a
//! character paired with a 24-bit foreground color. The escape envelope for a
//! colored glyph is only produced when a frame is emitted.
//!
//! # Escape sequences
//!
//! | Constant | Sequence | Meaning |
//! |----------|----------|---------|
//! | `CURSOR_HOME` | `ESC [ H` | Move cursor to the top-left cell |
//! | `RESET_ATTRIBUTES` | `ESC [ 0 m` | Reset colors and attributes |
//!
//! # Examples
//!
//! ```
//! use monoglyph_types::{Glyph, Point, Rgb};
//!
//! let plain = Glyph::from('#');
//! assert_eq!(plain.ch(), '#');
//! assert_eq!(plain.color(), None);
//!
//! let teal = plain.with_color(Rgb::new(120, 255, 210));
//! assert_eq!(teal.ch(), '#');
//! assert_eq!(teal.color(), Some(Rgb::new(120, 255, 210)));
//!
//! let p: Point = (3, 4).into();
//! assert_eq!(p, Point::new(3.0, 4.0));
//! ```

/// Glyphs of increasing visual density used by the default shade scale.
pub const SHADE_CHARS: &str = ".:-=+*#%@";

/// Cell value used when no default is configured.
pub const DEFAULT_CELL: char = ' ';

/// `ESC [ H`: move the cursor to the home position.
pub const CURSOR_HOME: &str = "\x1b[H";

/// `ESC [ 0 m`: reset all attributes.
pub const RESET_ATTRIBUTES: &str = "\x1b[0m";

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The value held by a single canvas cell.
///
/// The canvas never inspects a glyph; it only stores it and hands it to the
/// emitter, which treats each glyph as one atomic unit of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// A bare display character.
    Plain(char),
    /// A character drawn with a true-color foreground.
    Colored { ch: char, color: Rgb },
}

impl Glyph {
    /// The display character, without color.
    pub const fn ch(self) -> char {
        match self {
            Glyph::Plain(ch) | Glyph::Colored { ch, .. } => ch,
        }
    }

    /// The foreground color, if any.
    pub const fn color(self) -> Option<Rgb> {
        match self {
            Glyph::Plain(_) => None,
            Glyph::Colored { color, .. } => Some(color),
        }
    }

    /// Same character with `color` as its foreground (replacing any previous color).
    pub const fn with_color(self, color: Rgb) -> Self {
        Glyph::Colored {
            ch: self.ch(),
            color,
        }
    }

    /// Same character with `color` applied when it is `Some`.
    pub const fn with_optional_color(self, color: Option<Rgb>) -> Self {
        match color {
            Some(color) => self.with_color(color),
            None => self,
        }
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Glyph::Plain(DEFAULT_CELL)
    }
}

impl From<char> for Glyph {
    fn from(ch: char) -> Self {
        Glyph::Plain(ch)
    }
}

/// A logical (pre-transform) drawing coordinate.
///
/// Logical coordinates may be fractional, e.g. when a caller projects 3D
/// geometry; they are rounded to cells by the rotation transform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
