//! Character-grid rasterizer.
//!
//! Pure logic with no terminal I/O:
//!
//! - [`Canvas`]: fixed-size cell buffer with a single clipped writer
//! - [`Rotation`]: rotation about a pivot, applied to every logical coordinate
//! - outline primitives (`draw_*`) and span fills (`fill_*`) on `Canvas`
//! - [`ShadeScale`] / [`colorize`]: intensity-to-glyph mapping and true-color glyphs
//! - [`FrameSnapshot`]: the previous frame handed to the delta emitter
//!
//! # Example
//!
//! ```
//! use monoglyph_core::Canvas;
//!
//! let mut canvas = Canvas::new(10, 10, '.').unwrap();
//! canvas.draw_rect((1, 1), 5, 5, '#');
//! assert_eq!(canvas.to_lines()[1], ".#####....");
//! assert_eq!(canvas.to_lines()[2], ".#...#....");
//! ```

pub mod canvas;
pub mod config;
pub mod error;
pub mod fill;
pub mod raster;
pub mod shade;
pub mod snapshot;
pub mod transform;

pub use monoglyph_types as types;

pub use canvas::Canvas;
pub use config::CanvasConfig;
pub use error::{CanvasError, Result};
pub use raster::LinePoints;
pub use shade::{colorize, ShadeScale};
pub use snapshot::FrameSnapshot;
pub use transform::Rotation;
