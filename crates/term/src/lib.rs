//! Terminal output for monoglyph canvases.
//!
//! Frames are serialized either as a full redraw or as a delta that repositions
//! the cursor only for cells that changed since the previous frame. Encoders are
//! pure (they fill a byte buffer); [`TerminalRenderer`] owns the terminal.

pub mod emitter;
pub mod renderer;

pub use monoglyph_core as core;
pub use monoglyph_types as types;

pub use emitter::{
    encode_delta_into, encode_full_into, glyph_to_ansi, render_delta, render_full, FrameKind,
};
pub use renderer::TerminalRenderer;
