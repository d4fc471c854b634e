//! Error types for canvas construction and configuration.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    #[error("invalid canvas dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: u16, height: u16 },

    #[error("shade scale must contain at least one glyph")]
    EmptyShadeScale,

    #[error("invalid canvas config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CanvasError>;
