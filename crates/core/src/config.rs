//! Canvas configuration.

use serde::Deserialize;

use crate::error::{CanvasError, Result};
use crate::types::DEFAULT_CELL;

/// Construction parameters for a [`Canvas`](crate::Canvas).
///
/// Missing fields fall back to an 80x40 canvas filled with spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u16,
    pub height: u16,
    pub default_cell: char,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 40,
            default_cell: DEFAULT_CELL,
        }
    }
}

impl CanvasConfig {
    pub fn new(width: u16, height: u16, default_cell: char) -> Self {
        Self {
            width,
            height,
            default_cell,
        }
    }

    /// Parse a JSON document such as `{"width": 40, "height": 20, "default_cell": "."}`.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| CanvasError::Config(e.to_string()))
    }
}
