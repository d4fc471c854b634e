//! monoglyph (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as `monoglyph::{types, core, term}`,
//! plus the `spin` demo used by the `monoglyph-spin` binary.

pub mod spin;

pub use monoglyph_core as core;
pub use monoglyph_term as term;
pub use monoglyph_types as types;
