//! GPU renderers.
//!
//! - `shape`: every filled geometric command, tessellated, in one ordered pass
//! - `text`: glyph quads sampled from a fontdue-rasterized atlas

mod common;

pub mod shape;
pub mod text;
