/// Shared types, errors, and configuration for lumascii.
///
/// This crate contains the types and plumbing used across the lumascii
/// workspace: the immutable pixel buffer, the output character grid, the
/// error taxonomy, charset presets, session configuration, and the glyph
/// source trait.

pub mod buffer;
pub mod charset;
pub mod config;
pub mod error;
pub mod grid;
pub mod traits;

pub use buffer::ImageBuffer;
pub use config::SessionConfig;
pub use error::CoreError;
pub use grid::CharGrid;
pub use traits::{GlyphMask, GlyphSource, GLYPH_SIZE};
