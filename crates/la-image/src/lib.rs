/// Image-side stages of the conversion pipeline.
///
/// Padding to power-of-two dimensions, partitioning into a square grid of
/// sub-buffers, brightness scoring, and disk loading. Everything here is
/// recomputed per run; nothing holds state.

pub mod brightness;
pub mod loader;
pub mod pad;
pub mod partition;

pub use brightness::brightness;
pub use loader::load_image;
pub use pad::{pad, padded_dims};
pub use partition::partition;
