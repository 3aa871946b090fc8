use std::path::Path;

use anyhow::{Context, Result};
use la_core::buffer::ImageBuffer;

/// Load an image from disk into an `ImageBuffer`.
///
/// Decoding failures stay opaque to the engine: the caller gets a contextual
/// error and decides whether to abort the attempt or the session.
///
/// # Errors
/// Returns an error if the file cannot be opened or decoded.
///
/// # Example
/// ```no_run
/// use la_image::loader::load_image;
/// use std::path::Path;
/// let img = load_image(Path::new("cat.jpeg")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<ImageBuffer> {
    let img = image::open(path).with_context(|| format!("cannot load {}", path.display()))?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    log::debug!("loaded {} ({width}×{height})", path.display());
    let buffer = ImageBuffer::from_raw(width, height, rgb.into_raw())?;
    Ok(buffer)
}
