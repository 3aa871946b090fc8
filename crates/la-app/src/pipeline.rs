use la_core::buffer::ImageBuffer;
use la_core::error::CoreError;
use la_core::grid::CharGrid;
use la_core::traits::GlyphSource;
use la_image::{brightness, pad, partition};
use la_match::CharPalette;

/// Run the full conversion: pad, partition, score, match.
///
/// Pure orchestration with no state between calls. The output grid is
/// resolution×resolution, row-major, in the same order the partitioner
/// emits sub-buffers.
///
/// # Errors
/// - `CoreError::EmptyPalette` when the palette has no characters (checked
///   before any pixel work).
/// - `CoreError::InvalidImage` for a zero-dimension image.
/// - `CoreError::Partition` when the resolution does not divide the padded
///   dimensions.
pub fn convert<F: GlyphSource>(
    image: &ImageBuffer,
    resolution: u32,
    palette: &CharPalette<F>,
) -> Result<CharGrid, CoreError> {
    if palette.is_empty() {
        return Err(CoreError::EmptyPalette);
    }
    let padded = pad(image)?;
    let subs = partition(&padded, resolution)?;

    let mut cells = Vec::with_capacity(subs.len());
    for sub in &subs {
        cells.push(palette.closest(brightness(sub))?);
    }
    log::debug!(
        "converted {}×{} image at resolution {resolution}",
        image.width(),
        image.height()
    );
    Ok(CharGrid::from_cells(resolution, cells))
}
