use la_core::buffer::{ImageBuffer, WHITE};
use la_core::error::CoreError;

/// Smallest power-of-two canvas that fits the given dimensions.
///
/// Cheap enough to call per command: the session uses it to recompute
/// resolution bounds on every image reload without building the canvas.
///
/// # Example
/// ```
/// use la_image::pad::padded_dims;
/// assert_eq!(padded_dims(100, 64), (128, 64));
/// ```
#[must_use]
pub fn padded_dims(width: u32, height: u32) -> (u32, u32) {
    (width.next_power_of_two(), height.next_power_of_two())
}

/// Pad an image to power-of-two dimensions on a centered white canvas.
///
/// Output width and height are each the smallest power of two ≥ the input
/// dimension. An already-power-of-two input comes back as an identical copy
/// (a no-op, not an error), which makes padding idempotent. When the total
/// padding along an axis is odd, the leading (left/top) side gets the floor
/// and the trailing side the remainder.
///
/// # Errors
/// Returns `CoreError::InvalidImage` if either dimension is zero.
///
/// # Example
/// ```
/// use la_core::buffer::ImageBuffer;
/// use la_image::pad::pad;
/// let img = ImageBuffer::filled(3, 5, (0, 0, 0));
/// let padded = pad(&img).unwrap();
/// assert_eq!((padded.width(), padded.height()), (4, 8));
/// ```
pub fn pad(image: &ImageBuffer) -> Result<ImageBuffer, CoreError> {
    let (w, h) = (image.width(), image.height());
    if w == 0 || h == 0 {
        return Err(CoreError::InvalidImage {
            width: w,
            height: h,
        });
    }
    let (pw, ph) = padded_dims(w, h);
    let left = (pw - w) / 2;
    let top = (ph - h) / 2;

    Ok(ImageBuffer::from_fn(pw, ph, |x, y| {
        if x >= left && x < left + w && y >= top && y < top + h {
            image.pixel(x - left, y - top)
        } else {
            WHITE
        }
    }))
}
