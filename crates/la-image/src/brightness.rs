use la_core::buffer::ImageBuffer;

/// BT.709 luma weights.
const RED_WEIGHT: f64 = 0.2126;
const GREEN_WEIGHT: f64 = 0.7152;
const BLUE_WEIGHT: f64 = 0.0722;

/// Average perceptual brightness of a buffer, in [0, 1].
///
/// Per-pixel luma `0.2126·R + 0.7152·G + 0.0722·B`, summed and divided by
/// `pixel count × 255`. Pure function of the pixel data: 0.0 for all-black,
/// 1.0 for all-white.
///
/// # Example
/// ```
/// use la_core::buffer::ImageBuffer;
/// use la_image::brightness::brightness;
/// let white = ImageBuffer::filled(4, 4, (255, 255, 255));
/// assert!((brightness(&white) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn brightness(image: &ImageBuffer) -> f64 {
    let (w, h) = (image.width(), image.height());
    if w == 0 || h == 0 {
        return 0.0;
    }
    let mut sum = 0.0;
    for y in 0..h {
        for x in 0..w {
            let (r, g, b) = image.pixel(x, y);
            sum += RED_WEIGHT * f64::from(r) + GREEN_WEIGHT * f64::from(g) + BLUE_WEIGHT * f64::from(b);
        }
    }
    sum / (f64::from(w) * f64::from(h) * 255.0)
}
