use la_core::buffer::ImageBuffer;
use la_core::error::CoreError;

/// Split a padded image into resolution² equal sub-buffers, row-major.
///
/// Sub-buffer `row * resolution + col` holds pixels
/// `(col * W/R + x, row * H/R + y)` of the input. Callers only partition
/// already-padded images at a power-of-two resolution, so the divisibility
/// requirement always holds in practice; it is still checked defensively.
///
/// # Errors
/// Returns `CoreError::Partition` if `resolution` is zero or does not evenly
/// divide both dimensions.
///
/// # Example
/// ```
/// use la_core::buffer::ImageBuffer;
/// use la_image::partition::partition;
/// let img = ImageBuffer::filled(4, 4, (0, 0, 0));
/// let subs = partition(&img, 2).unwrap();
/// assert_eq!(subs.len(), 4);
/// assert_eq!((subs[0].width(), subs[0].height()), (2, 2));
/// ```
pub fn partition(image: &ImageBuffer, resolution: u32) -> Result<Vec<ImageBuffer>, CoreError> {
    let (w, h) = (image.width(), image.height());
    if resolution == 0 || !w.is_multiple_of(resolution) || !h.is_multiple_of(resolution) {
        return Err(CoreError::Partition {
            resolution,
            width: w,
            height: h,
        });
    }
    let sub_w = w / resolution;
    let sub_h = h / resolution;

    let mut subs = Vec::with_capacity(resolution as usize * resolution as usize);
    for row in 0..resolution {
        for col in 0..resolution {
            subs.push(ImageBuffer::from_fn(sub_w, sub_h, |x, y| {
                image.pixel(col * sub_w + x, row * sub_h + y)
            }));
        }
    }
    Ok(subs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords_image(w: u32, h: u32) -> ImageBuffer {
        ImageBuffer::from_fn(w, h, |x, y| (x as u8, y as u8, 0))
    }

    #[test]
    fn produces_resolution_squared_sub_buffers() {
        let img = coords_image(8, 8);
        for r in [1, 2, 4, 8] {
            let subs = partition(&img, r).unwrap();
            assert_eq!(subs.len(), (r * r) as usize);
            assert_eq!(subs[0].width(), 8 / r);
            assert_eq!(subs[0].height(), 8 / r);
        }
    }

    #[test]
    fn sub_buffers_are_row_major_grid_order() {
        let img = coords_image(4, 4);
        let subs = partition(&img, 2).unwrap();
        // Sub (row 1, col 0), local pixel (1, 0) = image pixel (1, 2).
        assert_eq!(subs[2].pixel(1, 0), (1, 2, 0));
        // Sub (row 0, col 1), local pixel (0, 1) = image pixel (2, 1).
        assert_eq!(subs[1].pixel(0, 1), (2, 1, 0));
    }

    #[test]
    fn reassembling_sub_buffers_reconstructs_the_image() {
        let img = coords_image(8, 4);
        let r = 4;
        let subs = partition(&img, r).unwrap();
        let (sub_w, sub_h) = (img.width() / r, img.height() / r);
        let rebuilt = ImageBuffer::from_fn(img.width(), img.height(), |x, y| {
            let sub = &subs[((y / sub_h) * r + x / sub_w) as usize];
            sub.pixel(x % sub_w, y % sub_h)
        });
        assert_eq!(rebuilt, img);
    }

    #[test]
    fn non_dividing_resolution_is_rejected() {
        let img = coords_image(8, 8);
        assert_eq!(
            partition(&img, 3),
            Err(CoreError::Partition {
                resolution: 3,
                width: 8,
                height: 8
            })
        );
        assert!(partition(&img, 0).is_err());
    }

    #[test]
    fn resolution_equal_to_width_yields_single_pixel_columns() {
        let img = coords_image(4, 4);
        let subs = partition(&img, 4).unwrap();
        assert_eq!(subs.len(), 16);
        assert_eq!((subs[0].width(), subs[0].height()), (1, 1));
        assert_eq!(subs[5].pixel(0, 0), (1, 1, 0));
    }
}
