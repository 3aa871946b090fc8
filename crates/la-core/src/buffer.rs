use crate::error::CoreError;

/// White fill used for padding borders.
pub const WHITE: (u8, u8, u8) = (255, 255, 255);

/// Immutable 2D grid of RGB pixel samples.
///
/// Stores pixels as flat RGB row-major bytes, 3 bytes per pixel. Constructed
/// once by whichever stage produces it, never mutated afterwards — there are
/// no public mutators.
///
/// # Example
/// ```
/// use la_core::buffer::ImageBuffer;
/// let img = ImageBuffer::from_fn(4, 2, |_, _| (255, 255, 255));
/// assert_eq!(img.width(), 4);
/// assert_eq!(img.pixel(3, 1), (255, 255, 255));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    /// Pixels RGB, row-major, 3 bytes per pixel.
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl ImageBuffer {
    /// Build a buffer by evaluating `f(x, y)` for every pixel, row-major.
    ///
    /// # Example
    /// ```
    /// use la_core::buffer::ImageBuffer;
    /// let img = ImageBuffer::from_fn(2, 2, |x, y| ((x * 255) as u8, (y * 255) as u8, 0));
    /// assert_eq!(img.pixel(1, 0), (255, 0, 0));
    /// ```
    #[must_use]
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> (u8, u8, u8)) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 3);
        for y in 0..height {
            for x in 0..width {
                let (r, g, b) = f(x, y);
                data.push(r);
                data.push(g);
                data.push(b);
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Build a buffer from raw RGB bytes (row-major, 3 bytes per pixel).
    ///
    /// # Errors
    /// Returns `CoreError::InvalidImage` if either dimension is zero or the
    /// byte length does not match `width * height * 3`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CoreError> {
        if width == 0 || height == 0 || data.len() != width as usize * height as usize * 3 {
            return Err(CoreError::InvalidImage { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Buffer filled with a single color.
    #[must_use]
    pub fn filled(width: u32, height: u32, rgb: (u8, u8, u8)) -> Self {
        Self::from_fn(width, height, |_, _| rgb)
    }

    /// Width in pixels.
    #[inline(always)]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline(always)]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (x, y) → (r, g, b).
    ///
    /// # Example
    /// ```
    /// use la_core::buffer::ImageBuffer;
    /// let img = ImageBuffer::filled(3, 3, (10, 20, 30));
    /// assert_eq!(img.pixel(2, 2), (10, 20, 30));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        (self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }
}

impl std::fmt::Debug for ImageBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
