/// Side length of a glyph raster, in pixels.
pub const GLYPH_SIZE: usize = 16;

/// Fixed-size boolean pixel mask for one character.
///
/// One `u16` per row, bit `x` of row `y` set when pixel (x, y) is "on".
/// A character's raw brightness is the fraction of on pixels in its mask.
///
/// # Example
/// ```
/// use la_core::traits::GlyphMask;
/// let empty = GlyphMask([0; 16]);
/// assert_eq!(empty.coverage(), 0.0);
/// let full = GlyphMask([u16::MAX; 16]);
/// assert_eq!(full.coverage(), 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphMask(pub [u16; GLYPH_SIZE]);

impl GlyphMask {
    /// Fraction of on pixels, in [0, 1].
    #[must_use]
    pub fn coverage(&self) -> f64 {
        let on: u32 = self.0.iter().map(|row| row.count_ones()).sum();
        f64::from(on) / (GLYPH_SIZE * GLYPH_SIZE) as f64
    }

    /// Whether pixel (x, y) is on.
    #[inline(always)]
    #[must_use]
    pub fn is_on(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < GLYPH_SIZE && y < GLYPH_SIZE, "glyph pixel out of bounds");
        self.0[y] & (1 << x) != 0
    }
}

/// Provides the fixed-size raster mask for a character.
///
/// Implementations must be deterministic and side-effect free: the palette
/// caches raw brightness per character under that assumption.
///
/// Implemented by: `BitmapFont` (production), test stubs.
///
/// # Example
/// ```
/// use la_core::traits::{GlyphMask, GlyphSource};
///
/// struct Blank;
/// impl GlyphSource for Blank {
///     fn mask(&self, _ch: char) -> GlyphMask { GlyphMask([0; 16]) }
/// }
/// assert_eq!(Blank.mask('x').coverage(), 0.0);
/// ```
pub trait GlyphSource {
    /// Raster mask for `ch`.
    fn mask(&self, ch: char) -> GlyphMask;
}
