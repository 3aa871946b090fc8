/// Character-side of the conversion pipeline.
///
/// `BitmapFont` turns characters into fixed-size boolean glyph masks;
/// `CharPalette` owns the mutable character set with cached raw brightness
/// and incrementally renormalized values, and answers closest-match queries.

pub mod glyph;
pub mod palette;

pub use glyph::BitmapFont;
pub use palette::CharPalette;
