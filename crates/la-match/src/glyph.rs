use la_core::traits::{GLYPH_SIZE, GlyphMask, GlyphSource};

/// Built-in glyph source backed by a hardcoded coverage table.
///
/// Maps each character to a 16×16 boolean mask whose on-pixel count matches
/// the character's ink coverage in a typical monospace face. Only the count
/// matters for brightness matching, so the mask is synthesized by a
/// deterministic scatter fill rather than stored bitmap rows. Characters
/// outside the table get a class-based estimate.
///
/// # Example
/// ```
/// use la_core::traits::GlyphSource;
/// use la_match::glyph::BitmapFont;
/// let font = BitmapFont;
/// assert_eq!(font.mask(' ').coverage(), 0.0);
/// assert!(font.mask('@').coverage() > font.mask('.').coverage());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BitmapFont;

impl GlyphSource for BitmapFont {
    fn mask(&self, ch: char) -> GlyphMask {
        scatter_mask(coverage_of(ch))
    }
}

/// On-pixel count (out of 256) for a character's 16×16 raster.
#[allow(clippy::too_many_lines, clippy::match_same_arms)]
fn coverage_of(ch: char) -> u32 {
    match ch {
        ' ' => 0,
        '!' => 22,
        '"' => 14,
        '#' => 80,
        '$' => 82,
        '%' => 74,
        '&' => 78,
        '\'' => 7,
        '(' => 26,
        ')' => 26,
        '*' => 30,
        '+' => 28,
        ',' => 11,
        '-' => 10,
        '.' => 6,
        '/' => 25,
        '0' => 66,
        '1' => 40,
        '2' => 58,
        '3' => 60,
        '4' => 64,
        '5' => 62,
        '6' => 68,
        '7' => 44,
        '8' => 76,
        '9' => 70,
        ':' => 12,
        ';' => 17,
        '<' => 24,
        '=' => 20,
        '>' => 24,
        '?' => 32,
        '@' => 98,
        'A' => 72,
        'B' => 84,
        'C' => 50,
        'D' => 80,
        'E' => 70,
        'F' => 56,
        'G' => 66,
        'H' => 74,
        'I' => 36,
        'J' => 42,
        'K' => 69,
        'L' => 43,
        'M' => 92,
        'N' => 86,
        'O' => 71,
        'P' => 65,
        'Q' => 81,
        'R' => 79,
        'S' => 61,
        'T' => 46,
        'U' => 63,
        'V' => 54,
        'W' => 90,
        'X' => 59,
        'Y' => 47,
        'Z' => 62,
        '[' => 34,
        '\\' => 25,
        ']' => 34,
        '^' => 13,
        '_' => 15,
        '`' => 5,
        'a' => 55,
        'b' => 61,
        'c' => 38,
        'd' => 61,
        'e' => 52,
        'f' => 39,
        'g' => 67,
        'h' => 57,
        'i' => 27,
        'j' => 33,
        'k' => 56,
        'l' => 27,
        'm' => 73,
        'n' => 51,
        'o' => 49,
        'p' => 63,
        'q' => 63,
        'r' => 31,
        's' => 45,
        't' => 37,
        'u' => 48,
        'v' => 41,
        'w' => 65,
        'x' => 46,
        'y' => 50,
        'z' => 47,
        '{' => 33,
        '|' => 26,
        '}' => 33,
        '~' => 14,
        // Unicode blocks — pseudo-pixels.
        '░' => 64,
        '▒' => 128,
        '▓' => 192,
        '█' => 256,
        // Class-based estimate for anything else.
        c if c.is_numeric() => 60,
        c if c.is_alphabetic() => 56,
        _ => 24,
    }
}

/// Synthesize a mask with exactly `count` on pixels.
///
/// Walks the 256-cell raster with stride 73; the stride is odd, so it visits
/// every cell once before repeating, spreading the fill across the glyph.
fn scatter_mask(count: u32) -> GlyphMask {
    let mut rows = [0u16; GLYPH_SIZE];
    for i in 0..count.min(256) {
        let p = (i * 73) % 256;
        rows[(p / 16) as usize] |= 1 << (p % 16);
    }
    GlyphMask(rows)
}
