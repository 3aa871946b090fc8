use std::collections::{BTreeMap, HashMap};

use la_core::error::CoreError;
use la_core::traits::GlyphSource;

use crate::glyph::BitmapFont;

/// One palette entry: cached raw brightness plus its normalized value.
#[derive(Clone, Copy, Debug)]
struct Entry {
    /// Fraction of on pixels in the glyph raster, in [0, 1]. Never changes.
    raw: f64,
    /// `raw` rescaled so the palette minimum maps to 0.0 and the maximum
    /// to 1.0. Recomputed only when an extremal raw value changes.
    normalized: f64,
}

/// Mutable character palette answering "closest character to brightness b".
///
/// Entries live in a `BTreeMap` keyed by character: duplicates collapse, and
/// ascending code-point order is the documented iteration order. When two
/// entries are equidistant from a query, the lowest code point wins — lookup
/// only replaces its candidate on a strictly smaller distance.
///
/// Renormalization is O(palette size) and runs only when a mutation changes
/// the current min or max raw brightness; adding a character strictly inside
/// the brightness range costs a single normalization. Raw brightness is
/// cached per character forever (even across removal), so a re-add never
/// consults the glyph source again.
///
/// If every entry shares one raw brightness (including single-entry
/// palettes), normalized brightness is defined as 0.5 rather than dividing
/// by zero.
///
/// # Example
/// ```
/// use la_match::{BitmapFont, CharPalette};
/// let palette = CharPalette::with_charset(BitmapFont, "0123456789");
/// assert_eq!(palette.len(), 10);
/// // '1' has the sparsest glyph of the ten digits, '8' the densest.
/// assert_eq!(palette.closest(0.0), Ok('1'));
/// assert_eq!(palette.closest(1.0), Ok('8'));
/// ```
pub struct CharPalette<F = BitmapFont> {
    font: F,
    entries: BTreeMap<char, Entry>,
    /// Every raw brightness ever computed, retained across removals.
    raw_cache: HashMap<char, f64>,
    min_raw: f64,
    max_raw: f64,
}

impl<F: GlyphSource> CharPalette<F> {
    /// Empty palette.
    #[must_use]
    pub fn new(font: F) -> Self {
        Self {
            font,
            entries: BTreeMap::new(),
            raw_cache: HashMap::new(),
            min_raw: f64::INFINITY,
            max_raw: f64::NEG_INFINITY,
        }
    }

    /// Palette pre-filled with every character of `charset`.
    ///
    /// Computes all raw values first and normalizes once, instead of paying
    /// a renormalization pass per extremal insertion.
    #[must_use]
    pub fn with_charset(font: F, charset: &str) -> Self {
        let mut palette = Self::new(font);
        for ch in charset.chars() {
            let raw = palette.raw_brightness(ch);
            palette.entries.entry(ch).or_insert(Entry {
                raw,
                normalized: 0.0,
            });
        }
        palette.min_raw = palette.scan_min();
        palette.max_raw = palette.scan_max();
        palette.renormalize();
        palette
    }

    /// Add a character. No-op (no recomputation) if already present.
    ///
    /// Extends the brightness range → full renormalization pass; interior
    /// raw value → only the new entry is normalized.
    pub fn add(&mut self, ch: char) {
        if self.entries.contains_key(&ch) {
            return;
        }
        let raw = self.raw_brightness(ch);
        let mut extremal = false;
        if raw > self.max_raw {
            self.max_raw = raw;
            extremal = true;
        }
        if raw < self.min_raw {
            self.min_raw = raw;
            extremal = true;
        }
        let normalized = self.normalize(raw);
        self.entries.insert(ch, Entry { raw, normalized });
        if extremal {
            self.renormalize();
        }
    }

    /// Remove a character. No-op if absent.
    ///
    /// If the removed raw value was the current min or max, the extremum is
    /// rescanned from the survivors; survivors are renormalized only when it
    /// actually changed. The raw-brightness cache keeps the removed value.
    pub fn remove(&mut self, ch: char) {
        let Some(entry) = self.entries.remove(&ch) else {
            return;
        };
        let mut changed = false;
        // Exact comparisons: both sides are copies of the same computed value.
        if entry.raw >= self.max_raw {
            let new_max = self.scan_max();
            if new_max != self.max_raw {
                self.max_raw = new_max;
                changed = true;
            }
        }
        if entry.raw <= self.min_raw {
            let new_min = self.scan_min();
            if new_min != self.min_raw {
                self.min_raw = new_min;
                changed = true;
            }
        }
        if changed {
            self.renormalize();
        }
    }

    /// Character whose normalized brightness is closest to `brightness`.
    ///
    /// Deterministic for a fixed palette state; ties go to the lowest code
    /// point (ascending iteration, strictly-smaller-distance replacement).
    ///
    /// # Errors
    /// Returns `CoreError::EmptyPalette` when the palette has no entries.
    pub fn closest(&self, brightness: f64) -> Result<char, CoreError> {
        let mut best: Option<(char, f64)> = None;
        for (&ch, entry) in &self.entries {
            let distance = (entry.normalized - brightness).abs();
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((ch, distance));
            }
        }
        best.map(|(ch, _)| ch).ok_or(CoreError::EmptyPalette)
    }

    /// Normalized brightness of `ch`, if present.
    #[must_use]
    pub fn normalized(&self, ch: char) -> Option<f64> {
        self.entries.get(&ch).map(|e| e.normalized)
    }

    /// Whether `ch` is in the palette.
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.entries.contains_key(&ch)
    }

    /// Number of characters in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the palette has no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Characters in ascending code-point order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.keys().copied()
    }

    /// Raw brightness for `ch`: cache hit, or one glyph-source call.
    fn raw_brightness(&mut self, ch: char) -> f64 {
        if let Some(&raw) = self.raw_cache.get(&ch) {
            return raw;
        }
        let raw = self.font.mask(ch).coverage();
        self.raw_cache.insert(ch, raw);
        raw
    }

    fn normalize(&self, raw: f64) -> f64 {
        let span = self.max_raw - self.min_raw;
        if span > f64::EPSILON {
            (raw - self.min_raw) / span
        } else {
            // Degenerate palette: all raws identical. Defined as mid-scale.
            0.5
        }
    }

    fn renormalize(&mut self) {
        log::trace!("renormalizing {} palette entries", self.entries.len());
        let (min, max) = (self.min_raw, self.max_raw);
        let span = max - min;
        for entry in self.entries.values_mut() {
            entry.normalized = if span > f64::EPSILON {
                (entry.raw - min) / span
            } else {
                0.5
            };
        }
    }

    fn scan_min(&self) -> f64 {
        self.entries
            .values()
            .map(|e| e.raw)
            .fold(f64::INFINITY, f64::min)
    }

    fn scan_max(&self) -> f64 {
        self.entries
            .values()
            .map(|e| e.raw)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use la_core::traits::{GLYPH_SIZE, GlyphMask};

    use super::*;

    /// Mask with exactly `count` on pixels, filled row by row.
    fn mask_with(count: usize) -> GlyphMask {
        let mut rows = [0u16; GLYPH_SIZE];
        for i in 0..count.min(256) {
            rows[i / 16] |= 1 << (i % 16);
        }
        GlyphMask(rows)
    }

    /// Raw brightnesses: a 0.25, b 0.75, c 0.5, d 0.125, e 0.875,
    /// x and y both 0.5, everything else 0.
    struct StubFont;

    impl GlyphSource for StubFont {
        fn mask(&self, ch: char) -> GlyphMask {
            let count = match ch {
                'a' => 64,
                'b' => 192,
                'c' | 'x' | 'y' => 128,
                'd' => 32,
                'e' => 224,
                _ => 0,
            };
            mask_with(count)
        }
    }

    /// Counts glyph-source calls through a shared cell.
    struct CountingFont(Rc<Cell<u32>>);

    impl GlyphSource for CountingFont {
        fn mask(&self, _ch: char) -> GlyphMask {
            self.0.set(self.0.get() + 1);
            mask_with(40)
        }
    }

    #[test]
    fn min_normalizes_to_zero_and_max_to_one() {
        let palette = CharPalette::with_charset(StubFont, "abc");
        assert_eq!(palette.normalized('a'), Some(0.0));
        assert_eq!(palette.normalized('b'), Some(1.0));
        assert_eq!(palette.normalized('c'), Some(0.5));
    }

    #[test]
    fn interior_add_leaves_other_entries_untouched() {
        let mut palette = CharPalette::with_charset(StubFont, "ab");
        assert_eq!(palette.normalized('a'), Some(0.0));
        assert_eq!(palette.normalized('b'), Some(1.0));

        // 0.5 is strictly between min 0.25 and max 0.75.
        palette.add('c');
        assert_eq!(palette.normalized('a'), Some(0.0));
        assert_eq!(palette.normalized('b'), Some(1.0));
        assert_eq!(palette.normalized('c'), Some(0.5));
    }

    #[test]
    fn extremal_add_renormalizes_everything() {
        let mut palette = CharPalette::with_charset(StubFont, "ab");
        palette.add('e'); // raw 0.875 > current max 0.75
        assert_eq!(palette.normalized('a'), Some(0.0));
        assert_eq!(palette.normalized('e'), Some(1.0));
        let b = palette.normalized('b').unwrap();
        assert!((b - 0.8).abs() < 1e-12); // (0.75 - 0.25) / 0.625
    }

    #[test]
    fn removing_the_max_rescans_and_renormalizes_survivors() {
        let mut palette = CharPalette::with_charset(StubFont, "abe");
        assert_eq!(palette.normalized('e'), Some(1.0));
        palette.remove('e');
        assert_eq!(palette.normalized('a'), Some(0.0));
        assert_eq!(palette.normalized('b'), Some(1.0));
    }

    #[test]
    fn removing_an_interior_entry_changes_nothing_else() {
        let mut palette = CharPalette::with_charset(StubFont, "abc");
        palette.remove('c');
        assert_eq!(palette.normalized('a'), Some(0.0));
        assert_eq!(palette.normalized('b'), Some(1.0));
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn duplicate_add_and_absent_remove_are_no_ops() {
        let mut palette = CharPalette::with_charset(StubFont, "ab");
        palette.add('a');
        assert_eq!(palette.len(), 2);
        palette.remove('z');
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn closest_matches_the_nearest_normalized_value() {
        let palette = CharPalette::with_charset(StubFont, "ab");
        // a → 0.0, b → 1.0: distance 0.1 vs 0.9.
        assert_eq!(palette.closest(0.1), Ok('a'));
        assert_eq!(palette.closest(0.9), Ok('b'));
    }

    #[test]
    fn closest_is_deterministic_and_ties_go_to_lowest_code_point() {
        let palette = CharPalette::with_charset(StubFont, "ab");
        // 0.5 is equidistant from both; 'a' < 'b'.
        let first = palette.closest(0.5).unwrap();
        assert_eq!(first, 'a');
        for _ in 0..10 {
            assert_eq!(palette.closest(0.5), Ok(first));
        }
    }

    #[test]
    fn empty_palette_lookup_is_an_error() {
        let palette = CharPalette::new(StubFont);
        assert_eq!(palette.closest(0.5), Err(CoreError::EmptyPalette));
    }

    #[test]
    fn degenerate_palette_normalizes_to_mid_scale() {
        let palette = CharPalette::with_charset(StubFont, "x");
        assert_eq!(palette.normalized('x'), Some(0.5));
        assert_eq!(palette.closest(0.99), Ok('x'));

        // Two entries sharing one raw value are just as degenerate.
        let palette = CharPalette::with_charset(StubFont, "xy");
        assert_eq!(palette.normalized('x'), Some(0.5));
        assert_eq!(palette.normalized('y'), Some(0.5));
    }

    #[test]
    fn invariant_holds_after_arbitrary_mutation_sequence() {
        let mut palette = CharPalette::new(StubFont);
        for ch in "cbade".chars() {
            palette.add(ch);
        }
        palette.remove('d');
        palette.add('d');
        palette.remove('e');
        palette.remove('a');
        // Survivors: b (0.75) max, d (0.125) min, c (0.5).
        assert_eq!(palette.normalized('d'), Some(0.0));
        assert_eq!(palette.normalized('b'), Some(1.0));
        let c = palette.normalized('c').unwrap();
        assert!((c - 0.6).abs() < 1e-12); // (0.5 - 0.125) / 0.625
    }

    #[test]
    fn raw_brightness_is_cached_across_removal() {
        let calls = Rc::new(Cell::new(0));
        let mut palette = CharPalette::new(CountingFont(Rc::clone(&calls)));
        palette.add('q');
        assert_eq!(calls.get(), 1);
        palette.remove('q');
        palette.add('q');
        assert_eq!(calls.get(), 1, "re-add must not consult the glyph source");
    }

    #[test]
    fn chars_iterates_in_ascending_code_point_order() {
        let mut palette = CharPalette::new(StubFont);
        for ch in "dcba".chars() {
            palette.add(ch);
        }
        let chars: String = palette.chars().collect();
        assert_eq!(chars, "abcd");
    }
}
