/// Result of one conversion run: a resolution×resolution character grid.
///
/// Flat row-major storage, immutable once produced. Cell (row, col) holds
/// the character matched for the sub-buffer at the same grid position.
///
/// # Example
/// ```
/// use la_core::grid::CharGrid;
/// let grid = CharGrid::from_cells(2, vec!['a', 'b', 'c', 'd']);
/// assert_eq!(grid.get(1, 0), 'c');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharGrid {
    cells: Vec<char>,
    resolution: u32,
}

impl CharGrid {
    /// Assemble a grid from row-major cells.
    ///
    /// # Panics
    /// Panics in debug builds if `cells.len() != resolution²`.
    #[must_use]
    pub fn from_cells(resolution: u32, cells: Vec<char>) -> Self {
        debug_assert_eq!(
            cells.len(),
            resolution as usize * resolution as usize,
            "cell count must be resolution²"
        );
        Self { cells, resolution }
    }

    /// Number of character columns (= rows).
    #[must_use]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Character at (row, col), 0-indexed, row 0 = top.
    #[inline(always)]
    #[must_use]
    pub fn get(&self, row: u32, col: u32) -> char {
        self.cells[row as usize * self.resolution as usize + col as usize]
    }

    /// Iterate rows top to bottom, each as a slice of characters.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.resolution.max(1) as usize)
    }
}
