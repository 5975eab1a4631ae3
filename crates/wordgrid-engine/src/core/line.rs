use std::fmt;

use arrayvec::ArrayVec;

use crate::core::{
    grid::MAX_GRID_SIZE,
    letter::{Cell, HOLE_CHAR, Letter, cell_char},
};

/// Pattern string for a run of cells: letters as-is, holes as [`HOLE_CHAR`].
#[must_use]
pub fn slice_pattern(cells: &[Cell]) -> String {
    cells.iter().copied().map(cell_char).collect()
}

/// An ephemeral ordered copy of one full grid row or column.
///
/// Lines are recomputed from the [`Grid`](crate::Grid) on demand and mutated
/// freely during hypothetical move evaluation; they never write back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    cells: ArrayVec<Cell, MAX_GRID_SIZE>,
}

impl Line {
    /// Collects cells into a line.
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_GRID_SIZE`] cells are supplied.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    /// Parses a pattern string (letters and [`HOLE_CHAR`]), mainly for tests.
    ///
    /// # Panics
    ///
    /// Panics on any character that is neither a lowercase letter nor a hole.
    #[must_use]
    pub fn from_pattern(pattern: &str) -> Self {
        Self::from_cells(pattern.chars().map(|ch| {
            if ch == HOLE_CHAR {
                None
            } else {
                Some(Letter::from_char(ch).expect("pattern char must be a-z or the hole marker"))
            }
        }))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    /// Overwrites one cell; used to hypothesize a placement on a line copy.
    pub fn set(&mut self, idx: usize, cell: Cell) {
        self.cells[idx] = cell;
    }

    #[must_use]
    pub fn has_hole(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    /// Literal content key: letters plus hole markers.
    ///
    /// Filling any cell changes this key, which is what makes it safe to memoize
    /// line scores by pattern without invalidation.
    #[must_use]
    pub fn pattern(&self) -> String {
        slice_pattern(&self.cells)
    }

    /// Every contiguous sub-slice with length in `[min_len, len]`, ordered by
    /// increasing start index then increasing end index.
    ///
    /// For a line of length `n` this yields `(n-m+1)(n-m+2)/2` slices.
    pub fn slices(&self, min_len: usize) -> impl Iterator<Item = &[Cell]> {
        let n = self.cells.len();
        (0..=n.saturating_sub(min_len))
            .flat_map(move |start| (start + min_len..=n).map(move |end| &self.cells[start..end]))
    }

    /// The line's content with leading/trailing holes stripped, as a word.
    ///
    /// Returns `None` if the trimmed content is empty or still contains a hole
    /// (an interior hole means the line cannot already be a complete word).
    #[must_use]
    pub fn inner_word(&self) -> Option<String> {
        let start = self.cells.iter().position(Option::is_some)?;
        let end = self.cells.iter().rposition(Option::is_some)?;
        let inner = &self.cells[start..=end];
        inner
            .iter()
            .map(|cell| cell.map(Letter::as_char))
            .collect()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern())
    }
}
