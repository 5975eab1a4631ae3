use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    OccupiedCellError, OutOfBoundsError, SetLetterError,
    core::{
        letter::{Cell, HOLE_CHAR, Letter},
        line::Line,
    },
};

/// Smallest playable grid (anything below cannot hold a word).
pub const MIN_GRID_SIZE: usize = 3;
/// Largest supported grid; keeps lines within their fixed-capacity storage.
pub const MAX_GRID_SIZE: usize = 16;

/// A (row, column) grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed-size square board of letter cells.
///
/// Dimensions are fixed at construction. A cell transitions from empty to a
/// letter exactly once via [`set_letter`](Self::set_letter); speculative
/// what-if writes go through the scoped [`with_trial`](Self::with_trial),
/// which guarantees reversion.
///
/// Cells are stored row-major. The `2 * size` lines are indexed rows first
/// (`0..size`, top to bottom) then columns (`size..2 * size`, left to right),
/// so cell `(r, c)` sits at offset `c` of row-line `r` and offset `r` of
/// column-line `size + c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an empty grid.
    ///
    /// # Panics
    ///
    /// Panics if `size` is outside `[MIN_GRID_SIZE, MAX_GRID_SIZE]`.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(
            (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size),
            "grid size {size} outside [{MIN_GRID_SIZE}, {MAX_GRID_SIZE}]"
        );
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        2 * self.size
    }

    /// Reads a cell.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn letter(&self, pos: CellPos) -> Cell {
        assert!(
            pos.row < self.size && pos.col < self.size,
            "cell {pos} outside {0}x{0} grid",
            self.size
        );
        self.cells[self.index(pos)]
    }

    /// Writes a letter into an empty cell.
    pub fn set_letter(&mut self, pos: CellPos, letter: Letter) -> Result<(), SetLetterError> {
        if pos.row >= self.size || pos.col >= self.size {
            return Err(SetLetterError::OutOfBounds(OutOfBoundsError {
                row: pos.row,
                col: pos.col,
                size: self.size,
            }));
        }
        let idx = self.index(pos);
        if let Some(existing) = self.cells[idx] {
            return Err(SetLetterError::Occupied(OccupiedCellError {
                row: pos.row,
                col: pos.col,
                letter: existing,
            }));
        }
        self.cells[idx] = Some(letter);
        Ok(())
    }

    /// Places `letter` into an empty cell, evaluates `f` on the resulting
    /// grid, and reverts the cell before returning.
    ///
    /// This is the only sanctioned way to perform a speculative trial write;
    /// the cell is restored on every return path.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds or the cell is occupied.
    pub fn with_trial<T>(&mut self, pos: CellPos, letter: Letter, f: impl FnOnce(&Self) -> T) -> T {
        let idx = self.index(pos);
        assert!(
            self.cells[idx].is_none(),
            "trial placement on occupied cell {pos}"
        );
        self.cells[idx] = Some(letter);
        let value = f(self);
        self.cells[idx] = None;
        value
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Empty cells in scan order (row-major).
    pub fn empty_cells(&self) -> impl Iterator<Item = CellPos> {
        self.cells.iter().enumerate().filter_map(|(idx, cell)| {
            cell.is_none()
                .then(|| CellPos::new(idx / self.size, idx % self.size))
        })
    }

    /// The `i`-th of `2 * size` lines: rows first, then columns.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 2 * size`.
    #[must_use]
    pub fn line(&self, i: usize) -> Line {
        assert!(i < self.line_count(), "line index {i} out of range");
        if i < self.size {
            self.row_line(i)
        } else {
            self.col_line(i - self.size)
        }
    }

    #[must_use]
    pub fn row_line(&self, row: usize) -> Line {
        let start = row * self.size;
        Line::from_cells(self.cells[start..start + self.size].iter().copied())
    }

    #[must_use]
    pub fn col_line(&self, col: usize) -> Line {
        Line::from_cells((0..self.size).map(|row| self.cells[row * self.size + col]))
    }

    /// All lines in index order.
    pub fn lines(&self) -> impl Iterator<Item = Line> {
        (0..self.line_count()).map(|i| self.line(i))
    }

    fn index(&self, pos: CellPos) -> usize {
        pos.row * self.size + pos.col
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
            }
            f.write_str(&self.row_line(row).pattern())?;
        }
        Ok(())
    }
}

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq((0..self.size).map(|row| self.row_line(row).pattern()))
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = Vec::<String>::deserialize(deserializer)?;
        let size = rows.len();
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(serde::de::Error::custom(format!(
                "grid size {size} outside [{MIN_GRID_SIZE}, {MAX_GRID_SIZE}]"
            )));
        }
        let mut cells = Vec::with_capacity(size * size);
        for row in &rows {
            if row.chars().count() != size {
                return Err(serde::de::Error::custom(format!(
                    "row {row:?} is not {size} cells wide"
                )));
            }
            for ch in row.chars() {
                if ch == HOLE_CHAR {
                    cells.push(None);
                } else {
                    let letter = Letter::from_char(ch).ok_or_else(|| {
                        serde::de::Error::custom(format!("invalid cell char: {ch:?}"))
                    })?;
                    cells.push(Some(letter));
                }
            }
        }
        Ok(Self { size, cells })
    }
}
