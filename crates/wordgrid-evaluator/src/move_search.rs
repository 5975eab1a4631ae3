//! Candidate-move enumeration and selection.
//!
//! Both searches walk every empty cell, score the cell's crossing horizontal
//! and vertical lines before and after a trial letter, and pick the candidate
//! whose [`linearize`]d improvement is highest.
//!
//! - [`MoveSearch::best_letter_move`] trials all 26 letters per cell and
//!   answers "which letter do I want next, and where would it go".
//! - [`MoveSearch::best_placement`] trials one fixed letter per cell and
//!   answers "where does this letter go".
//!
//! A board with no scoring potential anywhere still yields a usable move: the
//! fallback is the first empty cell in scan order, with [`FALLBACK_LETTER`]
//! when the letter is also free to choose.

use std::sync::Arc;

use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use wordgrid_engine::{CellPos, Dictionary, Grid, Letter};

use crate::line_scorer::{DEFAULT_JITTER, LineScorer, ScoreVector, linearize};

/// Letter returned when a letter-selection search finds nothing worth asking
/// for. 'q' is a fine letter to hand to opponents.
pub const FALLBACK_LETTER: Letter = match Letter::from_char('q') {
    Some(letter) => letter,
    None => unreachable!(),
};

pub(crate) fn first_empty_cell(grid: &Grid) -> CellPos {
    grid.empty_cells()
        .next()
        .expect("move search requires at least one empty cell")
}

/// One candidate move with the crossing-line scores backing it.
#[derive(Debug, Clone)]
struct PotentialMove {
    letter: Letter,
    pos: CellPos,
    original_horizontal: ScoreVector,
    original_vertical: ScoreVector,
    new_horizontal: ScoreVector,
    new_vertical: ScoreVector,
}

/// Scored search over a grid's empty cells.
pub struct MoveSearch {
    scorer: LineScorer,
    jitter: f64,
    rng: Pcg32,
}

impl MoveSearch {
    /// Creates a search with a random tie-breaking stream.
    #[must_use]
    pub fn new(dictionary: Arc<Dictionary>, min_word_len: usize) -> Self {
        Self::with_seed(dictionary, min_word_len, rand::rng().random())
    }

    /// Like [`Self::new`], but with a fixed seed for reproducible decisions.
    #[must_use]
    pub fn with_seed(dictionary: Arc<Dictionary>, min_word_len: usize, seed: [u8; 16]) -> Self {
        Self {
            scorer: LineScorer::new(dictionary, min_word_len),
            jitter: DEFAULT_JITTER,
            rng: Pcg32::from_seed(seed),
        }
    }

    /// Overrides the tie-breaking jitter. Zero makes the search fully
    /// deterministic for a given seed and board.
    #[must_use]
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }

    /// Best letter to request next, with the cell it would land in.
    ///
    /// Candidates whose trial letter leaves both crossing lines without any
    /// match are discarded; if that discards everything, the fallback move is
    /// returned.
    ///
    /// # Panics
    ///
    /// Panics if the grid has no empty cell.
    pub fn best_letter_move(&mut self, grid: &Grid) -> (Letter, CellPos) {
        let moves = self.collect_moves(grid, None);
        match self.select_best(moves) {
            Some(best) => (best.letter, best.pos),
            None => (FALLBACK_LETTER, first_empty_cell(grid)),
        }
    }

    /// Best cell to receive `letter`.
    ///
    /// Unlike letter selection, zero-potential candidates stay in: the letter
    /// must land somewhere this turn, so the jittered ranking decides between
    /// equally hopeless cells.
    ///
    /// # Panics
    ///
    /// Panics if the grid has no empty cell.
    pub fn best_placement(&mut self, grid: &Grid, letter: Letter) -> CellPos {
        let moves = self.collect_moves(grid, Some(letter));
        match self.select_best(moves) {
            Some(best) => best.pos,
            None => first_empty_cell(grid),
        }
    }

    fn collect_moves(&mut self, grid: &Grid, fixed: Option<Letter>) -> Vec<PotentialMove> {
        let mut moves = Vec::new();
        for pos in grid.empty_cells() {
            let row_line = grid.row_line(pos.row);
            let col_line = grid.col_line(pos.col);
            debug_assert!(row_line.has_hole() && col_line.has_hole());

            let original_horizontal = self.scorer.score_line(&row_line);
            let original_vertical = self.scorer.score_line(&col_line);

            let letters: Vec<Letter> = match fixed {
                Some(letter) => vec![letter],
                None => Letter::alphabet().collect(),
            };
            for letter in letters {
                let mut row_trial = row_line.clone();
                row_trial.set(pos.col, Some(letter));
                let mut col_trial = col_line.clone();
                col_trial.set(pos.row, Some(letter));

                let new_horizontal = self.scorer.score_line(&row_trial);
                let new_vertical = self.scorer.score_line(&col_trial);

                // Letter selection has the whole alphabet to spend; nothing
                // forces it to consider letters that kill both lines.
                if fixed.is_none() && new_horizontal.is_zero() && new_vertical.is_zero() {
                    continue;
                }

                moves.push(PotentialMove {
                    letter,
                    pos,
                    original_horizontal: original_horizontal.clone(),
                    original_vertical: original_vertical.clone(),
                    new_horizontal,
                    new_vertical,
                });
            }
        }
        moves
    }

    fn select_best(&mut self, moves: Vec<PotentialMove>) -> Option<PotentialMove> {
        moves
            .into_iter()
            .map(|candidate| {
                let score = linearize(
                    (
                        &candidate.original_horizontal,
                        &candidate.original_vertical,
                    ),
                    (&candidate.new_horizontal, &candidate.new_vertical),
                    self.jitter,
                    &mut self.rng,
                );
                (candidate, score)
            })
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(candidate, _)| candidate)
    }
}

#[cfg(test)]
mod tests {
    use wordgrid_engine::SetLetterError;

    use super::*;

    fn grid_from_rows(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows.len());
        for (row, content) in rows.iter().enumerate() {
            for (col, ch) in content.chars().enumerate() {
                if let Some(letter) = Letter::from_char(ch) {
                    grid.set_letter(CellPos::new(row, col), letter).unwrap();
                }
            }
        }
        grid
    }

    fn search(words: &[&str]) -> MoveSearch {
        let dictionary = Arc::new(Dictionary::new(words.iter().copied()));
        MoveSearch::with_seed(dictionary, 3, [1; 16]).with_jitter(0.0)
    }

    #[test]
    fn test_letter_search_completes_a_word() {
        let mut search = search(&["cat", "cot", "dot"]);
        // Only (0, 2) is empty; 't' is the one letter that keeps any
        // dictionary word reachable there.
        let grid = grid_from_rows(&["ca.", "xzx", "zxz"]);
        let (letter, pos) = search.best_letter_move(&grid);
        assert_eq!(letter.as_char(), 't');
        assert_eq!(pos, CellPos::new(0, 2));
    }

    #[test]
    fn test_placement_prefers_the_cell_completing_a_word() {
        let mut search = search(&["cat", "cot", "dot"]);
        // Empty cells (0, 2) and (1, 2); only the first completes "cat".
        let grid = grid_from_rows(&["ca.", "zx.", "xzx"]);
        let pos = search.best_placement(&grid, Letter::from_char('t').unwrap());
        assert_eq!(pos, CellPos::new(0, 2));
    }

    #[test]
    fn test_fallback_when_nothing_matches() {
        let mut search = search(&["zzz"]);
        let grid = grid_from_rows(&["aaa.", "aaaa", "aaaa", "aaaa"]);
        let (letter, pos) = search.best_letter_move(&grid);
        assert_eq!(letter, FALLBACK_LETTER);
        assert_eq!(pos, CellPos::new(0, 3));
    }

    #[test]
    fn test_placement_always_returns_an_empty_cell() -> Result<(), SetLetterError> {
        let mut search = search(&["zzz"]);
        let mut grid = Grid::new(3);
        let letter = Letter::from_char('a').unwrap();
        for _ in 0..9 {
            let pos = search.best_placement(&grid, letter);
            grid.set_letter(pos, letter)?;
        }
        assert!(grid.is_full());
        Ok(())
    }
}
