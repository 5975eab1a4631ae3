//! The two stock player personalities.
//!
//! Both implement the engine's [`PlayerStrategy`] contract and both cache the
//! coordinate they settled on while choosing a letter, so the placement call
//! that immediately follows on the same grid is answered without repeating
//! the search.
//!
//! - [`SearchStrategy`] runs the full [`MoveSearch`] every decision:
//!   dictionary-match counting with jittered ratio ranking.
//! - [`TableStrategy`] trades the per-move dictionary scans for
//!   [`HoleTable`] lookups plus a completed-word bonus, and ranks placement
//!   cells by how well the forced letter does *relative to the best letter*
//!   for that cell.

use std::sync::Arc;

use wordgrid_engine::{CellPos, Dictionary, Grid, Letter, Line, PlayerStrategy, slice_pattern};

use crate::{
    hole_table::{HoleTable, ScoreMap, default_score_map},
    move_search::{FALLBACK_LETTER, MoveSearch, first_empty_cell},
};

/// Player driven by the dictionary-scan move search.
pub struct SearchStrategy {
    name: String,
    search: MoveSearch,
    next_pos: Option<CellPos>,
}

impl SearchStrategy {
    #[must_use]
    pub fn new(name: impl Into<String>, dictionary: Arc<Dictionary>, min_word_len: usize) -> Self {
        Self {
            name: name.into(),
            search: MoveSearch::new(dictionary, min_word_len),
            next_pos: None,
        }
    }

    /// Like [`Self::new`], but with a fixed seed for reproducible decisions.
    #[must_use]
    pub fn with_seed(
        name: impl Into<String>,
        dictionary: Arc<Dictionary>,
        min_word_len: usize,
        seed: [u8; 16],
    ) -> Self {
        Self {
            name: name.into(),
            search: MoveSearch::with_seed(dictionary, min_word_len, seed),
            next_pos: None,
        }
    }
}

impl PlayerStrategy for SearchStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_letter(&mut self, grid: &Grid) -> Letter {
        let (letter, pos) = self.search.best_letter_move(grid);
        self.next_pos = Some(pos);
        letter
    }

    fn place_letter(&mut self, grid: &Grid, letter: Letter) -> CellPos {
        if let Some(pos) = self.next_pos.take() {
            return pos;
        }
        self.search.best_placement(grid, letter)
    }
}

/// Player driven by precomputed hole-pattern weights.
pub struct TableStrategy {
    name: String,
    dictionary: Arc<Dictionary>,
    table: HoleTable,
    min_word_len: usize,
    word_bonus: f64,
    pair_scale: f64,
    next_pos: Option<CellPos>,
}

impl TableStrategy {
    #[must_use]
    pub fn new(name: impl Into<String>, dictionary: Arc<Dictionary>, min_word_len: usize) -> Self {
        Self::with_score_map(name, dictionary, min_word_len, &default_score_map())
    }

    #[must_use]
    pub fn with_score_map(
        name: impl Into<String>,
        dictionary: Arc<Dictionary>,
        min_word_len: usize,
        score_map: &ScoreMap,
    ) -> Self {
        let table = HoleTable::build(&dictionary, score_map);
        Self {
            name: name.into(),
            dictionary,
            table,
            min_word_len,
            word_bonus: 1.1,
            pair_scale: 2.5,
            next_pos: None,
        }
    }

    /// Total table weight over the line's slices, multiplied by the bonus when
    /// the line's trimmed content is already a complete dictionary word.
    fn line_weight(&self, line: &Line) -> f64 {
        let bonus = line
            .inner_word()
            .is_some_and(|word| self.dictionary.contains(&word));
        let raw: f64 = line
            .slices(self.min_word_len)
            .map(|slice| self.table.weight(&slice_pattern(slice)))
            .sum();
        if bonus { raw * self.word_bonus } else { raw }
    }

    fn axis_weights(&self, grid: &Grid, pos: CellPos) -> (f64, f64) {
        (
            self.line_weight(&grid.row_line(pos.row)),
            self.line_weight(&grid.col_line(pos.col)),
        )
    }

    /// Ratio-of-improvement scalar over the two axes. A cell where both axes
    /// already carry weight is worth disproportionately more than a cell
    /// feeding only one axis.
    fn score_scalar(&self, orig: (f64, f64), new: (f64, f64)) -> f64 {
        if orig.0 > 0.0 && orig.1 > 0.0 {
            (new.0 / orig.0 + new.1 / orig.1) * self.pair_scale
        } else if orig.0 > 0.0 {
            new.0 / orig.0
        } else if orig.1 > 0.0 {
            new.1 / orig.1
        } else {
            0.0
        }
    }
}

impl PlayerStrategy for TableStrategy {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_letter(&mut self, grid: &Grid) -> Letter {
        let mut trial = grid.clone();
        let mut best: Option<(f64, CellPos, Letter)> = None;
        for pos in grid.empty_cells() {
            let orig = self.axis_weights(grid, pos);
            if orig.0 + orig.1 == 0.0 {
                continue;
            }
            for letter in Letter::alphabet() {
                let new = trial.with_trial(pos, letter, |g| self.axis_weights(g, pos));
                let score = self.score_scalar(orig, new);
                if best.is_none_or(|(top, _, _)| score > top) {
                    best = Some((score, pos, letter));
                }
            }
        }
        match best {
            Some((_, pos, letter)) => {
                self.next_pos = Some(pos);
                letter
            }
            None => {
                self.next_pos = Some(first_empty_cell(grid));
                FALLBACK_LETTER
            }
        }
    }

    fn place_letter(&mut self, grid: &Grid, letter: Letter) -> CellPos {
        if let Some(pos) = self.next_pos.take() {
            return pos;
        }
        let mut trial = grid.clone();
        let mut best: Option<(f64, CellPos)> = None;
        for pos in grid.empty_cells() {
            let orig = self.axis_weights(grid, pos);
            if orig.0 + orig.1 == 0.0 {
                continue;
            }
            let mut forced = 0.0;
            let mut top = 0.0f64;
            for candidate in Letter::alphabet() {
                let new = trial.with_trial(pos, candidate, |g| self.axis_weights(g, pos));
                let score = self.score_scalar(orig, new);
                if candidate == letter {
                    forced = score;
                }
                top = top.max(score);
            }
            if top <= 0.0 {
                continue;
            }
            // How close the forced letter comes to this cell's best case.
            let potential = forced / top;
            if best.is_none_or(|(best_potential, _)| potential > best_potential) {
                best = Some((potential, pos));
            }
        }
        match best {
            Some((_, pos)) => pos,
            None => first_empty_cell(grid),
        }
    }
}

#[cfg(test)]
mod tests {
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

    fn dictionary(words: &[&str]) -> Arc<Dictionary> {
        Arc::new(Dictionary::new(words.iter().copied()))
    }

    #[test]
    fn test_search_strategy_caches_placement_from_choose() {
        let mut player = SearchStrategy::with_seed("s", dictionary(&["cat"]), 3, [3; 16]);
        let grid = grid_from_rows(&["ca.", "xzx", "zxz"]);
        let letter = player.choose_letter(&grid);
        let pos = player.place_letter(&grid, letter);
        assert_eq!(pos, CellPos::new(0, 2));
        // The cache is one-shot; the next placement searches again.
        assert!(player.next_pos.is_none());
    }

    #[test]
    fn test_table_strategy_completes_a_word() {
        let mut player = TableStrategy::new("t", dictionary(&["cat"]), 3);
        let grid = grid_from_rows(&["ca.", "xzx", "zxz"]);
        let letter = player.choose_letter(&grid);
        assert_eq!(letter.as_char(), 't');
        assert_eq!(player.place_letter(&grid, letter), CellPos::new(0, 2));
    }

    #[test]
    fn test_table_strategy_placement_prefers_relative_best_cell() {
        let mut player = TableStrategy::new("t", dictionary(&["cat"]), 3);
        // (0, 2) completes "cat"; (1, 2) sits on lines with no table weight.
        let grid = grid_from_rows(&["ca.", "zx.", "xzx"]);
        let pos = player.place_letter(&grid, Letter::from_char('t').unwrap());
        assert_eq!(pos, CellPos::new(0, 2));
    }

    #[test]
    fn test_table_strategy_fallback_on_dead_board() {
        let mut player = TableStrategy::new("t", dictionary(&["cat"]), 3);
        let grid = grid_from_rows(&[".zz", "zzz", "zzz"]);
        let letter = player.choose_letter(&grid);
        assert_eq!(letter, FALLBACK_LETTER);
        assert_eq!(player.place_letter(&grid, letter), CellPos::new(0, 0));
    }

    #[test]
    fn test_completed_word_bonus_applies_per_line() {
        let player = TableStrategy::new("t", dictionary(&["cat"]), 3);
        let plain = player.line_weight(&Line::from_pattern("ca."));
        let complete = player.line_weight(&Line::from_pattern("cat"));
        // Both lines carry a weight-3 slice; only the completed one earns the
        // bonus multiplier.
        assert!((plain - 3.0).abs() < 1e-12);
        assert!((complete - 3.3).abs() < 1e-12);
    }

    #[test]
    fn test_seeded_game_is_reproducible() {
        use wordgrid_engine::{GameRules, GameSession, NullEvents};

        let words = ["cat", "cot", "dot", "tac", "act"];
        let run = || {
            let dictionary = dictionary(&words);
            let strategies: Vec<Box<dyn PlayerStrategy>> = vec![
                Box::new(SearchStrategy::with_seed(
                    "s",
                    Arc::clone(&dictionary),
                    3,
                    [5; 16],
                )),
                Box::new(TableStrategy::new("t", Arc::clone(&dictionary), 3)),
            ];
            let mut session = GameSession::with_seed(
                GameRules::new(4, 3),
                dictionary,
                strategies,
                "0000000000000000000000000000002a".parse().unwrap(),
            );
            session.play_game(&mut NullEvents).unwrap()
        };

        let first = run();
        let second = run();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.score, b.score);
            assert_eq!(a.scoring_words, b.scoring_words);
            assert_eq!(a.grid, b.grid);
        }
    }

    #[test]
    fn test_both_axes_alive_scores_with_pair_scale() {
        let player = TableStrategy::new("t", dictionary(&["cat"]), 3);
        assert_eq!(player.score_scalar((2.0, 4.0), (2.0, 4.0)), 5.0);
        assert_eq!(player.score_scalar((2.0, 0.0), (3.0, 0.0)), 1.5);
        assert_eq!(player.score_scalar((0.0, 2.0), (0.0, 1.0)), 0.5);
        assert_eq!(player.score_scalar((0.0, 0.0), (0.0, 0.0)), 0.0);
    }
}
