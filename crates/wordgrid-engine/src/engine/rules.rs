use serde::{Deserialize, Serialize};

use crate::core::grid::{MAX_GRID_SIZE, MIN_GRID_SIZE};

/// Board dimension and word-length configuration shared by every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    pub grid_size: usize,
    pub min_word_len: usize,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            grid_size: 5,
            min_word_len: 3,
        }
    }
}

impl GameRules {
    /// # Panics
    ///
    /// Panics if the grid size is unsupported or the minimum word length does
    /// not fit on a line.
    #[must_use]
    pub fn new(grid_size: usize, min_word_len: usize) -> Self {
        assert!(
            (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&grid_size),
            "grid size {grid_size} outside [{MIN_GRID_SIZE}, {MAX_GRID_SIZE}]"
        );
        assert!(
            (2..=grid_size).contains(&min_word_len),
            "min word length {min_word_len} must be in [2, {grid_size}]"
        );
        Self {
            grid_size,
            min_word_len,
        }
    }

    /// Turns in one game: one letter placement per cell.
    #[must_use]
    pub fn total_turns(&self) -> usize {
        self.grid_size * self.grid_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = GameRules::default();
        assert_eq!(rules.grid_size, 5);
        assert_eq!(rules.min_word_len, 3);
        assert_eq!(rules.total_turns(), 25);
    }

    #[test]
    #[should_panic(expected = "min word length")]
    fn test_min_word_len_must_fit_on_a_line() {
        let _ = GameRules::new(4, 5);
    }
}
