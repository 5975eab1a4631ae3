//! Precomputed weights for partially-blanked word patterns.
//!
//! For every dictionary word, every way of replacing a subset of its letters
//! with holes is enumerated (`2^len` variants per word), and each variant
//! accumulates the word's configured weight. A slice of the board can then be
//! valued with a single lookup of its pattern: the result is the total weight
//! of every word the slice could still become, with no per-move regex or
//! dictionary scan.
//!
//! A word of length `L` contributes to `2^L` entries, so the table is built
//! once per strategy and shared for the rest of the run.

use std::collections::HashMap;

use wordgrid_engine::{Dictionary, HOLE_CHAR, MAX_GRID_SIZE};

/// Per-word-length weights used when building a [`HoleTable`].
pub type ScoreMap = HashMap<usize, f64>;

/// The stock weighting: short words count a little, long words a lot.
#[must_use]
pub fn default_score_map() -> ScoreMap {
    ScoreMap::from([(3, 3.0), (4, 4.0), (5, 5.0)])
}

/// Pattern-to-weight table over all partially-blanked dictionary words.
#[derive(Debug, Clone, Default)]
pub struct HoleTable {
    weights: HashMap<Box<str>, f64>,
}

impl HoleTable {
    /// Expands every dictionary word into its hole variants and accumulates
    /// `score_map[word_len]` into each variant's entry. Words with no entry in
    /// the score map, and words too long to fit on any line, are skipped.
    #[must_use]
    pub fn build(dictionary: &Dictionary, score_map: &ScoreMap) -> Self {
        let mut weights = HashMap::new();
        for (&len, &weight) in score_map {
            if len > MAX_GRID_SIZE || weight == 0.0 {
                continue;
            }
            for word in dictionary.words_of_len(len) {
                let bytes = word.as_bytes();
                for mask in 0u32..(1 << len) {
                    let pattern: String = bytes
                        .iter()
                        .enumerate()
                        .map(|(i, &b)| {
                            if mask & (1 << i) == 0 {
                                char::from(b)
                            } else {
                                HOLE_CHAR
                            }
                        })
                        .collect();
                    *weights.entry(pattern.into_boxed_str()).or_insert(0.0) += weight;
                }
            }
        }
        Self { weights }
    }

    /// Total weight of all words the pattern could still become; `0.0` for a
    /// pattern no word matches.
    #[must_use]
    pub fn weight(&self, pattern: &str) -> f64 {
        self.weights.get(pattern).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
