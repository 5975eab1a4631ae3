//! Heuristic line scoring: how much word potential does one line hold?
//!
//! A line's score is a vector of dictionary-match counts bucketed by slice
//! length: for every contiguous slice of the line that is at least the minimum
//! word length, the number of words that still fit the slice (holes matching
//! any letter) is added to the bucket for that slice's length. Every match of
//! a slice shares the slice's length, so the bucket is fully determined by the
//! slice.
//!
//! The same line content recurs constantly during search (every candidate
//! letter in every candidate cell re-reads the two crossing lines), so scores
//! are memoized by the line's pattern string.
//!
//! [`linearize`] collapses a before/after pair of score vectors into a single
//! comparable number: the sum of per-axis improvement ratios, scaled by a
//! small random jitter that breaks ties between otherwise-equal moves.

use std::{collections::HashMap, sync::Arc};

use arrayvec::ArrayVec;
use rand::Rng;
use wordgrid_engine::{Dictionary, Line, MAX_GRID_SIZE};

/// Fraction of a move's linearized score that the tie-breaking jitter may
/// swing in either direction.
pub const DEFAULT_JITTER: f64 = 0.15;

/// Match counts per slice length, from the minimum word length up to the line
/// length. Bucket `i` holds the count for slices of length `min_len + i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreVector {
    counts: ArrayVec<usize, MAX_GRID_SIZE>,
    min_len: usize,
}

impl ScoreVector {
    /// An all-zero vector with one bucket per slice length in
    /// `min_len..=line_len`.
    #[must_use]
    pub fn zeroed(min_len: usize, line_len: usize) -> Self {
        let buckets = (line_len + 1).saturating_sub(min_len);
        let mut counts = ArrayVec::new();
        for _ in 0..buckets {
            counts.push(0);
        }
        Self { counts, min_len }
    }

    fn add(&mut self, slice_len: usize, matches: usize) {
        self.counts[slice_len - self.min_len] += matches;
    }

    #[must_use]
    pub fn count_for(&self, slice_len: usize) -> usize {
        slice_len
            .checked_sub(self.min_len)
            .and_then(|i| self.counts.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Total matches over all buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Collapses the vector to one number, weighting each bucket by
    /// `10^(slice_len - min_len)` so longer near-words dominate shorter ones.
    #[must_use]
    pub fn weighted_sum(&self) -> f64 {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| count as f64 * 10f64.powi(i as i32))
            .sum()
    }
}

/// Memoizing scorer over a shared dictionary.
#[derive(Debug, Clone)]
pub struct LineScorer {
    dictionary: Arc<Dictionary>,
    min_word_len: usize,
    cache: HashMap<String, ScoreVector>,
}

impl LineScorer {
    #[must_use]
    pub fn new(dictionary: Arc<Dictionary>, min_word_len: usize) -> Self {
        Self {
            dictionary,
            min_word_len,
            cache: HashMap::new(),
        }
    }

    #[must_use]
    pub fn min_word_len(&self) -> usize {
        self.min_word_len
    }

    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Scores a line, serving repeats from the pattern-keyed cache.
    pub fn score_line(&mut self, line: &Line) -> ScoreVector {
        if let Some(cached) = self.cache.get(&line.pattern()) {
            return cached.clone();
        }
        let score = self.compute(line);
        self.cache.insert(line.pattern(), score.clone());
        score
    }

    fn compute(&self, line: &Line) -> ScoreVector {
        let mut score = ScoreVector::zeroed(self.min_word_len, line.len());
        for slice in line.slices(self.min_word_len) {
            let matches = self.dictionary.matching_words(slice).count();
            score.add(slice.len(), matches);
        }
        score
    }
}

/// Combines before/after score pairs for the two crossing lines of a move
/// into one comparable value.
///
/// Each axis contributes `new.weighted_sum() / original.weighted_sum()`, and
/// an axis with zero original potential contributes nothing (the ratio would
/// be meaningless). The result is scaled by a uniform factor in
/// `[1 - jitter/2, 1 + jitter/2]` so equally-scored moves do not always
/// resolve in enumeration order.
pub fn linearize(
    original: (&ScoreVector, &ScoreVector),
    new: (&ScoreVector, &ScoreVector),
    jitter: f64,
    rng: &mut impl Rng,
) -> f64 {
    let mut score = 0.0;
    let orig_h = original.0.weighted_sum();
    if orig_h > 0.0 {
        score += new.0.weighted_sum() / orig_h;
    }
    let orig_v = original.1.weighted_sum();
    if orig_v > 0.0 {
        score += new.1.weighted_sum() / orig_v;
    }
    debug_assert!(score >= 0.0);
    score * (1.0 + jitter / 2.0 - rng.random::<f64>() * jitter)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn scorer(words: &[&str], min_word_len: usize) -> LineScorer {
        LineScorer::new(Arc::new(Dictionary::new(words.iter().copied())), min_word_len)
    }

    #[test]
    fn test_buckets_count_matches_by_slice_length() {
        let mut scorer = scorer(&["cat", "cot", "cats"], 3);
        let score = scorer.score_line(&Line::from_pattern("c.t."));
        // Length-3 slices: "c.t" (2 matches), ".t." (0).
        // Length-4 slice: "c.t." (1 match, "cats").
        assert_eq!(score.count_for(3), 2);
        assert_eq!(score.count_for(4), 1);
        assert_eq!(score.total(), 3);
    }

    #[test]
    fn test_weighted_sum_prefers_longer_matches() {
        let mut scorer = scorer(&["cat", "cot", "cats"], 3);
        let score = scorer.score_line(&Line::from_pattern("c.t."));
        // 2 x 10^0 + 1 x 10^1
        assert_eq!(score.weighted_sum(), 12.0);
    }

    #[test]
    fn test_score_is_cached_by_pattern() {
        let mut scorer = scorer(&["cat"], 3);
        let first = scorer.score_line(&Line::from_pattern("c.t"));
        assert_eq!(scorer.cache_len(), 1);
        let second = scorer.score_line(&Line::from_pattern("c.t"));
        assert_eq!(scorer.cache_len(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unmatchable_line_is_zero() {
        let mut scorer = scorer(&["cat"], 3);
        let score = scorer.score_line(&Line::from_pattern("xyz"));
        assert!(score.is_zero());
        assert_eq!(score.weighted_sum(), 0.0);
    }

    #[test]
    fn test_linearize_ratio_of_improvements() {
        let mut rng = Pcg32::from_seed([7; 16]);
        let mut scorer = scorer(&["cat", "cot"], 3);
        let original = scorer.score_line(&Line::from_pattern("..t"));
        let horizontal = scorer.score_line(&Line::from_pattern("c.t"));
        let vertical = scorer.score_line(&Line::from_pattern("..t"));
        // With jitter disabled the score is exactly the sum of axis ratios.
        let score = linearize(
            (&original, &original),
            (&horizontal, &vertical),
            0.0,
            &mut rng,
        );
        let expected = horizontal.weighted_sum() / original.weighted_sum() + 1.0;
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_linearize_zero_potential_axes_contribute_nothing() {
        let mut rng = Pcg32::from_seed([7; 16]);
        let zero = ScoreVector::zeroed(3, 5);
        let score = linearize((&zero, &zero), (&zero, &zero), DEFAULT_JITTER, &mut rng);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_linearize_jitter_stays_in_band() {
        let mut rng = Pcg32::from_seed([42; 16]);
        let mut scorer = scorer(&["cat"], 3);
        let line = scorer.score_line(&Line::from_pattern("c.t"));
        for _ in 0..100 {
            let score = linearize((&line, &line), (&line, &line), DEFAULT_JITTER, &mut rng);
            // Un-jittered value is 2.0; the band is +/- jitter/2 around it.
            assert!(score >= 2.0 * (1.0 - DEFAULT_JITTER / 2.0));
            assert!(score <= 2.0 * (1.0 + DEFAULT_JITTER / 2.0));
        }
    }
}
