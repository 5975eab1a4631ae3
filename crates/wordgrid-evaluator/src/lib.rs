//! Move-decision engine for the word grid game.
//!
//! This crate implements a three-level decision architecture:
//!
//! 1. **Line Scoring** ([`line_scorer`]) - Scores a single line by counting
//!    dictionary matches for every contiguous slice, bucketed by slice length.
//! 2. **Move Search** ([`move_search`]) - Enumerates candidate (letter, cell)
//!    moves, compares before/after line scores, and picks the best under a
//!    randomized tie-breaking jitter.
//! 3. **Player Strategies** ([`strategy`]) - Packages the searches behind the
//!    engine's [`PlayerStrategy`](wordgrid_engine::PlayerStrategy) contract.
//!
//! # Architecture
//!
//! ```text
//! Strategy (choose a letter / place a letter)
//!     ↓ uses
//! Move Search (enumerate and rank candidate moves)
//!     ↓ uses
//! Line Scoring (potential of one line, memoized)
//! ```
//!
//! Two scoring philosophies coexist:
//!
//! - [`line_scorer::LineScorer`] counts exact dictionary matches and weights
//!   longer slices exponentially; it looks at what a line *could already*
//!   contain.
//! - [`hole_table::HoleTable`] pre-expands every dictionary word into all of
//!   its partially-blanked variants, so a lookup answers "how close is this
//!   slice to *any* word" in one hash probe. The table-driven strategy in
//!   [`strategy`] builds on it.
//!
//! Heuristic scores produced here guide search only. End-of-game scoring
//! (longest word per line) lives in the engine crate and is deliberately
//! separate.

pub mod hole_table;
pub mod line_scorer;
pub mod move_search;
pub mod strategy;
