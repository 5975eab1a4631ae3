//! Core primitives and game logic for the word-grid board game.
//!
//! Players take turns choosing and placing letters on a square grid; when every
//! cell is filled, each row and column scores its single longest dictionary
//! word. This crate provides:
//!
//! - [`Grid`], [`Line`], [`Letter`] - the board primitives
//! - [`Dictionary`] - the immutable word set with wildcard slice matching
//! - [`GameSession`] - the turn loop and multi-game tournament state
//! - [`PlayerStrategy`] / [`GameEvents`] - the contracts a player
//!   implementation and a presentation layer plug into
//!
//! Move decision logic (the part that decides *which* letter goes *where*)
//! lives in the `wordgrid-evaluator` crate.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, derive_more::Display, derive_more::Error)]
#[display("cell ({row}, {col}) outside {size}x{size} grid")]
pub struct OutOfBoundsError {
    pub row: usize,
    pub col: usize,
    pub size: usize,
}

#[derive(Debug, Clone, Copy, derive_more::Display, derive_more::Error)]
#[display("cell ({row}, {col}) already holds '{letter}'")]
pub struct OccupiedCellError {
    pub row: usize,
    pub col: usize,
    pub letter: core::Letter,
}

/// Failure modes of a checked grid write.
///
/// Both variants are caller contract violations: a well-behaved strategy never
/// targets an out-of-range or occupied cell, so these surface immediately and
/// are never retried.
#[derive(Debug, Clone, Copy, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum SetLetterError {
    #[display("{_0}")]
    OutOfBounds(OutOfBoundsError),
    #[display("{_0}")]
    Occupied(OccupiedCellError),
}
