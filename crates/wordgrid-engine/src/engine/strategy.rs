use serde::{Deserialize, Serialize};

use crate::core::{
    grid::{CellPos, Grid},
    letter::Letter,
};

/// The two-method decision contract every player personality implements.
///
/// Each round the game loop first asks one player to [`choose_letter`], then
/// asks every player to [`place_letter`] that same letter on their own grid.
/// Implementations may cache the coordinate they picked while choosing so the
/// immediately following placement call on the same grid is answered without
/// re-searching.
///
/// Contract: the returned coordinate must be an empty, in-bounds cell of the
/// grid that was passed in; the session surfaces a violation as
/// [`SetLetterError`](crate::SetLetterError) without retrying.
///
/// [`choose_letter`]: Self::choose_letter
/// [`place_letter`]: Self::place_letter
pub trait PlayerStrategy {
    fn name(&self) -> &str;

    /// Picks the letter this player would most like placed next.
    fn choose_letter(&mut self, grid: &Grid) -> Letter;

    /// Picks the empty cell to receive `letter`.
    fn place_letter(&mut self, grid: &Grid, letter: Letter) -> CellPos;
}

/// Final state of one player after a game, consumed read-only by presentation
/// and record output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
    pub score: usize,
    pub cumulative_score: usize,
    pub scoring_words: Vec<String>,
    pub grid: Grid,
}

/// Observer hooks the game loop fires as play progresses.
///
/// All hooks default to no-ops; presentation layers override what they need.
/// Nothing an observer does feeds back into the game.
pub trait GameEvents {
    fn game_started(&mut self, _game_index: usize) {}
    fn turn_started(&mut self, _turn: usize) {}
    fn letter_chosen(&mut self, _player: &str, _letter: Letter) {}
    fn letter_placed(&mut self, _player: &str, _letter: Letter, _pos: CellPos) {}
    fn game_complete(&mut self, _standings: &[PlayerSummary]) {}
}

/// Event sink that ignores everything; useful for tests and headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEvents;

impl GameEvents for NullEvents {}
