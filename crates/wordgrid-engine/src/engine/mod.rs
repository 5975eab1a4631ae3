//! Game orchestration: rules, turn loop, final scoring, player contracts.
//!
//! - [`GameRules`] - the configuration surface (grid dimension, minimum word
//!   length)
//! - [`GameSession`] - multi-game tournament state driving the turn loop
//! - [`PlayerStrategy`] - the two-method decision contract a player implements
//! - [`GameEvents`] - read-only observer hooks for presentation layers
//! - [`scoring_words`] - end-of-game scoring (longest word per line)
//!
//! End-of-game scoring is deliberately simpler than the heuristic scoring the
//! evaluator crate uses during search: a full line scores its single longest
//! valid word, not a tally over all matching slices. The two must not be
//! conflated.

pub use self::{game_session::*, rules::*, scoring::*, strategy::*};

pub(crate) mod game_session;
pub(crate) mod rules;
pub(crate) mod scoring;
pub(crate) mod strategy;
