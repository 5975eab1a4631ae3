use std::{fmt, str::FromStr, sync::Arc};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
    seq::SliceRandom,
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    SetLetterError,
    core::{dictionary::Dictionary, grid::Grid},
    engine::{
        rules::GameRules,
        scoring::{game_score, scoring_words},
        strategy::{GameEvents, PlayerStrategy, PlayerSummary},
    },
};

/// 128-bit seed for deterministic play.
///
/// Seeds the session's player-order shuffle (and, via the CLI, the strategies'
/// jitter generators), so a recorded tournament can be replayed exactly.
/// Serializes as a 32-character hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSeed([u8; 16]);

impl GameSeed {
    #[must_use]
    pub const fn bytes(self) -> [u8; 16] {
        self.0
    }
}

impl fmt::Display for GameSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl Serialize for GameSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GameSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for GameSeed {
    type Err = String;

    fn from_str(hex_str: &str) -> Result<Self, Self::Err> {
        if hex_str.len() != 32 {
            return Err(format!(
                "invalid hex: expected 32 characters, got {}",
                hex_str.len()
            ));
        }
        let num = u128::from_str_radix(hex_str, 16)
            .map_err(|e| format!("invalid hex: {hex_str} ({e})"))?;
        Ok(Self(num.to_be_bytes()))
    }
}

/// Allows generating random `GameSeed` values with `rng.random()`.
impl Distribution<GameSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GameSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        GameSeed(seed)
    }
}

struct PlayerSlot {
    strategy: Box<dyn PlayerStrategy>,
    grid: Grid,
    score: usize,
    cumulative_score: usize,
    scoring_words: Vec<String>,
}

/// Turn loop and tournament state for a set of players.
///
/// Each player owns a private grid, recreated at the start of every game.
/// A game runs `grid_size^2` turns: in each of the first `grid_size^2 - 1`
/// turns a rotating chooser picks a letter that *every* player must place on
/// their own grid; in the final turn each player fills their last cell with a
/// letter of their own choosing. Per-game scores come from
/// [`scoring_words`]; cumulative scores persist across games.
pub struct GameSession {
    rules: GameRules,
    dictionary: Arc<Dictionary>,
    players: Vec<PlayerSlot>,
    rng: Pcg32,
    seed: GameSeed,
    games_played: usize,
}

impl GameSession {
    /// Creates a session with a random seed.
    ///
    /// # Panics
    ///
    /// Panics if `strategies` is empty.
    #[must_use]
    pub fn new(
        rules: GameRules,
        dictionary: Arc<Dictionary>,
        strategies: Vec<Box<dyn PlayerStrategy>>,
    ) -> Self {
        Self::with_seed(rules, dictionary, strategies, rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for reproducible play.
    #[must_use]
    pub fn with_seed(
        rules: GameRules,
        dictionary: Arc<Dictionary>,
        strategies: Vec<Box<dyn PlayerStrategy>>,
        seed: GameSeed,
    ) -> Self {
        assert!(!strategies.is_empty(), "a game needs at least one player");
        let players = strategies
            .into_iter()
            .map(|strategy| PlayerSlot {
                strategy,
                grid: Grid::new(rules.grid_size),
                score: 0,
                cumulative_score: 0,
                scoring_words: Vec::new(),
            })
            .collect();
        Self {
            rules,
            dictionary,
            players,
            rng: Pcg32::from_seed(seed.bytes()),
            seed,
            games_played: 0,
        }
    }

    #[must_use]
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    #[must_use]
    pub fn seed(&self) -> GameSeed {
        self.seed
    }

    #[must_use]
    pub fn games_played(&self) -> usize {
        self.games_played
    }

    /// Plays one full game and returns the standings after it.
    pub fn play_game(
        &mut self,
        events: &mut dyn GameEvents,
    ) -> Result<Vec<PlayerSummary>, SetLetterError> {
        for slot in &mut self.players {
            slot.grid = Grid::new(self.rules.grid_size);
            slot.score = 0;
            slot.scoring_words.clear();
        }

        let mut order: Vec<usize> = (0..self.players.len()).collect();
        order.shuffle(&mut self.rng);

        // All but the last cell: a rotating chooser binds everyone's placement.
        let shared_turns = self.rules.total_turns() - 1;
        for turn in 0..shared_turns {
            events.turn_started(turn + 1);
            let chooser = order[turn % order.len()];
            let letter = {
                let slot = &mut self.players[chooser];
                slot.strategy.choose_letter(&slot.grid)
            };
            events.letter_chosen(self.players[chooser].strategy.name(), letter);

            for slot in &mut self.players {
                let pos = slot.strategy.place_letter(&slot.grid, letter);
                slot.grid.set_letter(pos, letter)?;
                events.letter_placed(slot.strategy.name(), letter, pos);
            }
        }

        // Last turn: every player fills their final cell independently.
        events.turn_started(self.rules.total_turns());
        for slot in &mut self.players {
            let letter = slot.strategy.choose_letter(&slot.grid);
            events.letter_chosen(slot.strategy.name(), letter);
            let pos = slot.strategy.place_letter(&slot.grid, letter);
            slot.grid.set_letter(pos, letter)?;
            events.letter_placed(slot.strategy.name(), letter, pos);
        }

        for slot in &mut self.players {
            debug_assert!(slot.grid.is_full());
            slot.scoring_words =
                scoring_words(&slot.grid, &self.dictionary, self.rules.min_word_len);
            slot.score = game_score(&slot.scoring_words);
            slot.cumulative_score += slot.score;
        }
        self.games_played += 1;

        let standings = self.standings();
        events.game_complete(&standings);
        Ok(standings)
    }

    /// Tournament driver: plays `games` games back to back and returns the
    /// final standings.
    pub fn play_games(
        &mut self,
        games: usize,
        events: &mut dyn GameEvents,
    ) -> Result<Vec<PlayerSummary>, SetLetterError> {
        for game_index in 0..games {
            events.game_started(game_index + 1);
            self.play_game(events)?;
        }
        Ok(self.standings())
    }

    /// Current standings, best cumulative score first.
    #[must_use]
    pub fn standings(&self) -> Vec<PlayerSummary> {
        let mut standings: Vec<PlayerSummary> = self
            .players
            .iter()
            .map(|slot| PlayerSummary {
                name: slot.strategy.name().to_owned(),
                score: slot.score,
                cumulative_score: slot.cumulative_score,
                scoring_words: slot.scoring_words.clone(),
                grid: slot.grid.clone(),
            })
            .collect();
        standings.sort_by(|a, b| b.cumulative_score.cmp(&a.cumulative_score));
        standings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{grid::CellPos, letter::Letter},
        engine::strategy::NullEvents,
    };

    /// Always wants 'a', places into the first empty cell.
    struct FirstCellPlayer {
        name: String,
    }

    impl PlayerStrategy for FirstCellPlayer {
        fn name(&self) -> &str {
            &self.name
        }

        fn choose_letter(&mut self, _grid: &Grid) -> Letter {
            Letter::from_char('a').unwrap()
        }

        fn place_letter(&mut self, grid: &Grid, _letter: Letter) -> CellPos {
            grid.empty_cells().next().unwrap()
        }
    }

    fn session(names: &[&str]) -> GameSession {
        let strategies: Vec<Box<dyn PlayerStrategy>> = names
            .iter()
            .map(|&name| {
                Box::new(FirstCellPlayer {
                    name: name.to_owned(),
                }) as Box<dyn PlayerStrategy>
            })
            .collect();
        GameSession::with_seed(
            GameRules::new(4, 3),
            Arc::new(Dictionary::new(["aaa", "aaaa"])),
            strategies,
            "0123456789abcdef0123456789abcdef".parse().unwrap(),
        )
    }

    #[test]
    fn test_game_fills_every_grid() {
        let mut session = session(&["p1", "p2"]);
        let standings = session.play_game(&mut NullEvents).unwrap();
        assert_eq!(standings.len(), 2);
        for summary in &standings {
            assert!(summary.grid.is_full());
        }
    }

    #[test]
    fn test_all_a_grid_scores_longest_word_per_line() {
        let mut session = session(&["solo"]);
        let standings = session.play_game(&mut NullEvents).unwrap();
        // Every one of the 8 lines of the 4x4 all-'a' grid reads "aaaa".
        assert_eq!(standings[0].scoring_words.len(), 8);
        assert_eq!(standings[0].score, 32);
    }

    #[test]
    fn test_cumulative_score_accumulates_across_games() {
        let mut session = session(&["solo"]);
        let standings = session.play_games(3, &mut NullEvents).unwrap();
        assert_eq!(session.games_played(), 3);
        assert_eq!(standings[0].score, 32);
        assert_eq!(standings[0].cumulative_score, 96);
    }

    #[test]
    fn test_events_observe_every_turn() {
        #[derive(Default)]
        struct Counter {
            turns: usize,
            chosen: usize,
            placed: usize,
            completed: usize,
        }

        impl GameEvents for Counter {
            fn turn_started(&mut self, _turn: usize) {
                self.turns += 1;
            }
            fn letter_chosen(&mut self, _player: &str, _letter: Letter) {
                self.chosen += 1;
            }
            fn letter_placed(&mut self, _player: &str, _letter: Letter, _pos: CellPos) {
                self.placed += 1;
            }
            fn game_complete(&mut self, _standings: &[PlayerSummary]) {
                self.completed += 1;
            }
        }

        let mut session = session(&["p1", "p2"]);
        let mut events = Counter::default();
        session.play_game(&mut events).unwrap();
        // 16 turns; 15 shared choices plus 2 independent final ones.
        assert_eq!(events.turns, 16);
        assert_eq!(events.chosen, 17);
        assert_eq!(events.placed, 32);
        assert_eq!(events.completed, 1);
    }

    mod game_seed {
        use super::*;

        #[test]
        fn test_serde_roundtrip_hex_string() {
            let seed: GameSeed = rand::rng().random();
            let json = serde_json::to_string(&seed).unwrap();
            let back: GameSeed = serde_json::from_str(&json).unwrap();
            assert_eq!(seed, back);
        }

        #[test]
        fn test_known_value() {
            let seed: GameSeed = "000000000000000000000000000000ff".parse().unwrap();
            assert_eq!(seed.bytes()[15], 0xff);
            assert_eq!(seed.bytes()[0], 0);
        }

        #[test]
        fn test_rejects_wrong_length_or_non_hex() {
            assert!("abc".parse::<GameSeed>().is_err());
            assert!(
                "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz"
                    .parse::<GameSeed>()
                    .is_err()
            );
        }
    }
}
