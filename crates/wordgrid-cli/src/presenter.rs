use wordgrid_engine::{CellPos, GameEvents, Letter, PlayerSummary};

/// Prints the game as it unfolds; `quiet` suppresses everything except the
/// per-game scoreboards.
pub(crate) struct ConsolePresenter {
    quiet: bool,
    game_index: usize,
}

impl ConsolePresenter {
    pub(crate) fn new(quiet: bool) -> Self {
        Self {
            quiet,
            game_index: 0,
        }
    }
}

impl GameEvents for ConsolePresenter {
    fn game_started(&mut self, game_index: usize) {
        self.game_index = game_index;
        if !self.quiet {
            println!("=== Game {game_index} ===");
        }
    }

    fn turn_started(&mut self, turn: usize) {
        if !self.quiet {
            println!("--- Turn {turn} ---");
        }
    }

    fn letter_chosen(&mut self, player: &str, letter: Letter) {
        if !self.quiet {
            println!("{player} calls '{letter}'");
        }
    }

    fn letter_placed(&mut self, player: &str, letter: Letter, pos: CellPos) {
        if !self.quiet {
            println!("  {player} places '{letter}' at {pos}");
        }
    }

    fn game_complete(&mut self, standings: &[PlayerSummary]) {
        if self.quiet {
            return;
        }
        println!("Game {} results:", self.game_index);
        for summary in standings {
            println!(
                "  {}: {} points ({})",
                summary.name,
                summary.score,
                if summary.scoring_words.is_empty() {
                    "no words".to_owned()
                } else {
                    summary.scoring_words.join(", ")
                }
            );
        }
    }
}

/// Final standings with each player's last grid and scoring words.
pub(crate) fn print_leaderboard(standings: &[PlayerSummary]) {
    println!("=== Final standings ===");
    for (rank, summary) in standings.iter().enumerate() {
        println!(
            "{}. {} - {} points (last game: {})",
            rank + 1,
            summary.name,
            summary.cumulative_score,
            summary.score,
        );
        for row in summary.grid.to_string().lines() {
            println!("     {row}");
        }
        if !summary.scoring_words.is_empty() {
            println!("     words: {}", summary.scoring_words.join(", "));
        }
    }
}
