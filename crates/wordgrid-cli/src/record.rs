use std::{
    fs::{self, File},
    io::{BufWriter, Write as _},
    path::Path,
};

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wordgrid_engine::{GameRules, GameSeed, PlayerSummary};

/// One finished game: the standings the session reported when it ended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct GameRecord {
    pub(crate) standings: Vec<PlayerSummary>,
}

/// Everything needed to audit or replay a tournament: when it ran, the master
/// seed, the rules, and every game's outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct TournamentRecord {
    pub(crate) recorded_at: DateTime<Utc>,
    pub(crate) seed: GameSeed,
    pub(crate) rules: GameRules,
    pub(crate) games: Vec<GameRecord>,
}

impl TournamentRecord {
    pub(crate) fn new(seed: GameSeed, rules: GameRules, games: Vec<GameRecord>) -> Self {
        Self {
            recorded_at: Utc::now(),
            seed,
            rules,
            games,
        }
    }

    /// Writes the record as pretty-printed JSON, creating parent directories
    /// as needed.
    pub(crate) fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        let file = File::create(path)
            .with_context(|| format!("Failed to create file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Failed to flush output to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use wordgrid_engine::Grid;

    use super::*;

    #[test]
    fn test_record_serde_roundtrip() {
        let record = TournamentRecord::new(
            "00000000000000000000000000000042".parse().unwrap(),
            GameRules::default(),
            vec![GameRecord {
                standings: vec![PlayerSummary {
                    name: "search-1".to_owned(),
                    score: 7,
                    cumulative_score: 21,
                    scoring_words: vec!["cat".to_owned(), "dots".to_owned()],
                    grid: Grid::new(5),
                }],
            }],
        );

        let json = serde_json::to_string_pretty(&record).unwrap();
        let back: TournamentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, record.seed);
        assert_eq!(back.games.len(), 1);
        assert_eq!(back.games[0].standings[0].name, "search-1");
        assert_eq!(back.games[0].standings[0].cumulative_score, 21);
    }
}
