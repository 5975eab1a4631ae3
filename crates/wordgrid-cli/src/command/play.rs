use std::{
    fs::File,
    io::BufReader,
    path::PathBuf,
    str::FromStr,
    sync::Arc,
};

use anyhow::{Context as _, ensure};
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use wordgrid_engine::{
    Dictionary, GameEvents as _, GameRules, GameSeed, GameSession, MAX_GRID_SIZE, MIN_GRID_SIZE,
    PlayerStrategy,
};
use wordgrid_evaluator::strategy::{SearchStrategy, TableStrategy};

use crate::{
    presenter::{ConsolePresenter, print_leaderboard},
    record::{GameRecord, TournamentRecord},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Word list file, one lowercase word per line
    #[clap(long, default_value = "./data/words.txt")]
    dictionary: PathBuf,
    /// Number of games in the tournament
    #[clap(long, default_value_t = 1)]
    games: usize,
    /// Grid dimension
    #[clap(long, default_value_t = 5)]
    grid_size: usize,
    /// Shortest word that scores
    #[clap(long, default_value_t = 3)]
    min_word_len: usize,
    /// Add a player, as KIND or KIND:NAME where KIND is `search` or `table`.
    /// Defaults to one of each
    #[clap(long = "player", value_name = "KIND[:NAME]")]
    players: Vec<PlayerSpec>,
    /// 32-character hex seed for a reproducible tournament
    #[clap(long)]
    seed: Option<GameSeed>,
    /// Only print the final standings
    #[clap(long, default_value_t = false)]
    quiet: bool,
    /// Write a JSON record of the tournament to this file
    #[clap(long)]
    record: Option<PathBuf>,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from("./data/words.txt"),
            games: 1,
            grid_size: 5,
            min_word_len: 3,
            players: Vec::new(),
            seed: None,
            quiet: false,
            record: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::FromStr)]
enum StrategyKind {
    #[display("search")]
    Search,
    #[display("table")]
    Table,
}

#[derive(Debug, Clone)]
struct PlayerSpec {
    kind: StrategyKind,
    name: Option<String>,
}

impl FromStr for PlayerSpec {
    type Err = derive_more::FromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, name) = match s.split_once(':') {
            Some((kind, name)) => (kind, Some(name.to_owned())),
            None => (s, None),
        };
        Ok(Self {
            kind: kind.parse()?,
            name,
        })
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    ensure!(
        (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&arg.grid_size),
        "grid size must be between {MIN_GRID_SIZE} and {MAX_GRID_SIZE}"
    );
    ensure!(
        (2..=arg.grid_size).contains(&arg.min_word_len),
        "minimum word length must be between 2 and the grid size"
    );
    ensure!(arg.games > 0, "at least one game must be played");

    let file = File::open(&arg.dictionary)
        .with_context(|| format!("Failed to open word list {}", arg.dictionary.display()))?;
    let dictionary = Arc::new(
        Dictionary::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to read word list {}", arg.dictionary.display()))?,
    );
    ensure!(
        !dictionary.is_empty(),
        "word list {} contains no usable words",
        arg.dictionary.display()
    );

    let rules = GameRules::new(arg.grid_size, arg.min_word_len);
    let seed = arg.seed.unwrap_or_else(|| rand::rng().random());
    // Every random stream in the run derives from the one master seed.
    let mut master_rng = Pcg32::from_seed(seed.bytes());

    let specs = if arg.players.is_empty() {
        vec![
            PlayerSpec {
                kind: StrategyKind::Search,
                name: None,
            },
            PlayerSpec {
                kind: StrategyKind::Table,
                name: None,
            },
        ]
    } else {
        arg.players.clone()
    };
    let strategies: Vec<Box<dyn PlayerStrategy>> = specs
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let name = spec
                .name
                .clone()
                .unwrap_or_else(|| format!("{}-{}", spec.kind, i + 1));
            match spec.kind {
                StrategyKind::Search => Box::new(SearchStrategy::with_seed(
                    name,
                    Arc::clone(&dictionary),
                    rules.min_word_len,
                    master_rng.random(),
                )) as Box<dyn PlayerStrategy>,
                StrategyKind::Table => {
                    Box::new(TableStrategy::new(name, Arc::clone(&dictionary), rules.min_word_len))
                }
            }
        })
        .collect();

    let word_count = dictionary.len();
    let mut session = GameSession::with_seed(rules, dictionary, strategies, master_rng.random());

    if !arg.quiet {
        println!(
            "{word_count} words loaded, seed {seed}, {games} game(s) on a {size}x{size} grid",
            games = arg.games,
            size = rules.grid_size,
        );
    }

    let mut presenter = ConsolePresenter::new(arg.quiet);
    let mut games = Vec::with_capacity(arg.games);
    for game_index in 1..=arg.games {
        presenter.game_started(game_index);
        let standings = session.play_game(&mut presenter)?;
        games.push(GameRecord { standings });
    }

    print_leaderboard(&session.standings());

    if let Some(path) = &arg.record {
        let record = TournamentRecord::new(seed, rules, games);
        record.save(path)?;
        println!("Tournament record written to {}", path.display());
    }

    Ok(())
}
