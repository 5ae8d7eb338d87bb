//! Command-line interface for perfect_play.

use crate::config::{ConfigError, DEFAULT_POT, GameConfig, PlayConfig, PlayerConfig, StrategyKind};
use clap::{Parser, Subcommand};
use perfect_nim::NimRule;
use perfect_tictactoe::Scoring;
use std::path::PathBuf;
use tracing::instrument;

/// Perfect Play - two-player games against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "perfect_play")]
#[command(about = "Play Nim and tic-tac-toe against perfect computer opponents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Number of games to play in a row
    #[arg(long, global = true)]
    pub games: Option<usize>,

    /// Seed for the computer players' random choices
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Consecutive invalid moves allowed before a game is abandoned
    #[arg(long, global = true)]
    pub retry_limit: Option<usize>,

    /// Print only the final tally, as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play Nim: take 1-3 tokens per turn from a shared pot
    Nim {
        /// Tokens in the starting pot
        #[arg(long, default_value_t = DEFAULT_POT)]
        pot: u32,

        /// Whether taking the last token wins (normal) or loses (misere)
        #[arg(long, default_value_t = NimRule::Normal)]
        rule: NimRule,

        /// Strategy of player A, who moves first
        #[arg(long, default_value_t = StrategyKind::Human)]
        first: StrategyKind,

        /// Strategy of player B
        #[arg(long, default_value_t = StrategyKind::Optimal)]
        second: StrategyKind,
    },

    /// Play tic-tac-toe; X moves first
    #[command(name = "tictactoe")]
    TicTacToe {
        /// How the search values a win (weighted prefers faster wins)
        #[arg(long, default_value_t = Scoring::Weighted)]
        scoring: Scoring,

        /// Strategy of X
        #[arg(long, default_value_t = StrategyKind::Human)]
        first: StrategyKind,

        /// Strategy of O
        #[arg(long, default_value_t = StrategyKind::Optimal)]
        second: StrategyKind,
    },

    /// Play the match described by a TOML file
    Run {
        /// Path to the match configuration
        #[arg(short, long, default_value = "perfect_play.toml")]
        config: PathBuf,
    },
}

impl Cli {
    /// Resolves the command and global flags into one validated configuration.
    ///
    /// Global flags override the values of a loaded file.
    #[instrument(skip(self))]
    pub fn into_config(self) -> Result<PlayConfig, ConfigError> {
        let mut config = match self.command {
            Command::Nim {
                pot,
                rule,
                first,
                second,
            } => PlayConfig::new(
                GameConfig::Nim { pot, rule },
                PlayerConfig::new("A", first),
                PlayerConfig::new("B", second),
            ),
            Command::TicTacToe {
                scoring,
                first,
                second,
            } => PlayConfig::new(
                GameConfig::TicTacToe { scoring },
                PlayerConfig::new("X", first),
                PlayerConfig::new("O", second),
            ),
            Command::Run { config } => PlayConfig::from_file(config)?,
        };

        if let Some(games) = self.games {
            config = config.with_games(games);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(Some(seed));
        }
        if let Some(limit) = self.retry_limit {
            config = config.with_retry_limit(Some(limit));
        }
        config.validate()?;
        Ok(config)
    }
}
