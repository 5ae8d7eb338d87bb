//! Match configuration loaded from TOML or assembled from the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use perfect_core::{SearchOptions, Seat};
use perfect_nim::NimRule;
use perfect_tictactoe::Scoring;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Default number of tokens in a fresh Nim pot.
pub const DEFAULT_POT: u32 = 13;

/// Largest Nim pot accepted.
///
/// The search recurses once per token taken, so its depth grows with the
/// pot; larger pots would exhaust the stack.
pub const MAX_POT: u32 = 10_000;

/// How a seat chooses its moves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StrategyKind {
    /// Moves typed at the console.
    Human,
    /// Uniformly random legal moves.
    Random,
    /// Minimax-optimal moves.
    Optimal,
}

/// Which game to play, and its variant settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GameConfig {
    /// Nim with a single pot.
    Nim {
        /// Tokens in the starting pot.
        #[serde(default = "default_pot")]
        pot: u32,
        /// Whether the last token wins or loses.
        #[serde(default)]
        rule: NimRule,
    },
    /// 3x3 tic-tac-toe.
    TicTacToe {
        /// How wins are valued by the search.
        #[serde(default)]
        scoring: Scoring,
    },
}

fn default_pot() -> u32 {
    DEFAULT_POT
}

fn default_games() -> usize {
    1
}

fn default_true() -> bool {
    true
}

/// Search switches for every optimal player in the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Alpha-beta pruning.
    #[serde(default = "default_true")]
    pruning: bool,
    /// Transposition table.
    #[serde(default = "default_true")]
    memoize: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pruning: true,
            memoize: true,
        }
    }
}

impl From<SearchConfig> for SearchOptions {
    fn from(config: SearchConfig) -> Self {
        SearchOptions::default()
            .with_pruning(config.pruning)
            .with_memoize(config.memoize)
    }
}

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name, also the key of the scoreboard.
    name: String,
    /// Move-choice strategy.
    strategy: StrategyKind,
    /// Announce computer moves before they are applied.
    #[serde(default = "default_true")]
    announce: bool,
    /// Cosmetic pause before a computer move is applied.
    #[serde(default)]
    delay_ms: u64,
}

impl PlayerConfig {
    /// Creates a seat with announcements on and no delay.
    pub fn new(name: impl Into<String>, strategy: StrategyKind) -> Self {
        Self {
            name: name.into(),
            strategy,
            announce: true,
            delay_ms: 0,
        }
    }
}

/// Everything needed to run a series of games.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct PlayConfig {
    /// Number of games in the series.
    #[serde(default = "default_games")]
    games: usize,
    /// Base seed for computer strategies; each seat adds its index.
    #[serde(default)]
    seed: Option<u64>,
    /// Bound on consecutive invalid moves by one player.
    #[serde(default)]
    retry_limit: Option<usize>,
    /// The game and its variant.
    game: GameConfig,
    /// Search switches.
    #[serde(default)]
    search: SearchConfig,
    /// Exactly two seats, first mover first.
    #[setters(skip)]
    players: Vec<PlayerConfig>,
}

impl PlayConfig {
    /// Creates a single-game configuration for two seats.
    pub fn new(game: GameConfig, first: PlayerConfig, second: PlayerConfig) -> Self {
        Self {
            games: default_games(),
            seed: None,
            retry_limit: None,
            game,
            search: SearchConfig::default(),
            players: vec![first, second],
        }
    }

    /// Loads and validates a configuration file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config: Self = content.parse()?;
        info!(game = ?config.game, games = config.games, "Config loaded successfully");
        Ok(config)
    }

    /// Checks the rules serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.len() != 2 {
            return Err(ConfigError::new(format!(
                "Exactly two players are required, found {}",
                self.players.len()
            )));
        }
        if self.players[0].name == self.players[1].name {
            return Err(ConfigError::new(format!(
                "Player names must differ, both are '{}'",
                self.players[0].name
            )));
        }
        if self.games == 0 {
            return Err(ConfigError::new("At least one game must be played"));
        }
        if let GameConfig::Nim { pot, .. } = self.game
            && pot > MAX_POT
        {
            return Err(ConfigError::new(format!(
                "A pot of {pot} tokens is too deep to search, the limit is {MAX_POT}"
            )));
        }
        Ok(())
    }

    /// The configuration of the given seat.
    ///
    /// Only meaningful on a validated configuration.
    pub fn player(&self, seat: Seat) -> &PlayerConfig {
        &self.players[seat.index()]
    }

    /// Seed for the computer strategy in `seat`, if seeding is configured.
    pub fn seat_seed(&self, seat: Seat) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(seat.index() as u64))
    }
}

impl FromStr for PlayConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Self = toml::from_str(s)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
