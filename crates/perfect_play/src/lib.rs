//! Perfect Play - console front end for the perfect_core games
//!
//! Seats humans and computer players at Nim or tic-tac-toe, runs a series
//! of games and tallies the results.
//!
//! # Architecture
//!
//! - **Config**: TOML match description and its validation
//! - **CLI**: clap subcommands that produce the same configuration
//! - **Console**: board display and line-based human input
//! - **Series**: repeated games and the scoreboard

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod series;
mod setup;

// Crate-level exports
pub use cli::{Cli, Command};
pub use config::{
    ConfigError, DEFAULT_POT, GameConfig, MAX_POT, PlayConfig, PlayerConfig,
    SearchConfig, StrategyKind,
};
pub use console::{ConsoleInput, ConsoleObserver, Narrate, ReadLine};
pub use series::{Scoreboard, play_series};
pub use setup::{build_player, build_roster, run, run_series};
