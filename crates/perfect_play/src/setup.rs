//! Turns a [`PlayConfig`] into seated players and runs the series.

use crate::config::{GameConfig, PlayConfig, PlayerConfig, StrategyKind};
use crate::console::{ConsoleInput, ConsoleObserver, Narrate};
use crate::series::{Scoreboard, play_series};
use perfect_core::{
    HumanStrategy, InvalidMove, OptimalStrategy, Orchestrator, PlayError, Player, PostSelect,
    RandomStrategy, Roster, SearchOptions, Seat,
};
use perfect_nim::Pot;
use perfect_tictactoe::Grid;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, instrument};

/// Builds the player for one seat.
///
/// Humans read from stdin and never announce their own moves. Computer
/// players are seeded from the configuration when a seed is set.
pub fn build_player<G>(config: &PlayConfig, seat: Seat) -> Player<G>
where
    G: Narrate + 'static,
    G::Move: FromStr<Err = InvalidMove>,
{
    let seat_config: &PlayerConfig = config.player(seat);
    let name = seat_config.name().clone();
    let seed = config.seat_seed(seat);

    let (player, computer) = match seat_config.strategy() {
        StrategyKind::Human => {
            let input = ConsoleInput::stdin(name.clone());
            (Player::new(name, HumanStrategy::new(input)), false)
        }
        StrategyKind::Random => {
            let strategy = seed.map(RandomStrategy::seeded).unwrap_or_default();
            (Player::new(name, strategy), true)
        }
        StrategyKind::Optimal => {
            let strategy = seed
                .map(OptimalStrategy::seeded)
                .unwrap_or_default()
                .with_options(SearchOptions::from(*config.search()));
            (Player::new(name, strategy), true)
        }
    };

    if !computer {
        return player;
    }
    player.with_post_select(
        PostSelect::default()
            .with_announce(*seat_config.announce())
            .with_delay(Duration::from_millis(*seat_config.delay_ms())),
    )
}

/// Builds both seats.
pub fn build_roster<G>(config: &PlayConfig) -> Roster<G>
where
    G: Narrate + 'static,
    G::Move: FromStr<Err = InvalidMove>,
{
    Roster::new(
        build_player(config, Seat::First),
        build_player(config, Seat::Second),
    )
}

/// Plays the configured series from `initial`.
///
/// # Errors
///
/// Returns [`PlayError`] if a player exhausts the retry limit.
pub fn run_series<G>(config: &PlayConfig, initial: G, display: bool) -> Result<Scoreboard, PlayError>
where
    G: Narrate + 'static,
    G::Move: FromStr<Err = InvalidMove>,
{
    let mut orchestrator = Orchestrator::new(build_roster(config))
        .with_retry_limit(*config.retry_limit());
    if display {
        orchestrator = orchestrator.with_observer(ConsoleObserver::stdout());
    }
    play_series(&mut orchestrator, &initial, *config.games())
}

/// Plays the series described by `config`.
///
/// With `display` off nothing is written to stdout by the games.
///
/// # Errors
///
/// Returns [`PlayError`] if a player exhausts the retry limit.
#[instrument(skip(config, display), fields(game = ?config.game(), games = config.games()))]
pub fn run(config: &PlayConfig, display: bool) -> Result<Scoreboard, PlayError> {
    let scoreboard = match *config.game() {
        GameConfig::Nim { pot, rule } => run_series(config, Pot::new(pot, rule), display)?,
        GameConfig::TicTacToe { scoring } => run_series(config, Grid::new(scoring), display)?,
    };
    info!(%scoreboard, "Series complete");
    Ok(scoreboard)
}
