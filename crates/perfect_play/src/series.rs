//! Consecutive games with the same roster, and their tally.

use derive_getters::Getters;
use perfect_core::{GameState, Orchestrator, Outcome, PlayError};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{info, instrument};

/// Wins per player name and ties over a series.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Scoreboard {
    /// Games recorded.
    games: usize,
    /// Wins keyed by player name.
    wins: BTreeMap<String, usize>,
    /// Games without a winner.
    ties: usize,
}

impl Scoreboard {
    /// Creates an empty tally listing both players.
    pub fn new(names: [&str; 2]) -> Self {
        Self {
            games: 0,
            wins: names.iter().map(|name| (name.to_string(), 0)).collect(),
            ties: 0,
        }
    }

    /// Counts one finished game.
    pub fn record(&mut self, outcome: &Outcome) {
        self.games += 1;
        match outcome.winner_name() {
            Some(name) => *self.wins.entry(name.to_string()).or_default() += 1,
            None => self.ties += 1,
        }
    }

    /// Wins credited to `name`.
    pub fn wins_for(&self, name: &str) -> usize {
        self.wins.get(name).copied().unwrap_or(0)
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.games == 1 { "game" } else { "games" };
        write!(f, "After {} {}:", self.games, noun)?;
        for (name, wins) in &self.wins {
            write!(f, " {name} {wins},")?;
        }
        write!(f, " ties {}", self.ties)
    }
}

/// Plays `games` games from the same starting state.
///
/// Strategies keep their random state between games, so seeded series are
/// reproducible without every game being identical.
///
/// # Errors
///
/// Stops at the first [`PlayError`].
#[instrument(skip(orchestrator, initial))]
pub fn play_series<G: GameState>(
    orchestrator: &mut Orchestrator<G>,
    initial: &G,
    games: usize,
) -> Result<Scoreboard, PlayError> {
    let mut scoreboard = Scoreboard::new(orchestrator.roster().names());
    for game in 1..=games {
        let report = orchestrator.play(initial.clone())?;
        info!(game, outcome = %report.outcome(), turns = report.turns(), "Game finished");
        scoreboard.record(report.outcome());
    }
    Ok(scoreboard)
}
