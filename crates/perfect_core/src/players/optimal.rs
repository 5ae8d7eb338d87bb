//! Computer player that plays a minimax-optimal move.

use super::Strategy;
use crate::error::InvalidMove;
use crate::search::{Search, SearchOptions};
use crate::state::GameState;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Searches the full game tree each turn and picks uniformly among the
/// moves with the best value, so repeated games need not repeat.
#[derive(Debug, Clone)]
pub struct OptimalStrategy {
    rng: StdRng,
    options: SearchOptions,
}

impl OptimalStrategy {
    /// Creates an optimal strategy seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            options: SearchOptions::default(),
        }
    }

    /// Creates a reproducible optimal strategy.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            options: SearchOptions::default(),
        }
    }

    /// Replaces the search options used for every turn.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }
}

impl Default for OptimalStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GameState> Strategy<G> for OptimalStrategy {
    #[instrument(skip(self, state), fields(seat = %state.to_move()))]
    fn choose_move(&mut self, state: &G) -> Result<G::Move, InvalidMove> {
        // One session per turn keeps the cache scoped to this decision.
        let mut search = Search::with_options(state.to_move(), self.options);
        let best = search.best_moves(state);
        let chosen = best
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| InvalidMove::new("no legal moves to choose from"))?;
        debug!(candidates = best.len(), chosen = %chosen, "Optimal move chosen");
        Ok(chosen)
    }
}
