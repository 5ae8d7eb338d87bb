//! Computer player that picks any legal move.

use super::Strategy;
use crate::error::InvalidMove;
use crate::state::{GameState, LegalMoves};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Chooses uniformly at random among the legal moves, ignoring their quality.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Creates a random strategy seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible random strategy.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GameState> Strategy<G> for RandomStrategy {
    #[instrument(skip(self, state))]
    fn choose_move(&mut self, state: &G) -> Result<G::Move, InvalidMove> {
        let moves: Vec<_> = state.legal_moves().into_iter().map(|(mv, _)| mv).collect();
        let chosen = moves
            .choose(&mut self.rng)
            .cloned()
            .ok_or_else(|| InvalidMove::new("no legal moves to choose from"))?;
        debug!(options = moves.len(), chosen = %chosen, "Random move chosen");
        Ok(chosen)
    }
}
