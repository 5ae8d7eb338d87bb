//! Strategy trait and implementations.

mod human;
mod optimal;
mod random;

pub use human::{HumanStrategy, MoveInput};
pub use optimal::OptimalStrategy;
pub use random::RandomStrategy;

use crate::error::InvalidMove;
use crate::state::GameState;

/// A move-choice policy.
pub trait Strategy<G: GameState> {
    /// Proposes the next move for the seat to move in `state`.
    ///
    /// The proposal is not trusted: the turn loop applies it and retries
    /// the turn if it fails.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] when no move can be proposed (malformed
    /// human input, or no legal moves).
    fn choose_move(&mut self, state: &G) -> Result<G::Move, InvalidMove>;
}

impl<G: GameState, S: Strategy<G> + ?Sized> Strategy<G> for Box<S> {
    fn choose_move(&mut self, state: &G) -> Result<G::Move, InvalidMove> {
        (**self).choose_move(state)
    }
}
