//! Human player backed by an external input collaborator.

use super::Strategy;
use crate::error::InvalidMove;
use crate::state::GameState;
use tracing::{debug, instrument};

/// Source of human move candidates (console, UI, network...).
///
/// A request blocks until input arrives. Malformed input is reported as
/// [`InvalidMove`] and handled exactly like an illegal move.
pub trait MoveInput<G: GameState> {
    /// Requests one move candidate for `state`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the input cannot be understood as a move.
    fn request_move(&mut self, state: &G) -> Result<G::Move, InvalidMove>;
}

/// Human player using an input collaborator.
pub struct HumanStrategy<G: GameState> {
    input: Box<dyn MoveInput<G>>,
}

impl<G: GameState> HumanStrategy<G> {
    /// Creates a new human strategy reading from `input`.
    pub fn new(input: impl MoveInput<G> + 'static) -> Self {
        Self {
            input: Box::new(input),
        }
    }
}

impl<G: GameState> Strategy<G> for HumanStrategy<G> {
    #[instrument(skip(self, state))]
    fn choose_move(&mut self, state: &G) -> Result<G::Move, InvalidMove> {
        debug!("Waiting for human input");
        self.input.request_move(state)
    }
}

impl<G: GameState> std::fmt::Debug for HumanStrategy<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HumanStrategy").finish_non_exhaustive()
    }
}
