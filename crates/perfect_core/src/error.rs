//! Error types for the game core.

use derive_more::{Display, Error};

/// A candidate move that does not conform to the rules at the current state.
///
/// This is the only failure a state transition can produce. The legality
/// gate swallows it per candidate; the turn loop swallows it per attempt and
/// retries the same turn.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid move: {} at {}:{}", reason, file, line)]
pub struct InvalidMove {
    /// Why the move was rejected.
    pub reason: String,
    /// Line number where the move was rejected.
    pub line: u32,
    /// Source file where the move was rejected.
    pub file: &'static str,
    /// The move source has no more input to offer.
    pub closed: bool,
}

impl InvalidMove {
    /// Creates a new invalid-move error at the caller's location.
    #[track_caller]
    pub fn new(reason: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            reason: reason.into(),
            line: loc.line(),
            file: loc.file(),
            closed: false,
        }
    }

    /// Creates the error a move source reports once its input has ended.
    ///
    /// The turn loop stops the game on it instead of asking again.
    #[track_caller]
    pub fn input_closed() -> Self {
        Self {
            closed: true,
            ..Self::new("input closed")
        }
    }

    /// True if the move source has no more input.
    pub fn is_input_closed(&self) -> bool {
        self.closed
    }

    /// Returns the rejection reason without location information.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Errors raised by the turn loop.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PlayError {
    /// A player exceeded the configured bound on consecutive invalid moves.
    #[display("{player} made {attempts} consecutive invalid moves")]
    RetriesExhausted {
        /// Name of the offending player.
        player: String,
        /// Number of consecutive rejected attempts.
        attempts: usize,
    },
    /// A player's move source ran out of input.
    #[display("{player} has no more input")]
    InputClosed {
        /// Name of the player whose input closed.
        player: String,
    },
}
