//! Perfect Core - shared machinery for two-player turn-based games
//!
//! Concrete games implement [`GameState`]; everything else in this crate is
//! generic over that contract.
//!
//! # Architecture
//!
//! - **State**: immutable game values, the legality gate and terminal predicates
//! - **Search**: minimax with alpha-beta pruning and a per-session transposition table
//! - **Players**: human, random and optimal move-choice strategies
//! - **Orchestrator**: the turn-cycling loop that drives a match
//!
//! # Example
//!
//! ```no_run
//! use perfect_core::{GameState, Orchestrator, OptimalStrategy, Player, RandomStrategy, Roster};
//!
//! # fn example<G: GameState + 'static>(initial: G) -> Result<(), perfect_core::PlayError> {
//! let roster = Roster::new(
//!     Player::new("A", OptimalStrategy::new()),
//!     Player::new("B", RandomStrategy::new()),
//! );
//! let mut orchestrator = Orchestrator::new(roster);
//! let report = orchestrator.play(initial)?;
//! println!("{}", report.outcome());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod orchestrator;
mod players;
mod roster;
mod search;
mod seat;
mod state;

// Crate-level exports - Errors
pub use error::{InvalidMove, PlayError};

// Crate-level exports - Game state contract
pub use seat::{Seat, WinAttribution};
pub use state::{GameState, LegalMoves, Phase};

// Crate-level exports - Search engine
pub use search::{Search, SearchOptions, SearchStats};

// Crate-level exports - Players
pub use players::{HumanStrategy, MoveInput, OptimalStrategy, RandomStrategy, Strategy};
pub use roster::{Player, PostSelect, Roster};

// Crate-level exports - Turn loop
pub use orchestrator::{GameEvent, MatchReport, Observer, Orchestrator, Outcome};
