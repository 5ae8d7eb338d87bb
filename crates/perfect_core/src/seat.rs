//! Turn identity shared by every two-player game.

use serde::{Deserialize, Serialize};

/// One of the two places at the table.
///
/// A game state only knows which seat is to move; the roster maps seats to
/// named players.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Seat {
    /// The player who moves first.
    First,
    /// The player who moves second.
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Returns the roster index of this seat (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// Which player a won state credits with the win.
///
/// Every game declares this explicitly. Getting it backwards reports the
/// wrong winner without any error, so it is never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinAttribution {
    /// The player who made the move that produced the winning state.
    LastMover,
    /// The player whose turn it is in the winning state.
    PlayerToMove,
}

impl WinAttribution {
    /// Resolves the winning seat given the seat to move in the won state.
    pub fn winner(self, to_move: Seat) -> Seat {
        match self {
            WinAttribution::LastMover => to_move.opponent(),
            WinAttribution::PlayerToMove => to_move,
        }
    }
}
