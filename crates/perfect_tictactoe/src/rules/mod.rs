//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board), kept apart from the
//! game-state type so they can be tested on hand-built boards.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::check_winner;
