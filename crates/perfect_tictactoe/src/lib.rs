//! Tic-tac-toe on a 3x3 grid.
//!
//! X always sits in the first seat. A win is credited to the player who
//! completed the line.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod grid;
mod position;
mod rules;
mod types;

pub use grid::{Grid, Scoring};
pub use position::Position;
pub use rules::{check_winner, is_full};
pub use types::{Board, Mark, Square};
