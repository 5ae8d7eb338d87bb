//! A tiny subtraction game used to exercise the core.
//!
//! A counter starts at some value; each turn subtracts 1 or 2. Whoever
//! brings it to zero wins. `potential_moves` also offers 3, which is never
//! legal, so the legality gate always has something to filter.

#![allow(dead_code)]

use perfect_core::{GameState, InvalidMove, Seat, WinAttribution};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Countdown {
    pub count: u32,
    pub to_move: Seat,
}

impl Countdown {
    pub fn new(count: u32) -> Self {
        Self {
            count,
            to_move: Seat::First,
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} left, {} to move", self.count, self.to_move)
    }
}

impl GameState for Countdown {
    type Move = u32;

    fn to_move(&self) -> Seat {
        self.to_move
    }

    fn potential_moves(&self) -> Vec<u32> {
        vec![1, 2, 3]
    }

    fn apply(&self, mv: &u32) -> Result<Self, InvalidMove> {
        if *mv == 0 || *mv > 2 {
            return Err(InvalidMove::new(format!("cannot subtract {mv}")));
        }
        if *mv > self.count {
            return Err(InvalidMove::new(format!("only {} left", self.count)));
        }
        Ok(Self {
            count: self.count - mv,
            to_move: self.to_move.opponent(),
        })
    }

    fn is_won(&self) -> bool {
        self.count == 0
    }

    fn win_attribution(&self) -> WinAttribution {
        WinAttribution::LastMover
    }
}
