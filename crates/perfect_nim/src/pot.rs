//! The pot of tokens and the take move.

use perfect_core::{GameState, InvalidMove, Seat, WinAttribution};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Largest number of tokens a single turn may take.
pub const MAX_TAKE: u32 = 3;

/// Which player an empty pot credits.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NimRule {
    /// Taking the last token wins.
    #[default]
    Normal,
    /// Taking the last token loses.
    Misere,
}

impl NimRule {
    fn attribution(self) -> WinAttribution {
        match self {
            NimRule::Normal => WinAttribution::LastMover,
            NimRule::Misere => WinAttribution::PlayerToMove,
        }
    }
}

/// Number of tokens to take from the pot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::From,
)]
#[display("{_0}")]
pub struct Take(pub u32);

impl FromStr for Take {
    type Err = InvalidMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let take = s
            .trim()
            .parse::<u32>()
            .map_err(|_| InvalidMove::new(format!("'{}' is not a number of tokens", s.trim())))?;
        if !(1..=MAX_TAKE).contains(&take) {
            return Err(InvalidMove::new(format!(
                "take 1 to {MAX_TAKE} tokens, not {take}"
            )));
        }
        Ok(Take(take))
    }
}

/// The pot in the game of Nim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pot {
    count: u32,
    to_move: Seat,
    rule: NimRule,
}

impl Pot {
    /// Creates a pot of `count` tokens with the first seat to move.
    pub fn new(count: u32, rule: NimRule) -> Self {
        Self {
            count,
            to_move: Seat::First,
            rule,
        }
    }

    /// Tokens remaining.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The rule this pot is played under.
    pub fn rule(&self) -> NimRule {
        self.rule
    }
}

impl fmt::Display for Pot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.count == 1 { "token" } else { "tokens" };
        write!(f, "The pot now has {} {}", self.count, noun)
    }
}

impl GameState for Pot {
    type Move = Take;

    fn to_move(&self) -> Seat {
        self.to_move
    }

    fn potential_moves(&self) -> Vec<Take> {
        (1..=MAX_TAKE).map(Take).collect()
    }

    #[instrument(level = "trace", skip(self), fields(count = self.count))]
    fn apply(&self, take: &Take) -> Result<Self, InvalidMove> {
        let Take(n) = *take;
        if n == 0 || n > MAX_TAKE {
            return Err(InvalidMove::new(format!("take 1 to {MAX_TAKE} tokens, not {n}")));
        }
        if n > self.count {
            return Err(InvalidMove::new(format!(
                "cannot take {n} from a pot of {}",
                self.count
            )));
        }
        Ok(Self {
            count: self.count - n,
            to_move: self.to_move.opponent(),
            rule: self.rule,
        })
    }

    fn is_won(&self) -> bool {
        self.count == 0
    }

    fn win_attribution(&self) -> WinAttribution {
        self.rule.attribution()
    }
}
