//! The game-state contract and the operations derived from it.

use crate::error::InvalidMove;
use crate::seat::{Seat, WinAttribution};
use std::fmt;
use std::hash::Hash;

/// One immutable configuration of a two-player, perfect-information,
/// zero-sum game, including whose turn it is.
///
/// Equality and hashing must cover the whole payload and the turn identity:
/// the search engine memoizes on them.
pub trait GameState: Clone + Eq + Hash + fmt::Debug + fmt::Display {
    /// Game-specific description of an action.
    type Move: Clone + PartialEq + fmt::Debug + fmt::Display;

    /// The seat whose turn it is.
    fn to_move(&self) -> Seat;

    /// Every syntactically conceivable move, legal or not.
    fn potential_moves(&self) -> Vec<Self::Move>;

    /// Produces the successor state without touching `self`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the move breaks the rules in this state.
    fn apply(&self, mv: &Self::Move) -> Result<Self, InvalidMove>;

    /// True iff this state is a terminal win under the game's rules.
    fn is_won(&self) -> bool;

    /// Which player a won state credits with the win.
    fn win_attribution(&self) -> WinAttribution;

    /// Terminal value from `seat`'s perspective; positive favors `seat`.
    ///
    /// Only meaningful on terminal states. Must satisfy
    /// `score(First) == -score(Second)`. The default awards ±1 to the
    /// winner and loser and 0 to a tie.
    fn score(&self, seat: Seat) -> i32 {
        match self.winner() {
            Some(winner) if winner == seat => 1,
            Some(_) => -1,
            None => 0,
        }
    }
}

/// Operations derived from [`GameState`].
///
/// Blanket-implemented for every game so the legality gate cannot be
/// overridden.
pub trait LegalMoves: GameState {
    /// Every `(move, successor)` pair whose move applies successfully.
    fn legal_moves(&self) -> Vec<(Self::Move, Self)>;

    /// True iff not won and no legal move remains.
    fn is_tie(&self) -> bool;

    /// True iff won or tied.
    fn is_terminal(&self) -> bool;

    /// The winning seat, if this state is won.
    fn winner(&self) -> Option<Seat>;

    /// The turn-loop phase this state is in.
    fn phase(&self) -> Phase;
}

impl<G: GameState> LegalMoves for G {
    fn legal_moves(&self) -> Vec<(G::Move, G)> {
        self.potential_moves()
            .into_iter()
            .filter_map(|mv| self.apply(&mv).ok().map(|next| (mv, next)))
            .collect()
    }

    fn is_tie(&self) -> bool {
        !self.is_won() && self.legal_moves().is_empty()
    }

    fn is_terminal(&self) -> bool {
        self.is_won() || self.is_tie()
    }

    fn winner(&self) -> Option<Seat> {
        self.is_won()
            .then(|| self.win_attribution().winner(self.to_move()))
    }

    fn phase(&self) -> Phase {
        if let Some(winner) = self.winner() {
            Phase::Won(winner)
        } else if self.is_tie() {
            Phase::Tied
        } else {
            Phase::InProgress
        }
    }
}

/// State of the turn-cycling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Moves remain and nobody has won.
    InProgress,
    /// The game ended in a win for the given seat.
    Won(Seat),
    /// The game ended with no legal moves and no winner.
    Tied,
}
