//! Named players and the two-seat roster of a match.

use crate::error::InvalidMove;
use crate::players::Strategy;
use crate::seat::Seat;
use crate::state::GameState;
use derive_getters::Getters;
use derive_setters::Setters;
use std::time::Duration;
use strum::IntoEnumIterator;

/// Cosmetic behavior the turn loop runs after a player picks a move.
///
/// Kept outside the strategies so move choice stays pure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct PostSelect {
    /// Emit a move announcement before applying the move.
    announce: bool,
    /// Pause this long before applying the move.
    delay: Duration,
}

/// A named participant with a move-choice strategy.
pub struct Player<G: GameState> {
    name: String,
    strategy: Box<dyn Strategy<G>>,
    post_select: PostSelect,
}

impl<G: GameState> Player<G> {
    /// Creates a player with no post-selection behavior.
    pub fn new(name: impl Into<String>, strategy: impl Strategy<G> + 'static) -> Self {
        Self {
            name: name.into(),
            strategy: Box::new(strategy),
            post_select: PostSelect::default(),
        }
    }

    /// Sets the post-selection behavior.
    pub fn with_post_select(mut self, post_select: PostSelect) -> Self {
        self.post_select = post_select;
        self
    }

    /// Returns the player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the post-selection behavior.
    pub fn post_select(&self) -> PostSelect {
        self.post_select
    }

    /// Asks the strategy for a move.
    ///
    /// # Errors
    ///
    /// Propagates the strategy's [`InvalidMove`].
    pub fn choose_move(&mut self, state: &G) -> Result<G::Move, InvalidMove> {
        self.strategy.choose_move(state)
    }
}

impl<G: GameState> std::fmt::Debug for Player<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("post_select", &self.post_select)
            .finish_non_exhaustive()
    }
}

/// The fixed pair of players for one match or series.
///
/// "The opponent" of a player is the other member of this pair, resolved
/// through seats rather than any global list.
#[derive(Debug)]
pub struct Roster<G: GameState> {
    players: [Player<G>; 2],
}

impl<G: GameState> Roster<G> {
    /// Seats `first` and `second`.
    pub fn new(first: Player<G>, second: Player<G>) -> Self {
        Self {
            players: [first, second],
        }
    }

    /// The player in `seat`.
    pub fn player(&self, seat: Seat) -> &Player<G> {
        &self.players[seat.index()]
    }

    /// Mutable access to the player in `seat`.
    pub fn player_mut(&mut self, seat: Seat) -> &mut Player<G> {
        &mut self.players[seat.index()]
    }

    /// The player facing whoever sits in `seat`.
    pub fn opponent_of(&self, seat: Seat) -> &Player<G> {
        self.player(seat.opponent())
    }

    /// The seat of the player called `name`, if any.
    pub fn seat_of(&self, name: &str) -> Option<Seat> {
        Seat::iter().find(|seat| self.player(*seat).name() == name)
    }

    /// Both player names in seat order.
    pub fn names(&self) -> [&str; 2] {
        [self.players[0].name(), self.players[1].name()]
    }
}
