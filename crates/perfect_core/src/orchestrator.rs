//! Game orchestration between players.

use crate::error::PlayError;
use crate::roster::Roster;
use crate::seat::Seat;
use crate::state::{GameState, LegalMoves, Phase};
use derive_getters::Getters;
use derive_new::new;
use std::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from the orchestrator to display collaborators.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent<G: GameState> {
    /// A new state is in play (the initial state, or after a transition).
    StateChanged(G),
    /// A player announced the move it is about to make.
    MoveAnnounced {
        /// Name of the announcing player.
        player: String,
        /// The announced move.
        mv: G::Move,
    },
    /// The game reached a terminal state.
    GameOver(Outcome),
}

/// Receiver of game events.
pub trait Observer<G: GameState> {
    /// Handles one event.
    fn notify(&mut self, event: &GameEvent<G>);
}

impl<G: GameState> Observer<G> for mpsc::Sender<GameEvent<G>> {
    fn notify(&mut self, event: &GameEvent<G>) {
        if self.send(event.clone()).is_err() {
            warn!("Event receiver dropped");
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Outcome {
    /// One player won.
    #[display("{name} wins")]
    Winner {
        /// The winning seat.
        seat: Seat,
        /// The winning player's name.
        name: String,
    },
    /// Nobody won.
    #[display("Tie game")]
    Tie,
}

impl Outcome {
    /// The winning player's name, if any.
    pub fn winner_name(&self) -> Option<&str> {
        match self {
            Outcome::Winner { name, .. } => Some(name),
            Outcome::Tie => None,
        }
    }
}

/// Summary of one completed game.
#[derive(Debug, Clone, Getters, new)]
pub struct MatchReport<G: GameState> {
    /// How the game ended.
    outcome: Outcome,
    /// The terminal state.
    final_state: G,
    /// Number of moves applied.
    turns: usize,
    /// Number of proposals rejected as invalid.
    rejected: usize,
}

/// Drives games between the two players of a roster.
pub struct Orchestrator<G: GameState> {
    roster: Roster<G>,
    observers: Vec<Box<dyn Observer<G>>>,
    retry_limit: Option<usize>,
}

impl<G: GameState> Orchestrator<G> {
    /// Creates an orchestrator with unlimited retries and no observers.
    pub fn new(roster: Roster<G>) -> Self {
        Self {
            roster,
            observers: Vec::new(),
            retry_limit: None,
        }
    }

    /// Adds a display collaborator.
    pub fn with_observer(mut self, observer: impl Observer<G> + 'static) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Bounds how many consecutive invalid proposals one player may make.
    pub fn with_retry_limit(mut self, limit: Option<usize>) -> Self {
        self.retry_limit = limit;
        self
    }

    /// The players of this orchestrator.
    pub fn roster(&self) -> &Roster<G> {
        &self.roster
    }

    /// Plays one game from `initial` to a terminal state.
    ///
    /// Invalid proposals leave the state and turn untouched and are not
    /// displayed; the same player is asked again.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::RetriesExhausted`] only if a retry limit is set
    /// and a player exceeds it, and [`PlayError::InputClosed`] if a player's
    /// move source reports that its input has ended.
    #[instrument(skip(self, initial), fields(players = ?self.roster.names()))]
    pub fn play(&mut self, initial: G) -> Result<MatchReport<G>, PlayError> {
        info!("Starting game");

        let mut state = initial;
        let mut turns = 0;
        let mut rejected = 0;
        let mut consecutive = 0;
        self.emit(&GameEvent::StateChanged(state.clone()));

        loop {
            let outcome = match state.phase() {
                Phase::InProgress => None,
                Phase::Won(seat) => Some(Outcome::Winner {
                    seat,
                    name: self.roster.player(seat).name().to_string(),
                }),
                Phase::Tied => Some(Outcome::Tie),
            };
            if let Some(outcome) = outcome {
                info!(%outcome, turns, rejected, "Game over");
                self.emit(&GameEvent::GameOver(outcome.clone()));
                return Ok(MatchReport::new(outcome, state, turns, rejected));
            }

            let seat = state.to_move();
            let player = self.roster.player_mut(seat);
            let name = player.name().to_string();
            let post_select = player.post_select();

            debug!(player = %name, %seat, "Waiting for move");
            let next = player
                .choose_move(&state)
                .and_then(|mv| Ok((state.apply(&mv)?, mv)));

            let (next, mv) = match next {
                Ok(accepted) => accepted,
                Err(err) if err.is_input_closed() => {
                    warn!(player = %name, "Move source closed");
                    return Err(PlayError::InputClosed { player: name });
                }
                Err(err) => {
                    rejected += 1;
                    consecutive += 1;
                    warn!(player = %name, reason = err.reason(), "Move rejected");
                    if let Some(limit) = self.retry_limit
                        && consecutive > limit
                    {
                        return Err(PlayError::RetriesExhausted {
                            player: name,
                            attempts: consecutive,
                        });
                    }
                    continue;
                }
            };

            if *post_select.announce() {
                self.emit(&GameEvent::MoveAnnounced {
                    player: name.clone(),
                    mv: mv.clone(),
                });
            }
            if !post_select.delay().is_zero() {
                std::thread::sleep(*post_select.delay());
            }

            info!(player = %name, mv = %mv, "Move applied");
            state = next;
            turns += 1;
            consecutive = 0;
            self.emit(&GameEvent::StateChanged(state.clone()));
        }
    }

    fn emit(&mut self, event: &GameEvent<G>) {
        for observer in &mut self.observers {
            observer.notify(event);
        }
    }
}

impl<G: GameState> std::fmt::Debug for Orchestrator<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("roster", &self.roster)
            .field("observers", &self.observers.len())
            .field("retry_limit", &self.retry_limit)
            .finish()
    }
}
