//! Minimax search with alpha-beta pruning and a transposition table.
//!
//! A [`Search`] is one session: it optimizes for a single perspective seat
//! and owns a cache that lives exactly as long as the session. Computer
//! players open a fresh session per turn, so memory never accumulates
//! across turns or games.
//!
//! The search is exhaustive with no depth bound. It is only suitable for
//! games whose full state space is small enough to enumerate.

use crate::seat::Seat;
use crate::state::{GameState, LegalMoves};
use derive_getters::Getters;
use derive_setters::Setters;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Switches for the two optimizations layered over plain minimax.
///
/// With both off the engine is the reference exhaustive minimax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters)]
#[setters(prefix = "with_")]
pub struct SearchOptions {
    /// Stop evaluating siblings once `beta <= alpha`.
    pruning: bool,
    /// Reuse exact values for transposed states.
    memoize: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            pruning: true,
            memoize: true,
        }
    }
}

impl SearchOptions {
    /// Plain minimax: no pruning, no memoization.
    pub fn exhaustive() -> Self {
        Self {
            pruning: false,
            memoize: false,
        }
    }
}

/// Counters accumulated over one search session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SearchStats {
    /// Calls to [`Search::minimax`], including cache hits.
    nodes: u64,
    /// Lookups answered from the transposition table.
    cache_hits: u64,
    /// Sibling lists abandoned by an alpha-beta cutoff.
    cutoffs: u64,
}

/// One minimax search session from a fixed perspective.
#[derive(Debug)]
pub struct Search<G: GameState> {
    perspective: Seat,
    options: SearchOptions,
    table: HashMap<(G, bool), i32>,
    stats: SearchStats,
}

impl<G: GameState> Search<G> {
    /// Opens a session optimizing for `perspective` with default options.
    pub fn new(perspective: Seat) -> Self {
        Self::with_options(perspective, SearchOptions::default())
    }

    /// Opens a session with explicit options.
    pub fn with_options(perspective: Seat, options: SearchOptions) -> Self {
        Self {
            perspective,
            options,
            table: HashMap::new(),
            stats: SearchStats::default(),
        }
    }

    /// The seat whose outcome this session maximizes.
    pub fn perspective(&self) -> Seat {
        self.perspective
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Number of memoized `(state, maximizing)` entries.
    pub fn table_len(&self) -> usize {
        self.table.len()
    }

    /// Minimax value of `state` from the session's perspective.
    ///
    /// `maximizing` is true when the node belongs to the perspective seat.
    /// `alpha` is the best value the maximizer can already guarantee and
    /// `beta` the best the minimizer can. A result strictly inside
    /// `(alpha, beta)` is exact; outside it is a bound, which is all the
    /// caller needs to prune. Pass `i32::MIN, i32::MAX` for an exact value.
    pub fn minimax(&mut self, state: &G, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
        self.stats.nodes += 1;

        if self.options.memoize
            && let Some(&value) = self.table.get(&(state.clone(), maximizing))
        {
            self.stats.cache_hits += 1;
            return value;
        }

        if state.is_terminal() {
            let value = state.score(self.perspective);
            self.remember(state, maximizing, value);
            return value;
        }

        let (window_alpha, window_beta) = (alpha, beta);
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for (_, next) in state.legal_moves() {
            let value = self.minimax(&next, !maximizing, alpha, beta);
            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }
            if self.options.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        // Bounds from a cutoff are window-dependent and must not be reused.
        if !self.options.pruning || (window_alpha < best && best < window_beta) {
            self.remember(state, maximizing, best);
        }
        best
    }

    /// Exact minimax value of `state` for the perspective seat.
    pub fn value(&mut self, state: &G) -> i32 {
        let maximizing = state.to_move() == self.perspective;
        self.minimax(state, maximizing, i32::MIN, i32::MAX)
    }

    /// Every legal move from `state` paired with its exact value.
    ///
    /// The perspective seat is expected to be the one to move. Each child
    /// is searched with the full window so equal values are truly equal.
    #[instrument(skip(self, state), fields(perspective = %self.perspective))]
    pub fn ranked_moves(&mut self, state: &G) -> Vec<(G::Move, i32)> {
        debug_assert_eq!(
            state.to_move(),
            self.perspective,
            "ranking moves for a seat that is not to move"
        );

        let ranked: Vec<_> = state
            .legal_moves()
            .into_iter()
            .map(|(mv, next)| {
                let value = self.minimax(&next, false, i32::MIN, i32::MAX);
                (mv, value)
            })
            .collect();

        debug!(
            moves = ranked.len(),
            nodes = self.stats.nodes,
            cache_hits = self.stats.cache_hits,
            cutoffs = self.stats.cutoffs,
            table = self.table.len(),
            "Search complete"
        );
        ranked
    }

    /// All legal moves from `state` that achieve the maximum value.
    ///
    /// Returns every tied move; choosing among them is left to the caller.
    /// Empty when `state` has no legal moves.
    pub fn best_moves(&mut self, state: &G) -> Vec<G::Move> {
        let ranked = self.ranked_moves(state);
        let Some(top) = ranked.iter().map(|(_, value)| *value).max() else {
            return Vec::new();
        };
        ranked
            .into_iter()
            .filter(|(_, value)| *value == top)
            .map(|(mv, _)| mv)
            .collect()
    }

    fn remember(&mut self, state: &G, maximizing: bool, value: i32) {
        if self.options.memoize {
            self.table.insert((state.clone(), maximizing), value);
        }
    }
}
