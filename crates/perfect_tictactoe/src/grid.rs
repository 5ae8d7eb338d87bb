//! The tic-tac-toe game state.

use super::position::Position;
use super::rules::check_winner;
use super::types::{Board, Mark, Square};
use perfect_core::{GameState, InvalidMove, LegalMoves, Seat, WinAttribution};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;
use tracing::instrument;

/// How a finished grid is valued.
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
pub enum Scoring {
    /// The winner scores one plus the number of empty squares, so faster
    /// wins (and slower losses) are preferred.
    #[default]
    Weighted,
    /// The winner scores 1 and the loser -1.
    Unit,
}

/// A tic-tac-toe position together with the mark to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    board: Board,
    to_move: Mark,
    scoring: Scoring,
}

impl Grid {
    /// Creates an empty grid with X to move.
    pub fn new(scoring: Scoring) -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            scoring,
        }
    }

    /// Creates a grid from an arbitrary board.
    ///
    /// The mark to move is derived from the counts: X moves when both
    /// marks have been played equally often.
    pub fn from_board(board: Board, scoring: Scoring) -> Self {
        let to_move = if board.count(Mark::X) == board.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        };
        Self {
            board,
            to_move,
            scoring,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move.
    pub fn mark_to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the scoring convention.
    pub fn scoring(&self) -> Scoring {
        self.scoring
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "     A   B   C")?;
        writeln!(f, "   -------------")?;
        for row in 0..3 {
            let cells: Vec<char> = (0..3)
                .filter_map(|col| Position::from_row_col(row, col))
                .map(|pos| self.board.get(pos).symbol())
                .collect();
            writeln!(f, " {} | {} | {} | {} |", row + 1, cells[0], cells[1], cells[2])?;
            writeln!(f, "   -------------")?;
        }
        Ok(())
    }
}

impl GameState for Grid {
    type Move = Position;

    fn to_move(&self) -> Seat {
        self.to_move.into()
    }

    fn potential_moves(&self) -> Vec<Position> {
        Position::iter().collect()
    }

    #[instrument(level = "trace", skip(self), fields(mark = %self.to_move))]
    fn apply(&self, position: &Position) -> Result<Self, InvalidMove> {
        if check_winner(&self.board).is_some() {
            return Err(InvalidMove::new("the game is already won"));
        }
        if !self.board.is_empty(*position) {
            return Err(InvalidMove::new(format!("{position} is already occupied")));
        }
        Ok(Self {
            board: self.board.with(*position, Square::Occupied(self.to_move)),
            to_move: self.to_move.opponent(),
            scoring: self.scoring,
        })
    }

    fn is_won(&self) -> bool {
        check_winner(&self.board).is_some()
    }

    fn win_attribution(&self) -> WinAttribution {
        WinAttribution::LastMover
    }

    fn score(&self, seat: Seat) -> i32 {
        let magnitude = match self.scoring {
            Scoring::Weighted => 1 + self.board.empty_count() as i32,
            Scoring::Unit => 1,
        };
        match self.winner() {
            Some(winner) if winner == seat => magnitude,
            Some(_) => -magnitude,
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_places_mark_and_passes_turn() {
        let grid = Grid::new(Scoring::Weighted);
        let next = grid.apply(&Position::Center).unwrap();
        assert_eq!(next.board().get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(next.mark_to_move(), Mark::O);
        assert_eq!(next.to_move(), Seat::Second);
        assert!(grid.board().is_empty(Position::Center));
    }

    #[test]
    fn test_occupied_square_is_invalid() {
        let grid = Grid::new(Scoring::Weighted)
            .apply(&Position::Center)
            .unwrap();
        let err = grid.apply(&Position::Center).unwrap_err();
        assert!(err.reason().contains("occupied"));
        assert_eq!(grid.legal_moves().len(), 8);
    }

    #[test]
    fn test_no_moves_after_a_win() {
        let grid = Grid::from_board(Board::from_rows("XXX / OO. / ..."), Scoring::Weighted);
        assert!(grid.is_won());
        assert!(grid.legal_moves().is_empty());
        assert!(!grid.is_tie());
        assert_eq!(grid.winner(), Some(Seat::First));
    }

    #[test]
    fn test_weighted_score_rewards_speed() {
        let grid = Grid::from_board(Board::from_rows("XXX / OO. / ..."), Scoring::Weighted);
        assert_eq!(grid.score(Seat::First), 5);
        assert_eq!(grid.score(Seat::Second), -5);

        let unit = Grid::from_board(*grid.board(), Scoring::Unit);
        assert_eq!(unit.score(Seat::First), 1);
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        let grid = Grid::from_board(Board::from_rows("XOX / XOO / OXX"), Scoring::Weighted);
        assert!(!grid.is_won());
        assert!(grid.is_tie());
        assert_eq!(grid.score(Seat::First), 0);
    }

    #[test]
    fn test_from_board_derives_turn() {
        let grid = Grid::from_board(Board::from_rows("X.. / ... / ..."), Scoring::Unit);
        assert_eq!(grid.mark_to_move(), Mark::O);
    }

    #[test]
    fn test_display_draws_marks() {
        let grid = Grid::from_board(Board::from_rows("X.. / .O. / ..."), Scoring::Unit);
        let drawn = grid.to_string();
        assert!(drawn.contains(" 1 | X |   |   |"));
        assert!(drawn.contains(" 2 |   | O |   |"));
    }
}
