//! Core domain types for tic-tac-toe.

use super::position::Position;
use perfect_core::Seat;
use serde::{Deserialize, Serialize};

/// Mark placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl From<Seat> for Mark {
    fn from(seat: Seat) -> Self {
        match seat {
            Seat::First => Mark::X,
            Seat::Second => Mark::O,
        }
    }
}

impl From<Mark> for Seat {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Seat::First,
            Mark::O => Seat::Second,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// The character drawn for this square.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Mark::X) => 'X',
            Square::Occupied(Mark::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from nine characters in reading order.
    ///
    /// `X` and `O` (either case) place marks, `.` and `_` are empty squares,
    /// and every other character is ignored.
    pub fn from_rows(rows: &str) -> Self {
        let cells = rows
            .chars()
            .map(|c| c.to_ascii_uppercase())
            .filter(|c| matches!(c, 'X' | 'O' | '.' | '_'));

        let mut board = Self::new();
        for (pos, c) in Position::ALL.iter().zip(cells) {
            let square = match c {
                'X' => Square::Occupied(Mark::X),
                'O' => Square::Occupied(Mark::O),
                _ => Square::Empty,
            };
            board = board.with(*pos, square);
        }
        board
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Returns a copy of this board with `pos` set to `square`.
    pub fn with(mut self, pos: Position, square: Square) -> Self {
        self.squares[pos.to_index()] = square;
        self
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let board = Board::from_rows("X.O / .X. / ..O");
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Mark::X));
        assert_eq!(board.get(Position::TopRight), Square::Occupied(Mark::O));
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(board.empty_count(), 5);
        assert_eq!(board.count(Mark::O), 2);
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let board = Board::new();
        let played = board.with(Position::Center, Square::Occupied(Mark::X));
        assert!(board.is_empty(Position::Center));
        assert!(!played.is_empty(Position::Center));
    }

    #[test]
    fn test_seat_mark_mapping() {
        assert_eq!(Mark::from(Seat::First), Mark::X);
        assert_eq!(Seat::from(Mark::O), Seat::Second);
        assert_eq!(Mark::X.opponent(), Mark::O);
    }
}
