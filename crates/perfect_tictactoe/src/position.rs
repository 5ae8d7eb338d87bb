//! Board positions and their console notation.

use perfect_core::InvalidMove;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A position on the tic-tac-toe board (0-8, reading order).
///
/// Columns are lettered A-C from the left and rows numbered 1-3 from the
/// top, so `TopLeft` is A1 and `BottomRight` is C3.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (A1)
    TopLeft,
    /// Top-center (B1)
    TopCenter,
    /// Top-right (C1)
    TopRight,
    /// Middle-left (A2)
    MiddleLeft,
    /// Center (B2)
    Center,
    /// Middle-right (C2)
    MiddleRight,
    /// Bottom-left (A3)
    BottomLeft,
    /// Bottom-center (B3)
    BottomCenter,
    /// Bottom-right (C3)
    BottomRight,
}

impl Position {
    /// All 9 positions in reading order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from zero-based row and column.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Zero-based row (0 = top).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column (0 = left).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Column letter and row number, e.g. `B2`.
    pub fn coordinate(self) -> String {
        let letter = char::from(b'A' + self.col() as u8);
        format!("{}{}", letter, self.row() + 1)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.coordinate())
    }
}

impl FromStr for Position {
    type Err = InvalidMove;

    /// Parses `A1`, `1A` (case-insensitive) or a single digit 1-9 in
    /// reading order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entry = s.trim().to_ascii_uppercase();
        let chars: Vec<char> = entry.chars().collect();

        let parsed = match chars.as_slice() {
            [digit @ '1'..='9'] => Self::from_index(*digit as usize - '1' as usize),
            [col @ 'A'..='C', row @ '1'..='3'] | [row @ '1'..='3', col @ 'A'..='C'] => {
                Self::from_row_col(*row as usize - '1' as usize, *col as usize - 'A' as usize)
            }
            _ => None,
        };

        parsed.ok_or_else(|| {
            InvalidMove::new(format!(
                "'{}' is not a square; specify your move in the form of A1 or 1A",
                s.trim()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_parse_column_first_and_row_first() {
        assert_eq!("A1".parse::<Position>().unwrap(), Position::TopLeft);
        assert_eq!("3c".parse::<Position>().unwrap(), Position::BottomRight);
        assert_eq!(" b2 ".parse::<Position>().unwrap(), Position::Center);
        assert_eq!("2A".parse::<Position>().unwrap(), Position::MiddleLeft);
    }

    #[test]
    fn test_parse_reading_order_digit() {
        assert_eq!("1".parse::<Position>().unwrap(), Position::TopLeft);
        assert_eq!("6".parse::<Position>().unwrap(), Position::MiddleRight);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "D1", "A4", "0", "A1B", "center"] {
            assert!(bad.parse::<Position>().is_err(), "{bad:?}");
        }
    }

    #[test]
    fn test_coordinate_display() {
        assert_eq!(Position::TopRight.to_string(), "C1");
        assert_eq!(Position::BottomCenter.to_string(), "B3");
    }
}
