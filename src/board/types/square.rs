//! Square types and utilities.
//!
//! Rows and columns are 1-based: row 1 is White's back rank, column 1 is the
//! a-file. A `Square` can only hold on-board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Returns true iff `(row, col)` lies on the 8x8 board.
#[inline]
#[must_use]
pub const fn is_inside(row: isize, col: isize) -> bool {
    row >= 1 && row <= 8 && col >= 1 && col <= 8
}

/// A square on the chess board, represented as (row, col).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "(u8, u8)", into = "(u8, u8)"))]
pub struct Square(u8, u8);

impl Square {
    /// All 64 squares in row-major order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=8u8).flat_map(|row| (1..=8u8).map(move |col| Square(row, col)))
    }

    /// Create a new square with bounds checking
    #[must_use]
    pub const fn new(row: isize, col: isize) -> Option<Self> {
        if is_inside(row, col) {
            Some(Square(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Get the row (1-8, where 1 = rank 1)
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0
    }

    /// Get the column (1-8, where 1 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.1
    }

    /// Step by `(dr, dc)`, or `None` if that leaves the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        Square::new(self.0 as isize + dr, self.1 as isize + dc)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        (self.0 as usize - 1) * 8 + (self.1 as usize - 1)
    }

    /// Encode as a display-cell id: `b` + row + `0` + col, e.g. `(3, 7)` -> `b307`.
    #[must_use]
    pub fn to_id(self) -> String {
        format!("b{}0{}", self.0, self.1)
    }

    /// Decode a display-cell id produced by [`Square::to_id`].
    pub fn from_id(id: &str) -> Result<Self, SquareError> {
        let invalid = || SquareError::InvalidId { id: id.to_string() };
        let digits = id.strip_prefix('b').ok_or_else(invalid)?;
        if digits.len() != 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let bytes = digits.as_bytes();
        if bytes[1] != b'0' {
            return Err(invalid());
        }
        let row = (bytes[0] - b'0') as isize;
        let col = (bytes[2] - b'0') as isize;
        Square::new(row, col).ok_or_else(invalid)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 - 1 + b'a') as char, self.0)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Row-major, a1 first
        self.index().cmp(&other.index())
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        if !(1..=8).contains(&row) {
            return Err(SquareError::RowOutOfBounds { row: row as isize });
        }
        if !(1..=8).contains(&col) {
            return Err(SquareError::ColOutOfBounds { col: col as isize });
        }
        Ok(Square(row, col))
    }
}

impl From<Square> for (u8, u8) {
    fn from(sq: Square) -> Self {
        (sq.0, sq.1)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(invalid());
        }

        let col = match chars[0] {
            'a'..='h' => chars[0] as u8 - b'a' + 1,
            _ => return Err(invalid()),
        };
        let row = match chars[1] {
            '1'..='8' => chars[1] as u8 - b'0',
            _ => return Err(invalid()),
        };

        Ok(Square(row, col))
    }
}
