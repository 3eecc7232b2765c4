//! Error types for board ingestion and move application.
//!
//! Rule queries themselves never fail; these only come from parsing boundary
//! data and from playing a move through [`Position`](crate::game::Position).

use std::fmt;

use super::{Color, Square};

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 1-8)
    RowOutOfBounds { row: isize },
    /// Column out of bounds (must be 1-8)
    ColOutOfBounds { col: isize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
    /// Invalid display-cell id
    InvalidId { id: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 1-8)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 1-8)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
            SquareError::InvalidId { id } => {
                write!(f, "Invalid square id '{id}', expected b<row>0<col>")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for piece code parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceCodeError {
    /// Empty (or whitespace-only) code
    Empty,
    /// First character is not `W` or `B`
    InvalidColor { char: char },
    /// Remainder is not a known piece name
    InvalidKind { name: String },
}

impl fmt::Display for PieceCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceCodeError::Empty => write!(f, "Empty piece code"),
            PieceCodeError::InvalidColor { char } => {
                write!(f, "Invalid color '{char}' in piece code, expected 'W' or 'B'")
            }
            PieceCodeError::InvalidKind { name } => {
                write!(f, "Invalid piece name '{name}' in piece code")
            }
        }
    }
}

impl std::error::Error for PieceCodeError {}

/// Error type for text grid snapshot failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// Grid does not have exactly 8 rows
    RowCount { found: usize },
    /// A row does not have exactly 8 cells
    ColumnCount { row: usize, found: usize },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::RowCount { found } => {
                write!(f, "Snapshot must have 8 rows, found {found}")
            }
            SnapshotError::ColumnCount { row, found } => {
                write!(f, "Snapshot row {row} must have 8 cells, found {found}")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

/// Error type for rejected moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece on the source square
    EmptySource { square: Square },
    /// The piece belongs to the side not on move
    WrongSide { square: Square, side_to_move: Color },
    /// Destination is not among the legal moves of the piece
    Illegal { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySource { square } => {
                write!(f, "No piece on {square}")
            }
            MoveError::WrongSide {
                square,
                side_to_move,
            } => {
                write!(f, "Piece on {square} does not belong to {side_to_move}")
            }
            MoveError::Illegal { from, to } => {
                write!(f, "Illegal move {from}{to}")
            }
        }
    }
}

impl std::error::Error for MoveError {}
