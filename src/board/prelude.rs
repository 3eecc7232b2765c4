//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    is_inside, parse_piece_code, piece_code, Board, BoardBuilder, Color, Move, MoveError, Piece,
    PieceCodeError, SnapshotError, Square, SquareError,
};
pub use crate::game::{ClickOutcome, GameStatus, Position, Selection};
