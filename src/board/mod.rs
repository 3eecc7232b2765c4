//! Chess board representation and rules.
//!
//! A `Board` is an immutable-per-query snapshot of all 64 squares. Rule
//! queries (pseudo-legal and legal destinations, attack and check tests,
//! terminal-state detection) borrow it and never mutate it; hypothetical
//! moves are played on independent copies.
//!
//! Castling, en passant and promotion are not part of these rules.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, Square};
//!
//! let board = Board::new();
//! let e2 = Square::new(2, 5).unwrap();
//! let moves = board.legal_moves(e2);
//! assert_eq!(moves.len(), 2);
//! assert!(!board.is_in_check(Color::White));
//! ```

mod attacks;
mod builder;
mod error;
mod legal;
mod movegen;
pub mod prelude;
mod snapshot;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{MoveError, PieceCodeError, SnapshotError, SquareError};
pub use snapshot::{parse_piece_code, piece_code};
pub use state::Board;
pub use types::{is_inside, Color, Move, Piece, Square};
