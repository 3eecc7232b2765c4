//! Rules engine for standard chess: pseudo-legal and legal move generation,
//! check detection and checkmate/stalemate classification over board snapshots.

pub mod board;
pub mod game;

pub use board::{Board, Color, Move, Piece, Square};
pub use game::{GameStatus, Position};
