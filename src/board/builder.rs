//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing a snapshot grid.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, Square};
//!
//! let e1 = Square::new(1, 5).unwrap();
//! let e8 = Square::new(8, 5).unwrap();
//! let a2 = Square::new(2, 1).unwrap();
//!
//! let board = BoardBuilder::new()
//!     .piece(e1, Color::White, Piece::King)
//!     .piece(e8, Color::Black, Piece::King)
//!     .piece(a2, Color::White, Piece::Pawn)
//!     .build();
//! assert_eq!(board.piece_count(Color::White), 2);
//! ```

use super::{Board, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
        }
    }

    /// Place a piece on the board, replacing any existing piece on that square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.set_piece(square, color, piece);
        self
    }

    /// Place a piece given raw coordinates; off-board coordinates are ignored.
    #[must_use]
    pub fn piece_at(self, row: isize, col: isize, color: Color, piece: Piece) -> Self {
        match Square::new(row, col) {
            Some(square) => self.piece(square, color, piece),
            None => self,
        }
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.clear_square(square);
        self
    }

    /// Build the final board.
    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}
