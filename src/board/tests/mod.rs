//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece pseudo-legal generation
//! - `legal.rs` - Legality filtering, pins, checkmate and stalemate
//! - `edge_cases.rs` - Degenerate boards and boundary behaviour
//! - `perft.rs` - Move counts from known positions
//! - `proptest.rs` - Property-based tests

mod movegen;

use crate::board::{Board, Color, Piece, Square};

pub(super) fn sq(row: isize, col: isize) -> Square {
    Square::new(row, col).unwrap()
}

/// Board from the placement field of a FEN string (row 8 first).
pub(super) fn from_placement(placement: &str) -> Board {
    let mut board = Board::empty();
    for (i, rank) in placement.split('/').enumerate() {
        let row = 8 - i as isize;
        let mut col = 1;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as isize;
                continue;
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let piece = match c.to_ascii_lowercase() {
                'p' => Piece::Pawn,
                'n' => Piece::Knight,
                'b' => Piece::Bishop,
                'r' => Piece::Rook,
                'q' => Piece::Queen,
                'k' => Piece::King,
                other => panic!("bad placement char {other}"),
            };
            board.set_piece(sq(row, col), color, piece);
            col += 1;
        }
    }
    board
}

#[test]
fn test_placement_helper_matches_start() {
    assert_eq!(
        from_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"),
        Board::new()
    );
}
