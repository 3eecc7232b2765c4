//! Pseudo-legal generation per piece type.

use super::sq;
use crate::board::{Board, BoardBuilder, Color, Move, Piece, Square};

fn sorted(mut squares: Vec<Square>) -> Vec<Square> {
    squares.sort();
    squares
}

#[test]
fn test_empty_square_has_no_moves() {
    let board = Board::new();
    assert!(board.generate_moves(sq(4, 4)).is_empty());
    assert!(board.legal_moves(sq(5, 1)).is_empty());
}

#[test]
fn test_pawn_double_step_from_start_row() {
    for (color, start, one, two) in [
        (Color::White, sq(2, 4), sq(3, 4), sq(4, 4)),
        (Color::Black, sq(7, 4), sq(6, 4), sq(5, 4)),
    ] {
        let board = BoardBuilder::new().piece(start, color, Piece::Pawn).build();
        assert_eq!(board.generate_moves(start), vec![one, two], "{color} pawn");
    }
}

#[test]
fn test_pawn_blocked_one_step_has_no_forward_moves() {
    for blocker in Color::BOTH {
        for two_step_occupied in [false, true] {
            let mut builder = BoardBuilder::new()
                .piece_at(2, 4, Color::White, Piece::Pawn)
                .piece_at(3, 4, blocker, Piece::Knight);
            if two_step_occupied {
                builder = builder.piece_at(4, 4, Color::Black, Piece::Rook);
            }
            let board = builder.build();
            assert!(
                board.generate_moves(sq(2, 4)).is_empty(),
                "blocked by {blocker}, two-step occupied: {two_step_occupied}"
            );
        }
    }
}

#[test]
fn test_pawn_two_step_blocked_keeps_single_step() {
    let board = BoardBuilder::new()
        .piece_at(7, 3, Color::Black, Piece::Pawn)
        .piece_at(5, 3, Color::White, Piece::Bishop)
        .build();
    assert_eq!(board.generate_moves(sq(7, 3)), vec![sq(6, 3)]);
}

#[test]
fn test_pawn_no_double_step_off_start_row() {
    let board = BoardBuilder::new()
        .piece_at(3, 5, Color::White, Piece::Pawn)
        .build();
    assert_eq!(board.generate_moves(sq(3, 5)), vec![sq(4, 5)]);
}

#[test]
fn test_pawn_captures_only_enemies_diagonally() {
    let board = BoardBuilder::new()
        .piece_at(4, 4, Color::White, Piece::Pawn)
        .piece_at(5, 3, Color::Black, Piece::Pawn)
        .piece_at(5, 5, Color::White, Piece::Knight)
        .piece_at(5, 4, Color::Black, Piece::Rook)
        .build();
    assert_eq!(board.generate_moves(sq(4, 4)), vec![sq(5, 3)]);
}

#[test]
fn test_pawn_on_last_row_is_stuck() {
    let board = BoardBuilder::new()
        .piece_at(8, 1, Color::White, Piece::Pawn)
        .piece_at(1, 8, Color::Black, Piece::Pawn)
        .build();
    assert!(board.generate_moves(sq(8, 1)).is_empty());
    assert!(board.generate_moves(sq(1, 8)).is_empty());
}

#[test]
fn test_knight_in_corner_and_center() {
    let board = BoardBuilder::new()
        .piece_at(1, 1, Color::White, Piece::Knight)
        .piece_at(4, 4, Color::Black, Piece::Knight)
        .build();
    assert_eq!(sorted(board.generate_moves(sq(1, 1))), vec![sq(2, 3), sq(3, 2)]);
    assert_eq!(board.generate_moves(sq(4, 4)).len(), 8);
}

#[test]
fn test_knight_skips_own_pieces_takes_enemies() {
    let board = BoardBuilder::new()
        .piece_at(1, 1, Color::White, Piece::Knight)
        .piece_at(2, 3, Color::White, Piece::Pawn)
        .piece_at(3, 2, Color::Black, Piece::Pawn)
        .build();
    assert_eq!(board.generate_moves(sq(1, 1)), vec![sq(3, 2)]);
}

#[test]
fn test_king_neighbours() {
    let board = BoardBuilder::new()
        .piece_at(1, 5, Color::White, Piece::King)
        .piece_at(2, 5, Color::White, Piece::Pawn)
        .piece_at(2, 6, Color::Black, Piece::Pawn)
        .build();
    assert_eq!(
        sorted(board.generate_moves(sq(1, 5))),
        vec![sq(1, 4), sq(1, 6), sq(2, 4), sq(2, 6)]
    );
    let center = BoardBuilder::new()
        .piece_at(5, 5, Color::Black, Piece::King)
        .build();
    assert_eq!(center.generate_moves(sq(5, 5)).len(), 8);
}

#[test]
fn test_rook_on_empty_board_has_fourteen_moves() {
    let board = BoardBuilder::new()
        .piece_at(4, 4, Color::White, Piece::Rook)
        .build();
    let moves = board.generate_moves(sq(4, 4));
    assert_eq!(moves.len(), 14);
    assert!(moves.iter().all(|m| m.row() == 4 || m.col() == 4));
}

#[test]
fn test_bishop_and_queen_on_empty_board() {
    let board = BoardBuilder::new()
        .piece_at(4, 4, Color::White, Piece::Bishop)
        .piece_at(1, 1, Color::Black, Piece::Queen)
        .build();
    assert_eq!(board.generate_moves(sq(4, 4)).len(), 13);
    // a1 queen: 7 up, 7 right, 6 on the diagonal before the bishop plus the capture
    assert_eq!(board.generate_moves(sq(1, 1)).len(), 7 + 7 + 3);
}

#[test]
fn test_slider_ray_stops_at_first_occupant() {
    let board = BoardBuilder::new()
        .piece_at(1, 1, Color::White, Piece::Rook)
        .piece_at(1, 4, Color::Black, Piece::Knight)
        .piece_at(4, 1, Color::White, Piece::Pawn)
        .build();
    assert_eq!(
        sorted(board.generate_moves(sq(1, 1))),
        vec![sq(1, 2), sq(1, 3), sq(1, 4), sq(2, 1), sq(3, 1)]
    );
}

#[test]
fn test_generated_squares_are_on_board() {
    let board = BoardBuilder::new()
        .piece_at(8, 8, Color::White, Piece::Queen)
        .piece_at(1, 1, Color::White, Piece::King)
        .piece_at(8, 1, Color::Black, Piece::Knight)
        .piece_at(1, 8, Color::Black, Piece::Pawn)
        .build();
    for from in [sq(8, 8), sq(1, 1), sq(8, 1), sq(1, 8)] {
        for to in board.generate_moves(from) {
            assert!(crate::board::is_inside(to.row() as isize, to.col() as isize));
        }
    }
}

#[test]
fn test_pseudo_moves_wrap_destinations() {
    let board = Board::new();
    let moves = board.pseudo_moves(sq(1, 7));
    assert_eq!(
        moves,
        vec![Move::new(sq(1, 7), sq(3, 8)), Move::new(sq(1, 7), sq(3, 6))]
    );
}

#[test]
fn test_generation_is_deterministic() {
    let board = Board::new();
    for from in Square::all() {
        assert_eq!(board.generate_moves(from), board.generate_moves(from));
    }
}
