//! Pseudo-legal move generation.
//!
//! Generated destinations obey each piece's movement pattern and the board's
//! occupancy, but never consult check status. See `legal.rs` for filtering.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use sliders::SliderType;

use super::{Board, Color, Move, Piece, Square};

impl Board {
    /// Pseudo-legal destinations of the piece on `from`, empty if there is none.
    ///
    /// The order is deterministic for a given board.
    #[must_use]
    pub fn generate_moves(&self, from: Square) -> Vec<Square> {
        let Some((color, piece)) = self.piece_at(from) else {
            return Vec::new();
        };
        let mut targets = Vec::new();
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, &mut targets),
            Piece::Knight => self.generate_knight_moves(from, color, &mut targets),
            Piece::Bishop => {
                self.generate_slider_moves(from, color, SliderType::Bishop, &mut targets)
            }
            Piece::Rook => self.generate_slider_moves(from, color, SliderType::Rook, &mut targets),
            Piece::Queen => {
                self.generate_slider_moves(from, color, SliderType::Queen, &mut targets)
            }
            Piece::King => self.generate_king_moves(from, color, &mut targets),
        }
        targets
    }

    /// [`Board::generate_moves`] as `Move`s originating at `from`.
    #[must_use]
    pub fn pseudo_moves(&self, from: Square) -> Vec<Move> {
        self.generate_moves(from)
            .into_iter()
            .map(|to| Move::new(from, to))
            .collect()
    }

    /// Push `to` if it is empty or holds an enemy piece.
    ///
    /// Returns whether `to` was empty, so sliders know to keep going.
    pub(crate) fn push_if_open(
        &self,
        to: Square,
        color: Color,
        targets: &mut Vec<Square>,
    ) -> bool {
        match self.color_at(to) {
            None => {
                targets.push(to);
                true
            }
            Some(occupant) => {
                if occupant != color {
                    targets.push(to);
                }
                false
            }
        }
    }
}
