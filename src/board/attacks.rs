//! Attack and check detection.
//!
//! A square counts as attacked when some enemy piece could pseudo-legally move
//! onto it. Legality is never consulted here, so check detection and legal
//! move filtering cannot recurse into each other.

use super::{Board, Color, Piece, Square};

impl Board {
    /// True iff any piece of `attacker` has `square` among its pseudo-legal destinations.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        self.pieces(attacker)
            .any(|(from, _)| self.generate_moves(from).contains(&square))
    }

    /// First king of `color` in row-major order.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces(color)
            .find(|&(_, piece)| piece == Piece::King)
            .map(|(sq, _)| sq)
    }

    /// Whether `color`'s king is attacked by the opponent.
    ///
    /// A board without a king of `color` reports `true`.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king_sq) => self.is_square_attacked(king_sq, color.opponent()),
            None => true,
        }
    }
}
