//! Legal move filtering and terminal-state detection.
//!
//! Every candidate is played on an independent copy of the board and kept only
//! if the mover is not in check afterwards. That rescans all enemy attacks per
//! candidate, which is fine for one 8x8 position per query but is not a
//! search-grade generator.

use super::{Board, Color, Move, Square};

impl Board {
    /// Destinations of the piece on `from` that do not leave its own king attacked.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        let (color, _) = piece;

        self.generate_moves(from)
            .into_iter()
            .filter(|&to| {
                let after = self.apply_move(Move::new(from, to), piece);
                let legal = !after.is_in_check(color);
                if !legal {
                    log::trace!("{from}{to} rejected: leaves {color} in check");
                }
                legal
            })
            .collect()
    }

    /// Every legal move of `color`, grouped by source square in row-major order.
    #[must_use]
    pub fn legal_moves_for(&self, color: Color) -> Vec<Move> {
        self.pieces(color)
            .flat_map(|(from, _)| {
                self.legal_moves(from)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// Whether `color` has at least one legal move anywhere on the board.
    #[must_use]
    pub fn side_has_any_legal_move(&self, color: Color) -> bool {
        self.pieces(color)
            .any(|(from, _)| !self.legal_moves(from).is_empty())
    }

    /// Count leaf positions `depth` plies deep, `color` moving first.
    #[must_use]
    pub fn perft(&self, color: Color, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves_for(color);
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .into_iter()
            .map(|mv| self.make_move(mv).perft(color.opponent(), depth - 1))
            .sum()
    }
}
