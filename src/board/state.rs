use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Move, Piece, Square};

const BACK_ROW: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

static STARTING_POSITION: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for (i, piece) in BACK_ROW.iter().enumerate() {
        let col = i as isize + 1;
        for (row, color, kind) in [
            (1, Color::White, *piece),
            (2, Color::White, Piece::Pawn),
            (7, Color::Black, Piece::Pawn),
            (8, Color::Black, *piece),
        ] {
            if let Some(sq) = Square::new(row, col) {
                board.set_piece(sq, color, kind);
            }
        }
    }
    board
});

/// A snapshot of piece occupancy for all 64 squares.
///
/// The board is a plain value: `clone()` yields a fully independent copy, and
/// rule queries never mutate it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8], // [row - 1][col - 1]
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// The standard opening position.
    pub fn new() -> Self {
        STARTING_POSITION.clone()
    }

    pub fn starting_position() -> Self {
        Self::new()
    }

    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Piece at raw coordinates; `None` for empty or off-board coordinates.
    #[must_use]
    pub fn occupant_at(&self, row: isize, col: isize) -> Option<(Color, Piece)> {
        Square::new(row, col).and_then(|sq| self.piece_at(sq))
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(Color, Piece)> {
        self.squares[square.row() as usize - 1][square.col() as usize - 1]
    }

    #[inline]
    #[must_use]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    pub fn set_piece(&mut self, square: Square, color: Color, piece: Piece) {
        self.squares[square.row() as usize - 1][square.col() as usize - 1] = Some((color, piece));
    }

    pub fn clear_square(&mut self, square: Square) {
        self.squares[square.row() as usize - 1][square.col() as usize - 1] = None;
    }

    /// Returns a copy with `piece` on `mv.to` and `mv.from` emptied.
    ///
    /// No legality checks; whatever stood on the destination is overwritten.
    #[must_use]
    pub fn apply_move(&self, mv: Move, piece: (Color, Piece)) -> Board {
        let mut next = self.clone();
        let (color, kind) = piece;
        next.set_piece(mv.to, color, kind);
        next.clear_square(mv.from);
        next
    }

    /// [`Board::apply_move`] with whatever piece stands on `mv.from`.
    ///
    /// An empty source square yields an unchanged copy.
    #[must_use]
    pub fn make_move(&self, mv: Move) -> Board {
        match self.piece_at(mv.from) {
            Some(piece) => self.apply_move(mv, piece),
            None => self.clone(),
        }
    }

    /// True if `mv` lands on an occupied square.
    #[must_use]
    pub fn is_capture(&self, mv: Move) -> bool {
        !self.is_empty(mv.to)
    }

    /// Squares and kinds of every piece of `color`, in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((c, piece)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }
}
