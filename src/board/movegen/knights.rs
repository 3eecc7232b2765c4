use super::super::{Board, Color, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

impl Board {
    pub(crate) fn generate_knight_moves(
        &self,
        from: Square,
        color: Color,
        targets: &mut Vec<Square>,
    ) {
        for (dr, dc) in KNIGHT_OFFSETS {
            if let Some(to_sq) = from.offset(dr, dc) {
                self.push_if_open(to_sq, color, targets);
            }
        }
    }
}
