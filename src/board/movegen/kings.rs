use super::super::{Board, Color, Square};

impl Board {
    pub(crate) fn generate_king_moves(
        &self,
        from: Square,
        color: Color,
        targets: &mut Vec<Square>,
    ) {
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let Some(to_sq) = from.offset(dr, dc) {
                    self.push_if_open(to_sq, color, targets);
                }
            }
        }
    }
}
