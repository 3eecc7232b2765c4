use super::super::{Board, Color, Square};

const STRAIGHT: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> &'static [(isize, isize)] {
        const QUEEN: [(isize, isize); 8] = [
            (1, 0),
            (-1, 0),
            (0, 1),
            (0, -1),
            (1, 1),
            (1, -1),
            (-1, 1),
            (-1, -1),
        ];
        match self {
            SliderType::Bishop => &DIAGONAL,
            SliderType::Rook => &STRAIGHT,
            SliderType::Queen => &QUEEN,
        }
    }
}

impl Board {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
        targets: &mut Vec<Square>,
    ) {
        for &(dr, dc) in slider.directions() {
            let mut cur = from.offset(dr, dc);
            while let Some(to_sq) = cur {
                if !self.push_if_open(to_sq, color, targets) {
                    break;
                }
                cur = to_sq.offset(dr, dc);
            }
        }
    }
}
