use super::super::{Board, Color, MoveSet, Position};

const KNIGHT_JUMPS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Position, color: Color, set: &mut MoveSet) {
        for (dx, dy) in KNIGHT_JUMPS {
            if let Some(to) = from.offset(dx, dy) {
                self.push_target(to, color, set);
            }
        }
    }
}
