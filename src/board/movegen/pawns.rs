use super::super::{Board, Color, MoveSet, Position};

impl Board {
    /// Single and double advances plus diagonal captures. No en passant and
    /// no promotion: a pawn on the far row simply has nothing to do.
    pub(crate) fn generate_pawn_moves(&self, from: Position, color: Color, set: &mut MoveSet) {
        let dir = color.pawn_direction();

        if let Some(one_ahead) = from.offset(0, dir) {
            if self.is_empty(one_ahead) {
                set.moves.push(one_ahead);

                if from.y() == color.pawn_start_row() {
                    if let Some(two_ahead) = from.offset(0, 2 * dir) {
                        if self.is_empty(two_ahead) {
                            set.moves.push(two_ahead);
                        }
                    }
                }
            }
        }

        for dx in [-1, 1] {
            if let Some(target) = from.offset(dx, dir) {
                if let Some(victim) = self.piece_at(target) {
                    if victim.color != color {
                        set.captures.push(target);
                    }
                }
            }
        }
    }
}
