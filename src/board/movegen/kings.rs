use super::super::{Board, Color, MoveSet, Position};
use super::{DIAGONAL, STRAIGHT};

impl Board {
    /// One step in any of the eight directions. No castling.
    pub(crate) fn generate_king_moves(&self, from: Position, color: Color, set: &mut MoveSet) {
        self.generate_sliding_moves(from, color, &STRAIGHT, Some(1), set);
        self.generate_sliding_moves(from, color, &DIAGONAL, Some(1), set);
    }
}
