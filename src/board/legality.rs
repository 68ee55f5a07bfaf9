//! Filtering pseudo-legal moves down to legal ones.

use super::{Board, MoveSet, Piece, Position};

impl Board {
    /// True if moving `piece` from `from` to `to` leaves its own king
    /// unattacked.
    ///
    /// The move is played on a scratch copy; `self` is never touched. A board
    /// without a king for the mover reports every move as unsafe.
    #[must_use]
    pub fn is_safe(&self, from: Position, to: Position, piece: Piece) -> bool {
        let mut scratch = self.clone();
        scratch.relocate(from, to, piece);

        let king = if piece.is_king() {
            Some(to)
        } else {
            scratch.find_king(piece.color)
        };

        match king {
            Some(king) => scratch.attacker_of(king, piece.color.opponent()).is_none(),
            None => false,
        }
    }

    /// Legal destinations for the piece on `from`; empty if the cell is empty.
    #[must_use]
    pub fn legal_moves(&self, from: Position) -> MoveSet {
        let Some(piece) = self.piece_at(from) else {
            return MoveSet::new();
        };
        let mut set = self.moves_for(from, piece);
        set.retain(|to| self.is_safe(from, to, piece));
        set
    }
}
