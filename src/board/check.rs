//! King location and check detection.

use super::{Board, Color, PieceKind, Position};

impl Board {
    /// First king of `color` in row-major order.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(pos, _)| pos)
    }

    /// The first piece of `attacker` (row-major) whose capture set contains
    /// `target`. Legality of the capture is ignored.
    #[must_use]
    pub fn attacker_of(&self, target: Position, attacker: Color) -> Option<Position> {
        self.pieces_of(attacker)
            .find(|&(from, piece)| self.moves_for(from, piece).captures.contains(&target))
            .map(|(from, _)| from)
    }

    /// Position of a piece giving check to `color`'s king.
    ///
    /// Returns `None` when the king is safe or when `color` has no king.
    /// With several checking pieces only the first in row-major order is
    /// reported.
    #[must_use]
    pub fn king_checker(&self, color: Color) -> Option<Position> {
        let king = self.find_king(color)?;
        self.attacker_of(king, color.opponent())
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_checker(color).is_some()
    }
}
