//! Pseudo-legal move generation.
//!
//! Every generator reads the board and returns destinations without checking
//! whether the mover's own king is left attacked; see `legality` for that.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, MoveSet, Piece, PieceKind, Position};

pub(crate) use sliders::{DIAGONAL, STRAIGHT};

impl Board {
    /// Pseudo-legal destinations for `piece` standing on `from`.
    ///
    /// Only computed destinations are bounds-checked; `from` itself is
    /// trusted to be on the board.
    #[must_use]
    pub fn moves_for(&self, from: Position, piece: Piece) -> MoveSet {
        let mut set = MoveSet::new();
        match piece.kind {
            PieceKind::Pawn => self.generate_pawn_moves(from, piece.color, &mut set),
            PieceKind::Knight => self.generate_knight_moves(from, piece.color, &mut set),
            PieceKind::Bishop => self.generate_sliding_moves(from, piece.color, &DIAGONAL, None, &mut set),
            PieceKind::Rook => self.generate_sliding_moves(from, piece.color, &STRAIGHT, None, &mut set),
            PieceKind::Queen => {
                self.generate_sliding_moves(from, piece.color, &STRAIGHT, None, &mut set);
                self.generate_sliding_moves(from, piece.color, &DIAGONAL, None, &mut set);
            }
            PieceKind::King => self.generate_king_moves(from, piece.color, &mut set),
        }
        set
    }

    /// Pseudo-legal destinations for whatever piece stands on `from`.
    #[must_use]
    pub fn pseudo_moves(&self, from: Position) -> MoveSet {
        self.piece_at(from)
            .map(|piece| self.moves_for(from, piece))
            .unwrap_or_default()
    }

    /// Classify a computed destination: empty cells are moves, opposing pieces
    /// captures. Returns false when the cell is occupied, which ends a ray.
    #[inline]
    pub(crate) fn push_target(&self, to: Position, color: Color, set: &mut MoveSet) -> bool {
        match self.piece_at(to) {
            None => {
                set.moves.push(to);
                true
            }
            Some(target) => {
                if target.color != color {
                    set.captures.push(to);
                }
                false
            }
        }
    }
}
