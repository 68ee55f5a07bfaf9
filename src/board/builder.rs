//! Fluent builder for constructing boards piece by piece.
//!
//! # Example
//! ```
//! use chess_relay::board::{BoardBuilder, Color, PieceKind, Position};
//!
//! let board = BoardBuilder::new()
//!     .piece(Position(4, 7), Color::White, PieceKind::King)
//!     .piece(Position(4, 0), Color::Black, PieceKind::King)
//!     .piece(Position(0, 6), Color::White, PieceKind::Pawn)
//!     .build();
//! assert_eq!(board.piece_count(), 3);
//! ```

use super::{Board, Color, Piece, PieceKind, Position};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Position, Piece)>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            pieces: Board::new().occupied().collect(),
        }
    }

    /// Place a piece, replacing anything already on that cell.
    #[must_use]
    pub fn piece(mut self, pos: Position, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(p, _)| *p != pos);
        self.pieces.push((pos, Piece::new(kind, color)));
        self
    }

    /// Remove a piece from a cell.
    #[must_use]
    pub fn clear(mut self, pos: Position) -> Self {
        self.pieces.retain(|(p, _)| *p != pos);
        self
    }

    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (pos, piece) in self.pieces {
            board.set_piece(pos, piece);
        }
        board
    }
}
