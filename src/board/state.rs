//! The mailbox board and its cell accessors.

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceKind, Position, BOARD_SIZE};

static STARTING_BOARD: Lazy<Board> = Lazy::new(|| {
    const BACK_RANK: [PieceKind; BOARD_SIZE] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    let mut board = Board::empty();
    for color in Color::BOTH {
        for (x, kind) in BACK_RANK.into_iter().enumerate() {
            board.set_piece(Position(x, color.back_row()), Piece::new(kind, color));
            board.set_piece(
                Position(x, color.pawn_start_row()),
                Piece::new(PieceKind::Pawn, color),
            );
        }
    }
    board
});

/// An 8x8 grid of cells, indexed `squares[y][x]`.
///
/// Row 0 is Black's back rank, row 7 is White's. The engine assumes exactly
/// one king per color; boards violating that are accepted but the check and
/// legality queries report "no king" rather than failing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        STARTING_BOARD.clone()
    }

    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The piece on `pos`, or `None` if the cell is empty or off the board.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.squares
            .get(pos.y())
            .and_then(|row| row.get(pos.x()))
            .copied()
            .flatten()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.piece_at(pos).is_none()
    }

    /// Place `piece` on `pos`, replacing whatever was there.
    ///
    /// Positions off the board are ignored.
    pub fn set_piece(&mut self, pos: Position, piece: Piece) {
        self.set(pos, Some(piece));
    }

    /// Empty `pos`, returning the piece that stood there.
    pub fn clear(&mut self, pos: Position) -> Option<Piece> {
        let previous = self.piece_at(pos);
        self.set(pos, None);
        previous
    }

    fn set(&mut self, pos: Position, cell: Option<Piece>) {
        if let Some(slot) = self
            .squares
            .get_mut(pos.y())
            .and_then(|row| row.get_mut(pos.x()))
        {
            *slot = cell;
        }
    }

    /// Place `piece` on `to` and empty `from`, returning the captured piece.
    ///
    /// Performs no rule checks; callers validate the move first.
    pub fn relocate(&mut self, from: Position, to: Position, piece: Piece) -> Option<Piece> {
        let captured = self.piece_at(to);
        self.set_piece(to, piece);
        self.clear(from);
        captured
    }

    /// Occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }

    /// Cells occupied by `color` in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.occupied().count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
