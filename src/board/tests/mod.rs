//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move and capture generation
//! - `check.rs` - King location and check detection
//! - `edge_cases.rs` - Pins, mates, stalemates and the legality filter
//! - `proptest.rs` - Property-based tests


use crate::board::{Board, Color, PieceKind, Position};

/// Empty board with the given pieces placed.
pub(super) fn board_with(pieces: &[(Position, Color, PieceKind)]) -> Board {
    pieces
        .iter()
        .fold(crate::board::BoardBuilder::new(), |b, &(pos, color, kind)| {
            b.piece(pos, color, kind)
        })
        .build()
}

pub(super) fn sorted(mut cells: Vec<Position>) -> Vec<Position> {
    cells.sort_by_key(|p| (p.y(), p.x()));
    cells
}
