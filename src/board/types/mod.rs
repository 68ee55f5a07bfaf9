//! Core chess types.
//!
//! This module contains the value types shared by the rules engine:
//! - `Piece`, `PieceKind` and `Color` - chess pieces and sides
//! - `Position` - an (x, y) cell on the 8x8 grid
//! - `MoveSet` - quiet-move and capture destinations for one piece

mod move_set;
mod piece;
mod position;

pub use move_set::MoveSet;
pub use piece::{Color, Piece, PieceKind};
pub use position::{Position, BOARD_SIZE};
