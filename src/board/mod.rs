//! Chess board representation and rules.
//!
//! A mailbox 8x8 grid with pseudo-legal move generation, check detection,
//! a copy-and-simulate legality filter and checkmate/stalemate detection.
//! Castling, en passant and promotion are not part of the rules.
//!
//! # Example
//! ```
//! use chess_relay::board::{Board, Color, Position};
//!
//! let board = Board::new();
//! let pawn = "e2".parse::<Position>().unwrap();
//! let moves = board.legal_moves(pawn);
//! assert_eq!(moves.moves.len(), 2);
//! assert!(!board.is_checkmate(Color::White));
//! ```

mod builder;
mod check;
mod error;
mod fen;
mod legality;
mod movegen;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{LayoutError, MoveError, PositionError};
pub use state::Board;
pub use status::GameStatus;
pub use types::{Color, MoveSet, Piece, PieceKind, Position, BOARD_SIZE};
