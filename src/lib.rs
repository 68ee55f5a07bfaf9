mod logging;

pub mod board;
pub mod game;
pub mod session;

pub use board::{Board, Color, GameStatus, MoveSet, Piece, PieceKind, Position};
pub use game::GameState;
pub use session::RoomRegistry;
