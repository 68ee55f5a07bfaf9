//! Error types for board operations.

use std::fmt;

use super::{Color, GameStatus, Position};

/// Error type for position parsing and construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Coordinates outside the 8x8 grid
    OutOfBounds { x: usize, y: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::OutOfBounds { x, y } => {
                write!(f, "Position ({x}, {y}) out of bounds (must be 0-7)")
            }
            PositionError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for piece placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Placement must have exactly 8 rows
    WrongRowCount { found: usize },
    /// Invalid piece character in a row
    InvalidPiece { char: char },
    /// Too many cells in a row
    RowTooLong { row: usize, cells: usize },
    /// Too few cells in a row
    RowTooShort { row: usize, cells: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongRowCount { found } => {
                write!(f, "Placement must have 8 rows, found {found}")
            }
            LayoutError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            LayoutError::RowTooLong { row, cells } => {
                write!(f, "Too many cells ({cells}) in row {row}")
            }
            LayoutError::RowTooShort { row, cells } => {
                write!(f, "Too few cells ({cells}) in row {row}")
            }
            LayoutError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Error type for rejected move submissions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game already reached a terminal status
    GameOver { status: GameStatus },
    /// No piece on the source cell
    EmptySquare { at: Position },
    /// The piece on the source cell belongs to the side not on move
    NotYourPiece { at: Position, turn: Color },
    /// Destination is not in the legal move set of the piece
    IllegalMove { from: Position, to: Position },
    /// A king is missing from the board
    MissingKing { color: Color },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver { status } => write!(f, "Game is over ({status})"),
            MoveError::EmptySquare { at } => write!(f, "No piece on {at}"),
            MoveError::NotYourPiece { at, turn } => {
                write!(f, "Piece on {at} does not belong to {turn}, who is on move")
            }
            MoveError::IllegalMove { from, to } => write!(f, "Illegal move {from}{to}"),
            MoveError::MissingKing { color } => write!(f, "No {color} king on the board"),
        }
    }
}

impl std::error::Error for MoveError {}
