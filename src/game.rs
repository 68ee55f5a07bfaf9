//! A single game: board, side to move and status.
//!
//! `GameState` is the snapshot exchanged between peers. It only changes
//! through `apply_move`, which rejects anything outside the legal move set
//! and refuses further moves once the game reached checkmate or stalemate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, GameStatus, LayoutError, MoveError, MoveSet, Piece, Position};
use crate::logging::relay_log;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub status: GameStatus,
    /// A piece giving check to the side on move, if any
    #[cfg_attr(feature = "serde", serde(default))]
    pub checker: Option<Position>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_move: Option<(Position, Position)>,
}

impl GameState {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            turn: Color::White,
            status: GameStatus::Active,
            checker: None,
            last_move: None,
        }
    }

    /// Wrap an arbitrary board, deriving status and checker for `turn`.
    pub fn from_board(board: Board, turn: Color) -> Result<Self, MoveError> {
        for color in Color::BOTH {
            if board.find_king(color).is_none() {
                return Err(MoveError::MissingKing { color });
            }
        }
        let status = board.status(turn);
        let checker = board.king_checker(turn);
        Ok(GameState {
            board,
            turn,
            status,
            checker,
            last_move: None,
        })
    }

    /// Parse placement and side to move, e.g. `"8/8/8/8/8/8/8/4K2k b"`.
    pub fn try_from_fen(fen: &str) -> Result<Self, GameSetupError> {
        let (board, turn) = Board::try_from_fen(fen)?;
        Ok(Self::from_board(board, turn)?)
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[inline]
    #[must_use]
    pub fn is_check(&self) -> bool {
        self.checker.is_some()
    }

    /// Legal destinations for the piece on `from`. Empty when the cell is
    /// empty, holds a piece of the side not on move, or the game is over.
    #[must_use]
    pub fn legal_moves(&self, from: Position) -> MoveSet {
        match self.board.piece_at(from) {
            Some(piece) if piece.color == self.turn && !self.is_over() => {
                self.board.legal_moves(from)
            }
            _ => MoveSet::new(),
        }
    }

    /// Check a move against the current position without applying it.
    pub fn validate_move(&self, from: Position, to: Position) -> Result<Piece, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver {
                status: self.status,
            });
        }
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::EmptySquare { at: from })?;
        if piece.color != self.turn {
            return Err(MoveError::NotYourPiece {
                at: from,
                turn: self.turn,
            });
        }
        if !self.board.moves_for(from, piece).contains(to) || !self.board.is_safe(from, to, piece) {
            return Err(MoveError::IllegalMove { from, to });
        }
        Ok(piece)
    }

    /// Apply a legal move, pass the turn and recompute status.
    ///
    /// Returns the captured piece, if any. On error the state is unchanged.
    pub fn apply_move(&mut self, from: Position, to: Position) -> Result<Option<Piece>, MoveError> {
        let piece = self.validate_move(from, to)?;

        let mut board = self.board.clone();
        let captured = board.relocate(from, to, piece);
        let next = GameState {
            last_move: Some((from, to)),
            ..Self::from_board(board, self.turn.opponent())?
        };

        relay_log!(
            debug,
            "{} {}{} -> {} to move, status {}",
            piece.color,
            from,
            to,
            next.turn,
            next.status
        );
        if let Some(checker) = next.checker {
            relay_log!(debug, "{} king in check from {}", next.turn, checker);
        }

        *self = next;
        Ok(captured)
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

/// Error type for building a game from notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameSetupError {
    Layout(LayoutError),
    Position(MoveError),
}

impl std::fmt::Display for GameSetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameSetupError::Layout(e) => write!(f, "Invalid layout: {e}"),
            GameSetupError::Position(e) => write!(f, "Invalid position: {e}"),
        }
    }
}

impl std::error::Error for GameSetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameSetupError::Layout(e) => Some(e),
            GameSetupError::Position(e) => Some(e),
        }
    }
}

impl From<LayoutError> for GameSetupError {
    fn from(e: LayoutError) -> Self {
        GameSetupError::Layout(e)
    }
}

impl From<MoveError> for GameSetupError {
    fn from(e: MoveError) -> Self {
        GameSetupError::Position(e)
    }
}
