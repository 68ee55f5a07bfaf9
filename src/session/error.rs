//! Error types for relay operations.

use std::fmt;

use super::RoomId;
use crate::board::{Color, MoveError};

/// Error type for rejected relay requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No room with this id
    RoomNotFound { room_id: RoomId },
    /// Both seats are taken
    RoomFull { room_id: RoomId },
    /// The configured room limit is reached
    TooManyRooms { limit: usize },
    /// Room name is empty or too long
    InvalidRoomName { name: String },
    /// The player already holds a seat in this room
    AlreadySeated { room_id: RoomId },
    /// The player holds no seat in this room
    NotSeated { room_id: RoomId },
    /// The submitting player's color is not on move
    NotYourTurn { turn: Color },
    /// A trusting relay received a move without a state snapshot
    MissingSnapshot,
    /// The client's snapshot disagrees with the server's result
    StateMismatch { room_id: RoomId },
    /// The move itself was rejected by the rules
    Move(MoveError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::RoomNotFound { .. } => write!(f, "Room not found"),
            SessionError::RoomFull { .. } => write!(f, "Room is already full"),
            SessionError::TooManyRooms { limit } => {
                write!(f, "Room limit of {limit} reached")
            }
            SessionError::InvalidRoomName { name } => {
                write!(f, "Invalid room name '{name}'")
            }
            SessionError::AlreadySeated { room_id } => {
                write!(f, "Already seated in room {room_id}")
            }
            SessionError::NotSeated { room_id } => write!(f, "Not seated in room {room_id}"),
            SessionError::NotYourTurn { turn } => write!(f, "Not your turn, {turn} is on move"),
            SessionError::MissingSnapshot => write!(f, "Move is missing its game state"),
            SessionError::StateMismatch { room_id } => {
                write!(f, "Submitted game state does not match room {room_id}")
            }
            SessionError::Move(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Move(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveError> for SessionError {
    fn from(e: MoveError) -> Self {
        SessionError::Move(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;
    use std::error::Error;

    #[test]
    fn test_room_errors_match_client_wording() {
        let id = RoomId::from("abc");
        assert_eq!(
            SessionError::RoomNotFound { room_id: id.clone() }.to_string(),
            "Room not found"
        );
        assert_eq!(
            SessionError::RoomFull { room_id: id }.to_string(),
            "Room is already full"
        );
    }

    #[test]
    fn test_move_error_is_source() {
        let err = SessionError::from(MoveError::EmptySquare { at: Position(0, 0) });
        assert!(err.source().is_some());
        assert!(err.to_string().contains("a8"));
    }

    #[test]
    fn test_not_your_turn_names_side() {
        let err = SessionError::NotYourTurn { turn: Color::Black };
        assert!(err.to_string().contains("black"));
    }
}
