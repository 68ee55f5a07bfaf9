//! Messages exchanged between clients and the relay.
//!
//! With the `serde` feature these serialize as JSON objects tagged by a
//! `type` field (`CREATE_ROOM`, `MOVE`, `ROOMS_LIST`, ...) with camelCase
//! field names.

use std::time::SystemTime;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{PlayerId, RoomId};
use crate::board::{Color, Position};
use crate::game::GameState;

/// Lobby entry for one room.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RoomSummary {
    pub id: RoomId,
    pub name: String,
    pub has_white: bool,
    pub has_black: bool,
    /// Sent as milliseconds since the Unix epoch
    #[cfg_attr(feature = "serde", serde(with = "epoch_millis"))]
    pub created_at: SystemTime,
}

#[cfg(feature = "serde")]
mod epoch_millis {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = time
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        serializer.serialize_u64(u64::try_from(millis).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SystemTime, D::Error> {
        let millis = u64::deserialize(deserializer)?;
        Ok(UNIX_EPOCH + Duration::from_millis(millis))
    }
}

/// Source and destination of one move, the `move` object of `MOVE` messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveSquares {
    pub from: Position,
    pub to: Position,
}

impl MoveSquares {
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        MoveSquares { from, to }
    }
}

/// A move as submitted by a client, optionally carrying the client's
/// computed post-move state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSubmission {
    pub from: Position,
    pub to: Position,
    pub game_state: Option<GameState>,
}

impl MoveSubmission {
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        MoveSubmission {
            from,
            to,
            game_state: None,
        }
    }

    #[must_use]
    pub fn with_state(mut self, state: GameState) -> Self {
        self.game_state = Some(state);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum ClientMessage {
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    CreateRoom {
        name: String,
        preferred_color: Color,
    },
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    RequestJoin { room_id: RoomId },
    GetRooms,
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Move {
        room_id: RoomId,
        #[cfg_attr(feature = "serde", serde(rename = "move"))]
        squares: MoveSquares,
        #[cfg_attr(feature = "serde", serde(default))]
        game_state: Option<GameState>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum ServerMessage {
    RoomsList {
        rooms: Vec<RoomSummary>,
    },
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    RoomCreated {
        room_id: RoomId,
        name: String,
        color: Color,
    },
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    JoinedRoom {
        room_id: RoomId,
        name: String,
        color: Color,
    },
    OpponentJoined,
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    Move {
        #[cfg_attr(feature = "serde", serde(rename = "move"))]
        squares: MoveSquares,
        game_state: GameState,
    },
    #[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
    OpponentLeft {
        room_id: RoomId,
    },
    Error {
        message: String,
    },
}

/// A message addressed to one connected player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outgoing {
    pub to: PlayerId,
    pub message: ServerMessage,
}

impl Outgoing {
    #[must_use]
    pub const fn new(to: PlayerId, message: ServerMessage) -> Self {
        Outgoing { to, message }
    }
}
