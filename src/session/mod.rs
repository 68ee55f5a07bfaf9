//! In-memory room relay.
//!
//! Pairs two players into a room and forwards moves between them. Transport
//! is left to the caller: every operation takes a `PlayerId` chosen by the
//! connection layer and returns the messages to deliver.
//!
//! # Example
//! ```
//! use chess_relay::board::{Color, Position};
//! use chess_relay::session::{MoveSubmission, PlayerId, RelayConfig, RoomRegistry};
//!
//! let relay = RoomRegistry::new(RelayConfig::default());
//! let (alice, bob) = (PlayerId(1), PlayerId(2));
//! let (room, _) = relay.create_room(alice, "casual", Color::White).unwrap();
//! relay.join_room(bob, &room).unwrap();
//!
//! let e2 = "e2".parse::<Position>().unwrap();
//! let e4 = "e4".parse::<Position>().unwrap();
//! let state = relay.submit_move(alice, &room, MoveSubmission::new(e2, e4)).unwrap();
//! assert_eq!(state.turn, Color::Black);
//! ```

mod config;
mod error;
mod message;
mod registry;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use config::{RelayConfig, TrustPolicy};
pub use error::SessionError;
pub use message::{
    ClientMessage, MoveSquares, MoveSubmission, Outgoing, RoomSummary, ServerMessage,
};
pub use registry::{Departure, JoinOutcome, RoomRegistry};

/// Identity of a connected client, assigned by the transport layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player#{}", self.0)
    }
}

/// Opaque room identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RoomId(String);

impl RoomId {
    /// A fresh random 128-bit id rendered as hex.
    #[must_use]
    pub(crate) fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        RoomId(format!("{:032x}", rng.gen::<u128>()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(s: &str) -> Self {
        RoomId(s.to_string())
    }
}

impl From<String> for RoomId {
    fn from(s: String) -> Self {
        RoomId(s)
    }
}
