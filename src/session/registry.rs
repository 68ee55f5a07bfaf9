use std::collections::{BTreeSet, HashMap};
use std::time::SystemTime;

use parking_lot::Mutex;

use super::message::{ClientMessage, MoveSubmission, Outgoing, RoomSummary, ServerMessage};
use super::{PlayerId, RelayConfig, RoomId, SessionError, TrustPolicy};
use crate::board::{Color, MoveError};
use crate::game::GameState;
use crate::logging::relay_log;

struct Room {
    name: String,
    white: Option<PlayerId>,
    black: Option<PlayerId>,
    state: GameState,
    created_at: SystemTime,
    order: u64,
}

impl Room {
    fn seat(&self, color: Color) -> Option<PlayerId> {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    fn seat_mut(&mut self, color: Color) -> &mut Option<PlayerId> {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    fn seat_of(&self, player: PlayerId) -> Option<Color> {
        Color::BOTH
            .into_iter()
            .find(|&color| self.seat(color) == Some(player))
    }

    fn players(&self) -> impl Iterator<Item = PlayerId> {
        self.white.into_iter().chain(self.black)
    }

    fn summary(&self, id: &RoomId) -> RoomSummary {
        RoomSummary {
            id: id.clone(),
            name: self.name.clone(),
            has_white: self.white.is_some(),
            has_black: self.black.is_some(),
            created_at: self.created_at,
        }
    }
}

/// Result of taking a seat in a room.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JoinOutcome {
    pub color: Color,
    pub name: String,
    /// The player already seated, to be told about the newcomer
    pub opponent: Option<PlayerId>,
}

/// A room closed because one of its players left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Departure {
    pub room_id: RoomId,
    /// The remaining player, to be told the opponent left
    pub opponent: Option<PlayerId>,
}

#[derive(Default)]
struct Rooms {
    by_id: HashMap<RoomId, Room>,
    connected: BTreeSet<PlayerId>,
    next_order: u64,
}

impl Rooms {
    fn summaries(&self) -> Vec<RoomSummary> {
        let mut rooms: Vec<(&RoomId, &Room)> = self.by_id.iter().collect();
        rooms.sort_by_key(|(_, room)| room.order);
        rooms.into_iter().map(|(id, room)| room.summary(id)).collect()
    }

    fn rooms_list_broadcast(&self) -> Vec<Outgoing> {
        let rooms = self.summaries();
        self.connected
            .iter()
            .map(|&to| {
                Outgoing::new(
                    to,
                    ServerMessage::RoomsList {
                        rooms: rooms.clone(),
                    },
                )
            })
            .collect()
    }

    fn create_room(
        &mut self,
        config: &RelayConfig,
        player: PlayerId,
        name: &str,
        color: Color,
    ) -> Result<(RoomId, Color), SessionError> {
        let name = name.trim();
        if name.is_empty() || name.chars().count() > config.max_room_name_len {
            return Err(SessionError::InvalidRoomName {
                name: name.to_string(),
            });
        }
        if self.by_id.len() >= config.max_rooms {
            return Err(SessionError::TooManyRooms {
                limit: config.max_rooms,
            });
        }

        let mut rng = rand::thread_rng();
        let mut id = RoomId::random(&mut rng);
        while self.by_id.contains_key(&id) {
            id = RoomId::random(&mut rng);
        }

        let mut room = Room {
            name: name.to_string(),
            white: None,
            black: None,
            state: GameState::new(),
            created_at: SystemTime::now(),
            order: self.next_order,
        };
        *room.seat_mut(color) = Some(player);
        self.next_order += 1;
        self.by_id.insert(id.clone(), room);

        relay_log!(info, "{} created room {} ({}) as {}", player, id, name, color);
        Ok((id, color))
    }

    fn join_room(&mut self, player: PlayerId, room_id: &RoomId) -> Result<JoinOutcome, SessionError> {
        let room = self
            .by_id
            .get_mut(room_id)
            .ok_or_else(|| SessionError::RoomNotFound {
                room_id: room_id.clone(),
            })?;
        if room.seat_of(player).is_some() {
            return Err(SessionError::AlreadySeated {
                room_id: room_id.clone(),
            });
        }

        let color = Color::BOTH
            .into_iter()
            .find(|&color| room.seat(color).is_none())
            .ok_or_else(|| SessionError::RoomFull {
                room_id: room_id.clone(),
            })?;
        *room.seat_mut(color) = Some(player);

        relay_log!(info, "{} joined room {} as {}", player, room_id, color);
        Ok(JoinOutcome {
            color,
            name: room.name.clone(),
            opponent: room.seat(color.opponent()),
        })
    }

    fn submit_move(
        &mut self,
        config: &RelayConfig,
        player: PlayerId,
        room_id: &RoomId,
        submission: MoveSubmission,
    ) -> Result<GameState, SessionError> {
        let room = self
            .by_id
            .get_mut(room_id)
            .ok_or_else(|| SessionError::RoomNotFound {
                room_id: room_id.clone(),
            })?;
        let color = room.seat_of(player).ok_or_else(|| SessionError::NotSeated {
            room_id: room_id.clone(),
        })?;

        match config.trust_policy {
            TrustPolicy::Verify => {
                if room.state.is_over() {
                    return Err(MoveError::GameOver {
                        status: room.state.status,
                    }
                    .into());
                }
                if color != room.state.turn {
                    return Err(SessionError::NotYourTurn {
                        turn: room.state.turn,
                    });
                }

                let mut next = room.state.clone();
                next.apply_move(submission.from, submission.to)?;
                if let Some(claimed) = &submission.game_state {
                    if !snapshot_matches(claimed, &next) {
                        relay_log!(warn, "{} sent a mismatching state to room {}", player, room_id);
                        return Err(SessionError::StateMismatch {
                            room_id: room_id.clone(),
                        });
                    }
                }
                room.state = next;
            }
            TrustPolicy::TrustClient => {
                room.state = submission.game_state.ok_or(SessionError::MissingSnapshot)?;
            }
        }

        relay_log!(
            debug,
            "room {}: {} played {}{}, status {}",
            room_id,
            color,
            submission.from,
            submission.to,
            room.state.status
        );
        Ok(room.state.clone())
    }

    fn leave(&mut self, player: PlayerId) -> Vec<Departure> {
        let mut closed: Vec<(u64, RoomId)> = self
            .by_id
            .iter()
            .filter(|(_, room)| room.seat_of(player).is_some())
            .map(|(id, room)| (room.order, id.clone()))
            .collect();
        closed.sort();

        closed
            .into_iter()
            .filter_map(|(_, room_id)| {
                let room = self.by_id.remove(&room_id)?;
                let opponent = room.players().find(|&p| p != player);
                relay_log!(info, "{} left, closing room {}", player, room_id);
                Some(Departure { room_id, opponent })
            })
            .collect()
    }

    fn handle(&mut self, config: &RelayConfig, player: PlayerId, message: ClientMessage) -> Vec<Outgoing> {
        let result = match message {
            ClientMessage::CreateRoom {
                name,
                preferred_color,
            } => self
                .create_room(config, player, &name, preferred_color)
                .map(|(room_id, color)| {
                    let mut out = vec![Outgoing::new(
                        player,
                        ServerMessage::RoomCreated {
                            room_id,
                            name: name.trim().to_string(),
                            color,
                        },
                    )];
                    out.extend(self.rooms_list_broadcast());
                    out
                }),
            ClientMessage::RequestJoin { room_id } => {
                self.join_room(player, &room_id).map(|joined| {
                    let mut out = vec![Outgoing::new(
                        player,
                        ServerMessage::JoinedRoom {
                            room_id,
                            name: joined.name,
                            color: joined.color,
                        },
                    )];
                    if let Some(opponent) = joined.opponent {
                        out.push(Outgoing::new(opponent, ServerMessage::OpponentJoined));
                    }
                    out.extend(self.rooms_list_broadcast());
                    out
                })
            }
            ClientMessage::GetRooms => Ok(vec![Outgoing::new(
                player,
                ServerMessage::RoomsList {
                    rooms: self.summaries(),
                },
            )]),
            ClientMessage::Move {
                room_id,
                squares,
                game_state,
            } => {
                let submission = MoveSubmission {
                    from: squares.from,
                    to: squares.to,
                    game_state,
                };
                self.submit_move(config, player, &room_id, submission)
                    .map(|game_state| {
                        let players: Vec<PlayerId> = self
                            .by_id
                            .get(&room_id)
                            .map(|room| room.players().collect())
                            .unwrap_or_default();
                        players
                            .into_iter()
                            .map(|to_player| {
                                Outgoing::new(
                                    to_player,
                                    ServerMessage::Move {
                                        squares,
                                        game_state: game_state.clone(),
                                    },
                                )
                            })
                            .collect()
                    })
            }
        };

        result.unwrap_or_else(|err| {
            relay_log!(warn, "rejected request from {}: {}", player, err);
            vec![Outgoing::new(
                player,
                ServerMessage::Error {
                    message: err.to_string(),
                },
            )]
        })
    }

    fn disconnect(&mut self, player: PlayerId) -> Vec<Outgoing> {
        self.connected.remove(&player);
        let departures = self.leave(player);
        if departures.is_empty() {
            return Vec::new();
        }

        let mut out: Vec<Outgoing> = departures
            .into_iter()
            .filter_map(|departure| {
                departure.opponent.map(|opponent| {
                    Outgoing::new(
                        opponent,
                        ServerMessage::OpponentLeft {
                            room_id: departure.room_id,
                        },
                    )
                })
            })
            .collect();
        out.extend(self.rooms_list_broadcast());
        out
    }
}

/// Clients may omit the derived fields, so only board, turn and status are
/// compared.
fn snapshot_matches(claimed: &GameState, actual: &GameState) -> bool {
    claimed.board == actual.board && claimed.turn == actual.turn && claimed.status == actual.status
}

/// Registry of open rooms, safe to share between connection handlers.
///
/// Every call takes the registry lock once, so submissions to the same room
/// are applied one at a time.
pub struct RoomRegistry {
    config: RelayConfig,
    rooms: Mutex<Rooms>,
}

impl RoomRegistry {
    #[must_use]
    pub fn new(config: RelayConfig) -> Self {
        RoomRegistry {
            config,
            rooms: Mutex::new(Rooms::default()),
        }
    }

    #[must_use]
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Register a connection and return its initial lobby listing.
    pub fn connect(&self, player: PlayerId) -> Vec<Outgoing> {
        let mut rooms = self.rooms.lock();
        rooms.connected.insert(player);
        relay_log!(debug, "{} connected", player);
        vec![Outgoing::new(
            player,
            ServerMessage::RoomsList {
                rooms: rooms.summaries(),
            },
        )]
    }

    /// Drop a connection, closing its rooms and notifying opponents.
    pub fn disconnect(&self, player: PlayerId) -> Vec<Outgoing> {
        relay_log!(debug, "{} disconnected", player);
        self.rooms.lock().disconnect(player)
    }

    /// Process one client message and return the messages to deliver.
    ///
    /// Rejected requests produce a single `Error` message to the sender.
    pub fn handle(&self, player: PlayerId, message: ClientMessage) -> Vec<Outgoing> {
        self.rooms.lock().handle(&self.config, player, message)
    }

    /// Open a room with `player` seated as `color`.
    pub fn create_room(
        &self,
        player: PlayerId,
        name: &str,
        color: Color,
    ) -> Result<(RoomId, Color), SessionError> {
        self.rooms.lock().create_room(&self.config, player, name, color)
    }

    /// Seat `player` in the free seat, White first.
    pub fn join_room(&self, player: PlayerId, room_id: &RoomId) -> Result<JoinOutcome, SessionError> {
        self.rooms.lock().join_room(player, room_id)
    }

    /// Apply a move under the configured trust policy and return the room's
    /// new state.
    pub fn submit_move(
        &self,
        player: PlayerId,
        room_id: &RoomId,
        submission: MoveSubmission,
    ) -> Result<GameState, SessionError> {
        self.rooms
            .lock()
            .submit_move(&self.config, player, room_id, submission)
    }

    /// Close every room `player` sits in.
    pub fn leave(&self, player: PlayerId) -> Vec<Departure> {
        self.rooms.lock().leave(player)
    }

    /// Open rooms in creation order.
    #[must_use]
    pub fn list_rooms(&self) -> Vec<RoomSummary> {
        self.rooms.lock().summaries()
    }

    #[must_use]
    pub fn game_state(&self, room_id: &RoomId) -> Option<GameState> {
        self.rooms.lock().by_id.get(room_id).map(|room| room.state.clone())
    }

    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.lock().by_id.len()
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        RoomRegistry::new(RelayConfig::default())
    }
}
