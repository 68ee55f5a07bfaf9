//! Relay configuration.

/// How far the relay trusts a move submitted by a client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TrustPolicy {
    /// Re-run the rules on every move and keep the server's board
    /// authoritative. Client snapshots that disagree are rejected.
    #[default]
    Verify,
    /// Store and forward the client's snapshot verbatim.
    TrustClient,
}

#[derive(Clone, Debug)]
pub struct RelayConfig {
    pub trust_policy: TrustPolicy,
    /// Upper bound on concurrently open rooms
    pub max_rooms: usize,
    /// Maximum room name length in characters
    pub max_room_name_len: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        RelayConfig {
            trust_policy: TrustPolicy::Verify,
            max_rooms: 1024,
            max_room_name_len: 64,
        }
    }
}

impl RelayConfig {
    #[must_use]
    pub const fn with_trust_policy(mut self, policy: TrustPolicy) -> Self {
        self.trust_policy = policy;
        self
    }

    #[must_use]
    pub const fn with_max_rooms(mut self, max_rooms: usize) -> Self {
        self.max_rooms = max_rooms;
        self
    }
}
