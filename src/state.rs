//! Connection lifecycle states.
//!
//! ```text
//! Disconnected --transport up--> Connected --001 (once)--> Registered
//!      ^                             |                         |
//!      +------- transport closed ----+-------------------------+
//! ```

use std::fmt;

/// Current state of a connection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ConnectionState {
    /// No transport attached.
    #[default]
    Disconnected,
    /// Transport established, registration not yet acknowledged.
    Connected,
    /// The server sent its welcome reply.
    Registered,
}

impl ConnectionState {
    /// Whether a transport is attached.
    #[inline]
    pub fn is_connected(&self) -> bool {
        !matches!(self, ConnectionState::Disconnected)
    }

    /// Whether registration has completed.
    #[inline]
    pub fn is_registered(&self) -> bool {
        matches!(self, ConnectionState::Registered)
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConnectionState::Disconnected => "disconnected",
            ConnectionState::Connected => "connected",
            ConnectionState::Registered => "registered",
        })
    }
}
