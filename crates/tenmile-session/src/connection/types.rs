//! Connection state, inbound events, and the internal command enum.

use std::fmt;

use crate::turn::Turn;

/// Readiness of the session's connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Handshake in flight.
    Connecting,
    Open,
    /// Closed, failed, or never attempted.
    Closed,
}

impl ConnectionState {
    pub fn as_str(self) -> &'static str {
        match self {
            ConnectionState::Connecting => "connecting",
            ConnectionState::Open => "open",
            ConnectionState::Closed => "closed",
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a connection ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseReason {
    /// The backend closed the socket or the stream ended.
    Remote,
    /// We closed it (explicit close or the handle was dropped).
    Local,
    /// Handshake failure, timeout, or a transport error.
    Failed(String),
    /// The backend sent a frame that is not a turn descriptor.
    Fault(String),
}

/// Events emitted by the connection task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// WebSocket handshake completed.
    ConnectionOpened,
    /// A reply from the backend, already decoded.
    TurnReceived(Turn),
    /// The connection is gone; no further events follow.
    ConnectionClosed(CloseReason),
}

/// Commands sent from the handle to the connection task.
#[derive(Debug)]
pub(crate) enum ConnectionCommand {
    /// A serialized outbound frame.
    Transmit(String),
    Close,
}
