//! Session state: turns, connection readiness, and the pending-reply flag.
//!
//! All mutation happens through `&mut self`, so the owner's event loop is
//! the only writer and no locking is involved.

use std::time::Duration;

use tenmile_common::{ChatError, SessionId};
use tenmile_config::ConnectionConfig;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::connection::{CloseReason, Connection, ConnectionState, SessionEvent};
use crate::turn::Turn;

/// One logical conversation bound to at most one connection.
///
/// `pending_reply` is raised by [`send`](Self::send) and lowered only by the
/// next bot turn or by [`reset`](Self::reset). A connection that closes
/// while a reply is pending leaves the flag raised; there is no reconnect
/// and no reply timeout.
#[derive(Debug)]
pub struct Session {
    identifier: SessionId,
    connection_state: ConnectionState,
    pending_reply: bool,
    turns: Vec<Turn>,
    connection: Option<Connection>,
}

impl Session {
    /// A session with no connection.
    pub fn new(identifier: SessionId) -> Self {
        Self {
            identifier,
            connection_state: ConnectionState::Closed,
            pending_reply: false,
            turns: Vec::new(),
            connection: None,
        }
    }

    /// Create a session and dial `<endpoint>/chat/<identifier>`.
    ///
    /// An unset endpoint is logged and leaves the session closed with no
    /// event receiver.
    pub fn open(
        config: &ConnectionConfig,
        identifier: SessionId,
    ) -> (Self, Option<mpsc::Receiver<SessionEvent>>) {
        let mut session = Self::new(identifier);
        match config.chat_url(&session.identifier) {
            Ok(url) => {
                let timeout = Duration::from_secs(config.connect_timeout_secs);
                let (connection, events) = Connection::spawn(url, timeout);
                session.attach(connection);
                (session, Some(events))
            }
            Err(e) => {
                error!(error = %e, session = %session.identifier, "not connecting");
                (session, None)
            }
        }
    }

    /// Bind a connection whose handshake is in flight.
    pub fn attach(&mut self, connection: Connection) {
        self.connection = Some(connection);
        self.connection_state = ConnectionState::Connecting;
    }

    pub fn identifier(&self) -> &SessionId {
        &self.identifier
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connection_state
    }

    pub fn pending_reply(&self) -> bool {
        self.pending_reply
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Transmit `text` and append it as a user turn.
    ///
    /// Whitespace-only input is ignored and `false` is returned. A failed
    /// transmit is logged; the turn is still appended.
    pub fn send(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        match &self.connection {
            Some(connection) => {
                if let Err(e) = connection.transmit(text) {
                    warn!(error = %e, session = %self.identifier, "message not transmitted");
                }
            }
            None => warn!(session = %self.identifier, "no connection, message not transmitted"),
        }

        self.turns.push(Turn::user(text));
        self.pending_reply = true;
        true
    }

    /// Apply one event from the connection task.
    ///
    /// Returns an error when the backend sent a frame that could not be
    /// parsed; the session is already closed at that point.
    pub fn handle_event(&mut self, event: SessionEvent) -> Result<(), ChatError> {
        match event {
            SessionEvent::ConnectionOpened => {
                // A handshake that finishes after close() must not reopen.
                if self.connection.is_some() {
                    self.connection_state = ConnectionState::Open;
                } else {
                    debug!(session = %self.identifier, "late open after close ignored");
                }
                Ok(())
            }
            SessionEvent::TurnReceived(turn) => {
                self.turns.push(turn);
                self.pending_reply = false;
                Ok(())
            }
            SessionEvent::ConnectionClosed(reason) => {
                self.connection_state = ConnectionState::Closed;
                self.connection = None;
                match reason {
                    CloseReason::Fault(message) => Err(ChatError::MalformedPayload(message)),
                    CloseReason::Failed(message) => {
                        warn!(session = %self.identifier, %message, "connection failed");
                        Ok(())
                    }
                    other => {
                        info!(session = %self.identifier, reason = ?other, "connection closed");
                        Ok(())
                    }
                }
            }
        }
    }

    /// Start a new chat: drop all turns and the pending flag. The
    /// connection is left as it is.
    pub fn reset(&mut self) {
        debug!(session = %self.identifier, cleared = self.turns.len(), "session reset");
        self.turns.clear();
        self.pending_reply = false;
    }

    /// Close the connection, if any. The final `ConnectionClosed` event
    /// still arrives on the receiver.
    pub fn close(&mut self) {
        if let Some(connection) = self.connection.take() {
            connection.close();
        }
        self.connection_state = ConnectionState::Closed;
    }
}
