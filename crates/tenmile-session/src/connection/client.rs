//! Public handle for the background connection task.

use std::time::Duration;

use tenmile_common::ChatError;
use tokio::sync::mpsc;

use super::task::connection_task;
use super::types::{ConnectionCommand, SessionEvent};
use crate::protocol::encode_outbound;

/// Owned handle to one WebSocket connection.
///
/// Dropping the handle closes the command channel, which makes the task
/// send a close frame and exit.
#[derive(Debug)]
pub struct Connection {
    command_tx: mpsc::UnboundedSender<ConnectionCommand>,
}

impl Connection {
    /// Start the connection task for `url`.
    /// Returns `(connection, event_receiver)`.
    pub fn spawn(url: String, connect_timeout: Duration) -> (Self, mpsc::Receiver<SessionEvent>) {
        let (event_tx, event_rx) = mpsc::channel(256);
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        tokio::spawn(connection_task(url, connect_timeout, event_tx, command_rx));

        (Self { command_tx }, event_rx)
    }

    /// Serialize `content` as an outbound message and queue it for the socket.
    pub fn transmit(&self, content: &str) -> Result<(), ChatError> {
        let frame = encode_outbound(content)?;
        self.command_tx
            .send(ConnectionCommand::Transmit(frame))
            .map_err(|_| ChatError::Connection("connection task has exited".into()))
    }

    /// Ask the task to close the socket. Idempotent.
    pub fn close(&self) {
        let _ = self.command_tx.send(ConnectionCommand::Close);
    }

    /// A handle wired to a bare channel instead of a socket.
    #[cfg(test)]
    pub(crate) fn detached() -> (Self, mpsc::UnboundedReceiver<ConnectionCommand>) {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        (Self { command_tx }, command_rx)
    }
}
