//! Single WebSocket connection to the chat backend.
//!
//! The socket lives in a background task started by [`Connection::spawn`].
//! The returned [`Connection`] is the only way to reach it: outbound frames
//! go through its command channel, inbound traffic comes back as
//! [`SessionEvent`]s. There is no reconnect; once the task reports
//! [`SessionEvent::ConnectionClosed`] the handle is spent.

mod client;
mod handler;
mod task;
mod types;

pub use client::Connection;
pub use types::{CloseReason, ConnectionState, SessionEvent};
#[cfg(test)]
pub(crate) use types::ConnectionCommand;
