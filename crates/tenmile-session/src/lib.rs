//! Session client for the Tenmile chat backend.
//!
//! A [`Session`] owns one WebSocket [`Connection`] to
//! `<endpoint>/chat/<session>`, the ordered list of [`Turn`]s exchanged on
//! it, and the `pending_reply` flag. Inbound traffic arrives as
//! [`SessionEvent`]s which the owner feeds back through
//! [`Session::handle_event`].

pub mod connection;
pub mod protocol;
pub mod session;
pub mod turn;

pub use connection::{CloseReason, Connection, ConnectionState, SessionEvent};
pub use protocol::{decode_inbound, encode_outbound, InboundMessage, OutboundMessage};
pub use session::Session;
pub use turn::{Sender, Turn, TurnKind};
