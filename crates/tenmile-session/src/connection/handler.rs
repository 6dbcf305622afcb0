//! Classification of frames read from the socket.

use tokio_tungstenite::tungstenite::{Error as WsError, Message as WsMessage};
use tracing::{debug, error};

use super::types::CloseReason;
use crate::protocol::decode_inbound;
use crate::turn::Turn;

/// What the read loop should do with one frame.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum FrameOutcome {
    Turn(Turn),
    Ignore,
    Closed(CloseReason),
}

/// Handle a single item from the read half of the socket.
///
/// `None` means the stream ended without a close frame.
pub(crate) fn handle_frame(frame: Option<Result<WsMessage, WsError>>) -> FrameOutcome {
    match frame {
        Some(Ok(WsMessage::Text(text))) => decode(text.as_str()),
        Some(Ok(WsMessage::Binary(bytes))) => match std::str::from_utf8(&bytes) {
            Ok(text) => decode(text),
            Err(e) => {
                error!(error = %e, "binary frame is not UTF-8");
                FrameOutcome::Closed(CloseReason::Fault(format!("binary frame is not UTF-8: {e}")))
            }
        },
        Some(Ok(WsMessage::Close(frame))) => {
            debug!(frame = ?frame, "backend sent close frame");
            FrameOutcome::Closed(CloseReason::Remote)
        }
        Some(Ok(_)) => FrameOutcome::Ignore,
        Some(Err(e)) => FrameOutcome::Closed(CloseReason::Failed(e.to_string())),
        None => FrameOutcome::Closed(CloseReason::Remote),
    }
}

fn decode(text: &str) -> FrameOutcome {
    match decode_inbound(text) {
        Ok(turn) => {
            debug!(kind = ?turn.kind(), len = turn.content().len(), "turn received");
            FrameOutcome::Turn(turn)
        }
        Err(e) => {
            error!(error = %e, "unparseable frame from backend");
            FrameOutcome::Closed(CloseReason::Fault(e.to_string()))
        }
    }
}
