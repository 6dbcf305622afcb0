//! Background task that owns the socket.

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tracing::{error, info, warn};

use super::handler::{handle_frame, FrameOutcome};
use super::types::{CloseReason, ConnectionCommand, SessionEvent};

/// Connect once, then pump commands out and frames in until either side
/// closes. Always finishes with exactly one `ConnectionClosed` event.
pub(crate) async fn connection_task(
    url: String,
    connect_timeout: Duration,
    event_tx: mpsc::Sender<SessionEvent>,
    mut command_rx: mpsc::UnboundedReceiver<ConnectionCommand>,
) {
    info!(url = %url, "connecting to chat backend");

    let ws_stream =
        match tokio::time::timeout(connect_timeout, tokio_tungstenite::connect_async(&url)).await {
            Ok(Ok((ws_stream, _))) => ws_stream,
            Ok(Err(e)) => {
                error!(error = %e, "failed to connect to chat backend");
                let _ = event_tx
                    .send(SessionEvent::ConnectionClosed(CloseReason::Failed(format!(
                        "connection failed: {e}"
                    ))))
                    .await;
                return;
            }
            Err(_elapsed) => {
                let secs = connect_timeout.as_secs();
                error!("websocket connection timed out after {secs}s");
                let _ = event_tx
                    .send(SessionEvent::ConnectionClosed(CloseReason::Failed(format!(
                        "connection timed out after {secs}s"
                    ))))
                    .await;
                return;
            }
        };

    info!("chat connection open");
    let _ = event_tx.send(SessionEvent::ConnectionOpened).await;

    let (mut ws_write, mut ws_read) = ws_stream.split();

    let reason = loop {
        tokio::select! {
            command = command_rx.recv() => match command {
                Some(ConnectionCommand::Transmit(frame)) => {
                    if let Err(e) = ws_write.send(WsMessage::Text(frame.into())).await {
                        warn!(error = %e, "websocket send failed");
                        break CloseReason::Failed(e.to_string());
                    }
                }
                // A dropped handle closes the same way as an explicit close.
                Some(ConnectionCommand::Close) | None => {
                    let _ = ws_write.send(WsMessage::Close(None)).await;
                    break CloseReason::Local;
                }
            },
            frame = ws_read.next() => match handle_frame(frame) {
                FrameOutcome::Turn(turn) => {
                    let _ = event_tx.send(SessionEvent::TurnReceived(turn)).await;
                }
                FrameOutcome::Ignore => {}
                FrameOutcome::Closed(reason) => break reason,
            },
        }
    };

    info!(reason = ?reason, "chat connection closed");
    let _ = event_tx.send(SessionEvent::ConnectionClosed(reason)).await;
}
