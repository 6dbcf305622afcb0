//! Shutdown: close the connection and wait for the close to go out.

use std::time::Duration;

use tenmile_session::SessionEvent;
use tracing::{info, warn};

use super::core::ChatApp;

/// How long to wait for the connection task to confirm the close.
const CLOSE_GRACE: Duration = Duration::from_secs(2);

impl ChatApp {
    /// Close the session's connection and wait, bounded by [`CLOSE_GRACE`],
    /// for the task to report `ConnectionClosed`. The close frame has been
    /// written by then. Safe to call more than once.
    pub(super) async fn shutdown(&mut self) {
        self.session.close();

        if let Some(mut events) = self.events.take() {
            let closed = tokio::time::timeout(CLOSE_GRACE, async {
                while let Some(event) = events.recv().await {
                    if matches!(event, SessionEvent::ConnectionClosed(_)) {
                        break;
                    }
                }
            })
            .await;
            if closed.is_err() {
                warn!(
                    "connection did not close within {}s",
                    CLOSE_GRACE.as_secs()
                );
            }
        }

        info!(session = %self.session.identifier(), "shutdown complete");
    }
}
