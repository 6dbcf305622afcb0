//! Prompt lines, read on a dedicated thread.
//!
//! A blocking read of stdin cannot be cancelled. Running it on a plain
//! thread outside the runtime means shutting down never waits for the
//! user to press Enter.

use std::io::BufRead;

use tokio::sync::mpsc;
use tracing::error;

pub(super) type InputLine = std::io::Result<String>;

/// Start the reader. The channel closes on end of input or after a read error.
pub(super) fn spawn_stdin_reader() -> mpsc::Receiver<InputLine> {
    let (tx, rx) = mpsc::channel(16);
    let spawned = std::thread::Builder::new()
        .name("tenmile-stdin".into())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let failed = line.is_err();
                if tx.blocking_send(line).is_err() || failed {
                    break;
                }
            }
        });
    if let Err(e) = spawned {
        error!(error = %e, "failed to start input reader");
    }
    rx
}
