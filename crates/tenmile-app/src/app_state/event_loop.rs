//! The main loop: prompt lines in, session events in, redraw after each.

use tenmile_common::ChatError;
use tokio::sync::mpsc;
use tracing::info;

use super::core::ChatApp;
use super::input::Flow;
use super::polling::recv_event;
use super::stdin::{spawn_stdin_reader, InputLine};

impl ChatApp {
    /// Run until stdin closes, the user quits, or the session faults.
    pub async fn run(self) -> Result<(), ChatError> {
        self.run_with_input(spawn_stdin_reader()).await
    }

    pub(super) async fn run_with_input(
        mut self,
        mut input: mpsc::Receiver<InputLine>,
    ) -> Result<(), ChatError> {
        self.redraw()?;

        let result = loop {
            tokio::select! {
                event = recv_event(&mut self.events) => {
                    if let Err(e) = self.apply_event(event) {
                        break Err(e);
                    }
                }
                line = input.recv() => match line {
                    Some(Ok(line)) => {
                        if self.handle_line(line) == Flow::Exit {
                            break Ok(());
                        }
                    }
                    Some(Err(e)) => break Err(ChatError::Io(e)),
                    None => {
                        info!("input closed");
                        break Ok(());
                    }
                },
            }
            if let Err(e) = self.redraw() {
                break Err(ChatError::Io(e));
            }
        };

        self.shutdown().await;
        result
    }
}
