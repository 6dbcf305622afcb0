//! Prompt input: turn a submitted line into a session action.

use tenmile_session::ConnectionState;
use tracing::{debug, info};

use super::core::ChatApp;
use crate::view::ViewAction;

/// Whether the event loop keeps going after a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flow {
    Continue,
    Exit,
}

impl ChatApp {
    pub(super) fn handle_line(&mut self, line: String) -> Flow {
        self.view.set_input(line);
        match self.view.submit() {
            ViewAction::Send(text) => {
                if self.session.connection_state() != ConnectionState::Open {
                    debug!(state = %self.session.connection_state(), "sending while not open");
                }
                self.session.send(&text);
                Flow::Continue
            }
            ViewAction::NewChat => {
                info!(session = %self.session.identifier(), "starting a new chat");
                self.session.reset();
                Flow::Continue
            }
            ViewAction::Quit => Flow::Exit,
            ViewAction::Nothing => Flow::Continue,
        }
    }
}
