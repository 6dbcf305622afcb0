//! Conversation view: pending input plus a renderer for session state.
//!
//! The view holds no conversation state of its own. Everything it shows
//! comes from the [`Session`] passed to [`ConversationView::render`].

mod render;
mod segments;

use tenmile_config::ViewConfig;
use tenmile_session::Session;

/// Prompt command that starts a new chat.
pub const NEW_CHAT_COMMAND: &str = "/new";
/// Prompt command that exits.
pub const QUIT_COMMAND: &str = "/quit";

/// What the app should do after the user submits the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    Send(String),
    NewChat,
    Quit,
    Nothing,
}

pub struct ConversationView {
    config: ViewConfig,
    input: String,
}

impl ConversationView {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config,
            input: String::new(),
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    #[cfg(test)]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Submit the pending input. Blank input is left in place and yields
    /// [`ViewAction::Nothing`]; anything else clears it.
    pub fn submit(&mut self) -> ViewAction {
        match self.input.trim() {
            "" => ViewAction::Nothing,
            NEW_CHAT_COMMAND => self.new_chat(),
            QUIT_COMMAND => {
                self.input.clear();
                ViewAction::Quit
            }
            _ => ViewAction::Send(std::mem::take(&mut self.input)),
        }
    }

    /// Clear the pending input and request a session reset.
    pub fn new_chat(&mut self) -> ViewAction {
        self.input.clear();
        ViewAction::NewChat
    }

    pub fn render(&self, session: &Session) -> String {
        render::render_session(&self.config, session)
    }
}
