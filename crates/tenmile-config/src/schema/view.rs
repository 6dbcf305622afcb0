//! Conversation view configuration types.

use serde::{Deserialize, Serialize};

/// How the conversation is presented in the terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Bot line shown above every conversation. Not part of the turn list.
    pub greeting: String,
    /// Label shown next to user turns.
    pub user_initials: String,
    /// Show a typing line while a reply is pending.
    pub show_pending_indicator: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            greeting: "How can I help you?".into(),
            user_initials: "AZ".into(),
            show_pending_indicator: true,
        }
    }
}
