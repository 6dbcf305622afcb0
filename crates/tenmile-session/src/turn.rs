//! Conversation turns.

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// How a turn's content should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnKind {
    #[default]
    Text,
    /// `content` is a media reference (usually a URL).
    Image,
}

/// One message exchanged between the user and the assistant.
///
/// Turns are immutable once created; the session only ever appends them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    sender: Sender,
    content: String,
    kind: TurnKind,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            content: content.into(),
            kind: TurnKind::Text,
        }
    }

    pub fn bot(content: impl Into<String>, kind: TurnKind) -> Self {
        Self {
            sender: Sender::Bot,
            content: content.into(),
            kind,
        }
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> TurnKind {
        self.kind
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}
