//! Wire format spoken with the chat backend.
//!
//! Outbound frames are `{"content": "..."}`. Inbound frames carry at least
//! `content`; `"type": "image"` marks a media reference, anything else (or
//! no `type` at all) is plain text.

use serde::{Deserialize, Serialize};
use tenmile_common::ChatError;

use crate::turn::{Turn, TurnKind};

/// A user message as sent to the backend.
#[derive(Debug, Serialize)]
pub struct OutboundMessage<'a> {
    pub content: &'a str,
}

/// A reply as received from the backend.
#[derive(Debug, Deserialize)]
pub struct InboundMessage {
    pub content: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl InboundMessage {
    pub fn into_turn(self) -> Turn {
        let kind = match self.kind.as_deref() {
            Some("image") => TurnKind::Image,
            _ => TurnKind::Text,
        };
        Turn::bot(self.content, kind)
    }
}

pub fn encode_outbound(content: &str) -> Result<String, ChatError> {
    serde_json::to_string(&OutboundMessage { content })
        .map_err(|e| ChatError::MalformedPayload(e.to_string()))
}

/// Parse an inbound frame into a bot turn.
pub fn decode_inbound(text: &str) -> Result<Turn, ChatError> {
    serde_json::from_str::<InboundMessage>(text)
        .map(InboundMessage::into_turn)
        .map_err(|e| ChatError::MalformedPayload(e.to_string()))
}
