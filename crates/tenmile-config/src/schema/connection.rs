use serde::{Deserialize, Serialize};
use tenmile_common::{ChatError, SessionId, DEFAULT_SESSION_ID};

/// Where and how to reach the chat backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Base WebSocket URL, e.g. `wss://chat.example.com`. Empty means unset.
    pub endpoint: String,
    /// Session used when none is supplied on the command line or query string.
    pub default_session_id: String,
    /// Handshake timeout in seconds (valid range: 1-120).
    pub connect_timeout_secs: u64,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            default_session_id: DEFAULT_SESSION_ID.into(),
            connect_timeout_secs: 15,
        }
    }
}

impl ConnectionConfig {
    pub fn is_endpoint_set(&self) -> bool {
        !self.endpoint.trim().is_empty()
    }

    /// Build `<endpoint>/chat/<session>`.
    pub fn chat_url(&self, session: &SessionId) -> Result<String, ChatError> {
        if !self.is_endpoint_set() {
            return Err(ChatError::EndpointUnset);
        }
        let base = self.endpoint.trim().trim_end_matches('/');
        Ok(format!("{base}/chat/{}", urlencoding::encode(session.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_url_joins_endpoint_and_session() {
        let config = ConnectionConfig {
            endpoint: "wss://chat.example.com".into(),
            ..Default::default()
        };
        let url = config.chat_url(&SessionId::new("42")).unwrap();
        assert_eq!(url, "wss://chat.example.com/chat/42");
    }

    #[test]
    fn chat_url_tolerates_trailing_slash() {
        let config = ConnectionConfig {
            endpoint: "ws://localhost:8000/".into(),
            ..Default::default()
        };
        let url = config.chat_url(&SessionId::default()).unwrap();
        assert_eq!(url, "ws://localhost:8000/chat/1");
    }

    #[test]
    fn chat_url_escapes_session_segment() {
        let config = ConnectionConfig {
            endpoint: "ws://localhost:8000".into(),
            ..Default::default()
        };
        let url = config.chat_url(&SessionId::new("a b/c")).unwrap();
        assert_eq!(url, "ws://localhost:8000/chat/a%20b%2Fc");
    }

    #[test]
    fn chat_url_without_endpoint_is_an_error() {
        let config = ConnectionConfig {
            endpoint: "   ".into(),
            ..Default::default()
        };
        let err = config.chat_url(&SessionId::default()).unwrap_err();
        assert!(matches!(err, ChatError::EndpointUnset));
    }
}
