use serde::{Deserialize, Serialize};
use std::fmt;

/// Session used when neither the command line nor the query string names one.
pub const DEFAULT_SESSION_ID: &str = "1";

/// Identifier of one logical conversation, the last path segment of
/// `<endpoint>/chat/<id>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_ID)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_default_is_placeholder() {
        let sid = SessionId::default();
        assert_eq!(sid.as_str(), DEFAULT_SESSION_ID);
    }

    #[test]
    fn session_id_display() {
        let sid = SessionId::new("abc-123");
        assert_eq!(sid.to_string(), "abc-123");
    }

    #[test]
    fn session_id_serializes_as_plain_string() {
        let sid = SessionId::new("room");
        let json = serde_json::to_string(&sid).unwrap();
        assert_eq!(json, "\"room\"");
        let back: SessionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sid);
    }
}
