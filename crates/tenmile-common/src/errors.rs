use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("websocket endpoint is not configured")]
    EndpointUnset,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("malformed inbound payload: {0}")]
    MalformedPayload(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("connection.endpoint".into());
        assert_eq!(
            err.to_string(),
            "config validation error: connection.endpoint"
        );
    }

    #[test]
    fn chat_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let chat_err: ChatError = config_err.into();
        assert!(matches!(chat_err, ChatError::Config(_)));
        assert!(chat_err.to_string().contains("bad toml"));
    }

    #[test]
    fn chat_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin gone");
        let chat_err: ChatError = io_err.into();
        assert!(matches!(chat_err, ChatError::Io(_)));
        assert!(chat_err.to_string().contains("stdin gone"));
    }

    #[test]
    fn chat_error_other_variants() {
        assert_eq!(
            ChatError::EndpointUnset.to_string(),
            "websocket endpoint is not configured"
        );

        let err = ChatError::Connection("refused".into());
        assert_eq!(err.to_string(), "connection error: refused");

        let err = ChatError::MalformedPayload("expected value at line 1".into());
        assert_eq!(
            err.to_string(),
            "malformed inbound payload: expected value at line 1"
        );
    }
}
