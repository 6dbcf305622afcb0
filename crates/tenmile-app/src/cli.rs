use std::path::PathBuf;

use clap::Parser;

/// Tenmile: a terminal chat client for a WebSocket assistant backend.
#[derive(Parser, Debug)]
#[command(name = "tenmile", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base WebSocket URL of the chat backend (overrides config and environment).
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Session to join.
    #[arg(short = 's', long)]
    pub session_id: Option<String>,

    /// Page query string to take `sessionId` from, e.g. "?sessionId=abc".
    #[arg(long)]
    pub query: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_session_flags() {
        let args = Args::parse_from([
            "tenmile",
            "--endpoint",
            "ws://localhost:8000",
            "-s",
            "room-7",
            "--query",
            "?sessionId=ignored",
        ]);
        assert_eq!(args.endpoint.as_deref(), Some("ws://localhost:8000"));
        assert_eq!(args.session_id.as_deref(), Some("room-7"));
        assert_eq!(args.query.as_deref(), Some("?sessionId=ignored"));
        assert!(!args.print_config);
    }

    #[test]
    fn defaults_are_empty() {
        let args = Args::parse_from(["tenmile"]);
        assert!(args.config.is_none());
        assert!(args.endpoint.is_none());
        assert!(args.log_level.is_none());
    }
}
