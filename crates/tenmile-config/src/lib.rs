//! Tenmile configuration system.
//!
//! TOML-based configuration with environment overrides and validation.
//! All config sections use sensible defaults so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tenmile_config::{load_config, config_to_json};
//!
//! let config = load_config(None, None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod overrides;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use overrides::{resolve_session_id, session_id_from_query, ENDPOINT_ENV};
pub use schema::{
    ConnectionConfig, LogLevel, LoggingConfig, TenmileConfig, ViewConfig, CONFIG_SCHEMA_VERSION,
};

use std::path::Path;
use tenmile_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// Applies the environment override, then `endpoint` (the command-line
/// value), and validates the result last so overrides are checked too.
pub fn load_config(
    path: Option<&Path>,
    endpoint: Option<&str>,
) -> Result<TenmileConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    overrides::apply_env(&mut config);
    overrides::apply_endpoint_override(&mut config, endpoint.map(str::to_string));
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TenmileConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&TenmileConfig::default());
        assert!(json.contains("\"connection\""));
        assert!(json.contains("\"view\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_rejects_invalid_file() {
        if std::env::var(ENDPOINT_ENV).is_ok() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[connection]
endpoint = "http://not-a-socket"
"#,
        )
        .unwrap();

        let err = load_config(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn endpoint_argument_replaces_bad_file_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[connection]\nendpoint = \"http://not-a-socket\"\n").unwrap();

        let config = load_config(Some(&path), Some("ws://localhost:8000")).unwrap();
        assert_eq!(config.connection.endpoint, "ws://localhost:8000");
    }

    #[test]
    fn endpoint_argument_is_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let err = load_config(Some(&path), Some("https://example.com")).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&TenmileConfig::default());
        let parsed: TenmileConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.connection.default_session_id, "1");
        assert_eq!(parsed.view.user_initials, "AZ");
    }
}
