//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod connection;
mod helpers;


use crate::schema::TenmileConfig;
use tenmile_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TenmileConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    connection::validate_connection(&mut errors, config);
    connection::validate_view(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
