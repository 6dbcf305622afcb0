//! Validation for the `[connection]` and `[view]` sections.

use crate::schema::TenmileConfig;

use super::helpers::{validate_non_empty, validate_range};

const WS_SCHEMES: [&str; 2] = ["ws://", "wss://"];

/// Validate connection constraints. An empty endpoint is allowed; the
/// client logs and skips the connection in that case.
pub(crate) fn validate_connection(errors: &mut Vec<String>, config: &TenmileConfig) {
    let endpoint = config.connection.endpoint.trim();
    if !endpoint.is_empty() && !WS_SCHEMES.iter().any(|s| endpoint.starts_with(s)) {
        errors.push(format!(
            "connection.endpoint = {endpoint:?} must start with ws:// or wss://"
        ));
    }
    validate_non_empty(
        errors,
        "connection.default_session_id",
        &config.connection.default_session_id,
    );
    validate_range(
        errors,
        "connection.connect_timeout_secs",
        config.connection.connect_timeout_secs,
        1,
        120,
    );
}

pub(crate) fn validate_view(errors: &mut Vec<String>, config: &TenmileConfig) {
    validate_non_empty(errors, "view.user_initials", &config.view.user_initials);
}
