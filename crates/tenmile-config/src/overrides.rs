//! Environment overrides and session selection.

use tenmile_common::SessionId;
use tracing::debug;

use crate::schema::{ConnectionConfig, TenmileConfig};

/// Environment variable that replaces `connection.endpoint`.
pub const ENDPOINT_ENV: &str = "TENMILE_WEBSOCKET_URL";

/// Query parameter that selects the session.
pub const SESSION_QUERY_PARAM: &str = "sessionId";

/// Apply environment overrides on top of a loaded config.
pub fn apply_env(config: &mut TenmileConfig) {
    apply_endpoint_override(config, std::env::var(ENDPOINT_ENV).ok());
}

/// Replace the endpoint with `value` unless it is absent or blank.
pub(crate) fn apply_endpoint_override(config: &mut TenmileConfig, value: Option<String>) {
    if let Some(endpoint) = value.filter(|v| !v.trim().is_empty()) {
        debug!(endpoint = %endpoint, "endpoint overridden");
        config.connection.endpoint = endpoint;
    }
}

/// Extract `sessionId` from a query string such as `?sessionId=abc&x=1`.
///
/// Values are form-decoded; an empty value counts as absent.
pub fn session_id_from_query(query: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == SESSION_QUERY_PARAM)
        .and_then(|(_, value)| {
            let value = value.replace('+', " ");
            urlencoding::decode(&value).ok().map(|v| v.into_owned())
        })
        .filter(|v| !v.is_empty())
}

/// Pick the session: explicit id, then the query string, then the configured default.
pub fn resolve_session_id(
    explicit: Option<&str>,
    query: Option<&str>,
    connection: &ConnectionConfig,
) -> SessionId {
    if let Some(id) = explicit.filter(|id| !id.trim().is_empty()) {
        return SessionId::new(id);
    }
    if let Some(id) = query.and_then(session_id_from_query) {
        return SessionId::new(id);
    }
    SessionId::new(connection.default_session_id.clone())
}
