//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Tenmile Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[connection]
# Base WebSocket URL of the chat backend. The client dials <endpoint>/chat/<session>.
# TENMILE_WEBSOCKET_URL overrides this value.
# endpoint = "wss://chat.example.com"
# default_session_id = "1"
# connect_timeout_secs = 15   # 1-120

[view]
# greeting = "How can I help you?"
# user_initials = "AZ"
# show_pending_indicator = true

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
