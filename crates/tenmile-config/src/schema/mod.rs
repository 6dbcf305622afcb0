//! Configuration schema types for Tenmile.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod connection;
mod system;
mod view;

pub use connection::*;
pub use system::*;
pub use view::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Tenmile.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TenmileConfig {
    pub connection: ConnectionConfig,
    pub view: ViewConfig,
    pub logging: LoggingConfig,
}
