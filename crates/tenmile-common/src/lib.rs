pub mod errors;
pub mod id;

pub use errors::{ChatError, ConfigError};
pub use id::{SessionId, DEFAULT_SESSION_ID};
