//! Where the config file lives, and writing the starter file.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tenmile_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "tenmile";
const FILE_NAME: &str = "config.toml";

/// `<config_dir>/tenmile/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory".into()))
}

/// Write the commented template to `path`, creating parent directories.
/// A file that already exists is left untouched.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)?;
        file.write_all(default_config_toml().as_bytes())
    };

    match write() {
        Ok(()) => {
            info!(path = %path.display(), "wrote default config");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(ConfigError::ParseError(format!(
            "cannot write {}: {e}",
            path.display()
        ))),
    }
}
