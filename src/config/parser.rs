//! Configuration file parsing (HOCON format).

use std::path::Path;

use hocon::HoconLoader;

use crate::common::error::ConfigError;
use crate::config::types::Config;

/// Load configuration from a HOCON file.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();

    HoconLoader::new()
        .load_file(path)
        .map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?
        .resolve()
        .map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
}

/// Load configuration from a HOCON string.
#[cfg(test)]
pub fn load_config_str(content: &str) -> Result<Config, ConfigError> {
    HoconLoader::new()
        .load_str(content)
        .map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?
        .resolve()
        .map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
}

/// Load the settings file if it exists, otherwise fall back to defaults.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        Ok(Config::default())
    }
}
