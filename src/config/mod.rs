//! Configuration loading: optional settings file, environment secrets, validation.

pub mod env;
pub mod parser;
pub mod types;
pub mod validate;

use std::path::Path;

pub use parser::load_config_or_default;

use crate::common::error::ConfigError;
use crate::config::types::Config;

/// Load the settings file (if any), apply the environment and validate the result.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let config = load_config_or_default(path)?;
    let config = env::apply_env_overrides(config)?;
    validate::validate_config(&config)?;
    Ok(config)
}
