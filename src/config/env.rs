//! Environment variables for secrets and setting overrides.
//!
//! - `DISCORD_TOKEN` - Discord bot token (required)
//! - `COC_API_KEY` - Clash of Clans API bearer key (required)
//! - `COC_API_BASE` - Overrides `api.base_url`
//! - `CLASHBOT_PREFIX` - Overrides `discord.prefix`
//! - `CLASHBOT_CONFIG` - Path of the optional settings file

use std::env;

use crate::common::error::ConfigError;
use crate::config::types::Config;

/// Environment variable prefix for bot settings.
const ENV_PREFIX: &str = "CLASHBOT";

pub const DISCORD_TOKEN_VAR: &str = "DISCORD_TOKEN";
pub const API_KEY_VAR: &str = "COC_API_KEY";
pub const API_BASE_VAR: &str = "COC_API_BASE";

/// Apply secrets and overrides from the process environment.
pub fn apply_env_overrides(config: Config) -> Result<Config, ConfigError> {
    apply_overrides_from(config, |name| env::var(name).ok())
}

/// Apply secrets and overrides using `lookup` to resolve variables.
///
/// Fails with [`ConfigError::MissingVar`] when a required secret is unset or empty.
pub fn apply_overrides_from<F>(mut config: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |var: &str| {
        lookup(var)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ConfigError::MissingVar {
                var: var.to_string(),
            })
    };

    config.discord.token = required(DISCORD_TOKEN_VAR)?;
    config.api.key = required(API_KEY_VAR)?;

    if let Some(base) = lookup(API_BASE_VAR).filter(|v| !v.is_empty()) {
        config.api.base_url = base;
    }
    if let Some(prefix) = lookup(&format!("{}_PREFIX", ENV_PREFIX)) {
        config.discord.prefix = prefix;
    }

    Ok(config)
}

/// Get the config file path from environment or use default.
///
/// Checks `CLASHBOT_CONFIG`, otherwise returns "clashbot.conf".
pub fn get_config_path() -> String {
    env::var(format!("{}_CONFIG", ENV_PREFIX)).unwrap_or_else(|_| "clashbot.conf".to_string())
}

/// Mask a secret for logging, keeping only its last 10 characters.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    let tail: String = secret.chars().skip(count.saturating_sub(10)).collect();
    format!("{}...{}", "*".repeat(20), tail)
}
