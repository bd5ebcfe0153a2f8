//! Configuration type definitions.

use serde::Deserialize;

/// Default command prefix.
pub const DEFAULT_PREFIX: &str = "!";

/// Default Clash of Clans API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.clashofclans.com/v1";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub discord: DiscordConfig,
    pub api: ApiConfig,
}

/// Discord bot configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Session token. Only ever read from the environment.
    #[serde(skip)]
    pub token: String,
    /// Prefix that marks a message as a command.
    pub prefix: String,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// Stats API configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Bearer key. Only ever read from the environment.
    #[serde(skip)]
    pub key: String,
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}
