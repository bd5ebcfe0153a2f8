//! Configuration validation.
//!
//! Validates configuration values and provides helpful error messages.

use crate::common::error::ConfigError;
use crate::config::types::Config;

/// Validate a configuration and return detailed errors.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    if config.discord.token.is_empty() {
        errors.push("discord token is required".to_string());
    }
    if config.api.key.is_empty() {
        errors.push("api key is required".to_string());
    }

    if config.discord.prefix.is_empty() {
        errors.push("discord.prefix must not be empty".to_string());
    }
    if config.discord.prefix.chars().any(char::is_whitespace) {
        errors.push(format!(
            "discord.prefix '{}' must not contain whitespace",
            config.discord.prefix
        ));
    }

    let base = &config.api.base_url;
    if !base.starts_with("http://") && !base.starts_with("https://") {
        errors.push(format!(
            "api.base_url '{}' must start with http:// or https://",
            base
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            message: errors.join("\n"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_valid_config() -> Config {
        let mut config = Config::default();
        config.discord.token = "valid_token_here".to_string();
        config.api.key = "valid_key_here".to_string();
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&make_valid_config()).is_ok());
    }

    #[test]
    fn test_empty_prefix_fails() {
        let mut config = make_valid_config();
        config.discord.prefix = String::new();

        let result = validate_config(&config);
        assert!(result.unwrap_err().to_string().contains("discord.prefix"));
    }

    #[test]
    fn test_whitespace_prefix_fails() {
        let mut config = make_valid_config();
        config.discord.prefix = "! ".to_string();

        let result = validate_config(&config);
        assert!(result.unwrap_err().to_string().contains("whitespace"));
    }

    #[test]
    fn test_bad_base_url_fails() {
        let mut config = make_valid_config();
        config.api.base_url = "api.clashofclans.com/v1".to_string();

        let result = validate_config(&config);
        assert!(result.unwrap_err().to_string().contains("api.base_url"));
    }

    #[test]
    fn test_all_errors_reported_together() {
        let mut config = Config::default();
        config.discord.prefix = String::new();

        let message = validate_config(&config).unwrap_err().to_string();
        assert!(message.contains("discord token"));
        assert!(message.contains("api key"));
        assert!(message.contains("discord.prefix"));
    }
}
