//! Error types for the application.

use thiserror::Error;

/// Configuration-related errors. All of these are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {message}")]
    IoError { path: String, message: String },

    #[error("Failed to parse config: {message}")]
    ParseError { message: String },

    #[error("{var} not found in environment variables")]
    MissingVar { var: String },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Failures of a single request to the stats API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered 404 for the requested tag.
    #[error("entity not found")]
    NotFound,

    /// Any status other than 200 or 404.
    #[error("unexpected status {0}")]
    Unexpected(u16),

    /// The request never produced a response (DNS, refused, timeout).
    #[error("{0}")]
    Transport(String),

    /// The response was 200 but the body is not the expected record.
    #[error("{0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Errors raised while validating a command invocation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArgument(String),
}

/// Result type alias for stats API calls.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
