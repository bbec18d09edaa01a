//! Configuration errors — always fatal, fail-fast at startup.
//!
//! Silent operation with wrong weights produces misleading detections, so
//! nothing here is recoverable.

use super::error_code::{self, FollowonErrorCode};

/// Errors raised while parsing or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config at {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Missing required config field: {field}")]
    MissingField { field: String },

    #[error("Invalid config value for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl FollowonErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
