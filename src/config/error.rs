//! Configuration error types.

use thiserror::Error;

/// Failure while loading or validating configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("configuration invalid: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A specific configuration value that failed validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("server port must be non-zero")]
    InvalidPort,

    #[error("database URL must be a postgres:// or postgresql:// URL")]
    InvalidDatabaseUrl,

    #[error("connection pool size must be at least 1")]
    InvalidPoolSize,

    #[error("model API base URL must be an http(s) URL")]
    InvalidBaseUrl,
}
