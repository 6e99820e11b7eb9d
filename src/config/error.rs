//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid backend URL '{0}'")]
    InvalidBackendUrl(String),

    #[error("Backend URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),

    #[error("Invalid request timeout (expected 1-300 seconds)")]
    InvalidTimeout,

    #[error("Invalid log filter '{0}'")]
    InvalidLogFilter(String),
}
