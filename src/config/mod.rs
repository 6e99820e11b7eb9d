//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `AURA` prefix and nested
//! values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use aura_interview::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Backend at {}", config.backend.base_url);
//! ```

mod backend;
mod error;
mod logging;

pub use backend::{BackendConfig, BackendMode};
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration pointed at `http://localhost:8000`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Backend location and adapter mode
    #[serde(default)]
    pub backend: BackendConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AURA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `AURA__BACKEND__BASE_URL=http://api:8000` -> `backend.base_url`
    /// - `AURA__BACKEND__MODE=local` -> `backend.mode`
    /// - `AURA__LOGGING__FORMAT=json` -> `logging.format`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("AURA").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a malformed backend URL, a timeout outside
    /// 1-300 seconds or an unparseable log filter.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.backend.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
