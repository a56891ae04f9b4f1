//! Application configuration module
//!
//! Provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with
//! the `REMIRO` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use remiro::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Storing user data under {}", config.storage.data_dir.display());
//! ```

mod error;
mod log;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use log::LogConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Storage configuration (data directory)
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration (filter directive)
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `REMIRO` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `REMIRO__STORAGE__DATA_DIR=/var/lib/remiro` -> `storage.data_dir`
    /// - `REMIRO__LOG__FILTER=remiro=debug` -> `log.filter`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("REMIRO")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("REMIRO__STORAGE__DATA_DIR");
        env::remove_var("REMIRO__LOG__FILTER");
    }

    #[test]
    fn loads_with_defaults_when_env_is_empty() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = AppConfig::load().unwrap();

        assert_eq!(config.storage.data_dir, PathBuf::from("data"));
        assert_eq!(config.log.filter, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn custom_data_dir_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("REMIRO__STORAGE__DATA_DIR", "/tmp/remiro-data");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/remiro-data"));
    }

    #[test]
    fn custom_log_filter_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("REMIRO__LOG__FILTER", "remiro=debug");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.log.filter, "remiro=debug");
    }
}
