//! Application configuration module
//!
//! Settings come from, in increasing priority: built-in defaults, an optional
//! config file (`topsis.toml` in the working directory, or the file passed on
//! the command line), then environment variables with the `TOPSIS` prefix where
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use topsis_ranker::config::AppConfig;
//!
//! let config = AppConfig::load_validated(None).expect("Invalid configuration");
//!
//! println!("Delimiter: {}", config.table.delimiter);
//! ```

mod error;
mod logging;
mod table;
mod validation;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig, LOG_ENV_VAR};
pub use table::{TableConfig, MAX_SCORE_PRECISION};
pub use validation::ValidationConfig;

use serde::Deserialize;
use std::path::Path;

/// Base name of the config file looked up when none is given.
pub const DEFAULT_CONFIG_NAME: &str = "topsis";

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Delimiter and appended column settings
    #[serde(default)]
    pub table: TableConfig,

    /// Input shape rules
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads `config_file` when given (it must exist), else an optional `topsis.*`
    /// 3. Reads environment variables with `TOPSIS` prefix, `__` separating nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TOPSIS__TABLE__DELIMITER=;` -> `table.delimiter = ";"`
    /// - `TOPSIS__VALIDATION__COLUMN_POLICY=including_identifier`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the given file is missing or a value cannot be
    /// parsed into its expected type.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let builder = config::Config::builder();
        let builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_NAME).required(false)),
        };

        let config = builder
            .add_source(config::Environment::default().prefix("TOPSIS").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` as [`AppConfig::load`] does, and
    /// `ConfigError::ValidationFailed` when a loaded value is out of range.
    pub fn load_validated(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = Self::load(config_file)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.table.validate()?;
        self.validation.validate()?;
        Ok(())
    }
}
