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
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Delimiter must be a single ASCII character other than a quote or newline, got '{0}'")]
    InvalidDelimiter(String),

    #[error("Output column name for {0} cannot be empty")]
    EmptyColumnName(&'static str),

    #[error("Score and rank output columns must have different names")]
    DuplicateColumnNames,

    #[error("Score precision {0} exceeds the maximum of 17 decimal places")]
    PrecisionTooLarge(usize),

    #[error("Minimum column count must be at least 1")]
    InvalidMinColumns,

    #[error("Invalid log filter directive '{0}'")]
    InvalidLogLevel(String),
}
