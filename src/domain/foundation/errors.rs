//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors detected by the validator before any numeric transform runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Input table has no alternatives (header row only)")]
    NoAlternatives,

    #[error("Row {row} has {actual} columns, expected {expected} (same as header)")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Input must contain at least {expected} {counted} columns, found {actual}")]
    TooFewColumns {
        counted: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Number of weights ({weights}) must match the number of criteria columns ({criteria})")]
    WeightCountMismatch { weights: usize, criteria: usize },

    #[error("Number of impacts ({impacts}) must match the number of criteria columns ({criteria})")]
    ImpactCountMismatch { impacts: usize, criteria: usize },

    #[error("Impact {position} is '{symbol}', impacts must be either '+' or '-'")]
    InvalidImpact { position: usize, symbol: String },

    #[error("Input already has a column named '{name}', choose another output column name")]
    OutputColumnExists { name: String },

    #[error("Row {row}, column '{column}' has non-numeric value '{value}'")]
    NonNumericCell {
        row: usize,
        column: String,
        value: String,
    },
}

impl ValidationError {
    /// Creates a ragged row validation error.
    pub fn ragged_row(row: usize, expected: usize, actual: usize) -> Self {
        ValidationError::RaggedRow {
            row,
            expected,
            actual,
        }
    }

    /// Creates an invalid impact symbol error.
    pub fn invalid_impact(position: usize, symbol: impl Into<String>) -> Self {
        ValidationError::InvalidImpact {
            position,
            symbol: symbol.into(),
        }
    }

    /// Creates a non-numeric cell error.
    pub fn non_numeric(row: usize, column: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::NonNumericCell {
            row,
            column: column.into(),
            value: value.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input errors
    InputNotFound,
    MalformedParameter,

    // Validation errors
    ValidationFailed,

    // Computation errors
    DegenerateColumn,
    UndefinedScore,

    // Output errors
    OutputWriteFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InputNotFound => "INPUT_NOT_FOUND",
            ErrorCode::MalformedParameter => "MALFORMED_PARAMETER",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::DegenerateColumn => "DEGENERATE_COLUMN",
            ErrorCode::UndefinedScore => "UNDEFINED_SCORE",
            ErrorCode::OutputWriteFailed => "OUTPUT_WRITE_FAILED",
        };
        write!(f, "{}", s)
    }
}

/// Every way a ranking run can fail.
///
/// All variants are fatal for the run; no output is written once one is raised.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisError {
    #[error("File '{path}' not found or unreadable: {reason}")]
    InputNotFound { path: String, reason: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Criterion column {column} ('{name}') is all zeros and cannot be normalized")]
    DegenerateColumn { column: usize, name: String },

    #[error("Alternative '{alternative}' (row {row}) coincides with both ideal points, score is undefined")]
    UndefinedScore { row: usize, alternative: String },

    #[error("Malformed {parameter}: {reason}")]
    MalformedParameter {
        parameter: &'static str,
        reason: String,
    },

    #[error("Could not write output '{path}': {reason}")]
    OutputWriteFailed { path: String, reason: String },
}

impl TopsisError {
    /// Creates a malformed parameter error.
    pub fn malformed(parameter: &'static str, reason: impl Into<String>) -> Self {
        TopsisError::MalformedParameter {
            parameter,
            reason: reason.into(),
        }
    }

    /// Returns the stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            TopsisError::InputNotFound { .. } => ErrorCode::InputNotFound,
            TopsisError::Validation(_) => ErrorCode::ValidationFailed,
            TopsisError::DegenerateColumn { .. } => ErrorCode::DegenerateColumn,
            TopsisError::UndefinedScore { .. } => ErrorCode::UndefinedScore,
            TopsisError::MalformedParameter { .. } => ErrorCode::MalformedParameter,
            TopsisError::OutputWriteFailed { .. } => ErrorCode::OutputWriteFailed,
        }
    }
}
