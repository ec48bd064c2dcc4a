//! Table I/O Ports - Loading the input table and storing the ranked table.
//!
//! The domain depends on these traits, while adapters (like CsvTableReader
//! and CsvTableWriter) provide the implementation.

use std::path::Path;
use thiserror::Error;

use crate::domain::analysis::DataTable;
use crate::domain::foundation::TopsisError;

/// Errors raised by table adapters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("Table not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read table {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("Failed to write table {path}: {reason}")]
    WriteFailed { path: String, reason: String },
}

impl TableError {
    /// Creates a read failure for `path`.
    pub fn read(path: &Path, reason: impl ToString) -> Self {
        TableError::ReadFailed {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a write failure for `path`.
    pub fn write(path: &Path, reason: impl ToString) -> Self {
        TableError::WriteFailed {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<TableError> for TopsisError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::NotFound { path } => TopsisError::InputNotFound {
                path,
                reason: "no such file".to_string(),
            },
            TableError::ReadFailed { path, reason } => TopsisError::InputNotFound { path, reason },
            TableError::WriteFailed { path, reason } => {
                TopsisError::OutputWriteFailed { path, reason }
            }
        }
    }
}

/// Port for loading a delimited table.
///
/// # Contract
///
/// Implementations must:
/// - Treat the first record as the header row
/// - Return rows as-is, even when their width differs from the header
///   (the validator reports ragged rows)
/// - Return `NotFound` when the source does not exist
pub trait TableReader {
    /// Loads the table at `path`.
    fn read_table(&self, path: &Path) -> Result<DataTable, TableError>;
}

/// Port for storing a ranked table.
///
/// # Contract
///
/// Implementations must write atomically: on failure no partial
/// content is left at `path`.
pub trait TableWriter {
    /// Stores `table` at `path`, replacing any existing content.
    fn write_table(&self, path: &Path, table: &DataTable) -> Result<(), TableError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn not_found_maps_to_input_not_found() {
        let err: TopsisError = TableError::NotFound {
            path: "data.csv".to_string(),
        }
        .into();
        assert_eq!(err.code(), ErrorCode::InputNotFound);
        assert!(err.to_string().contains("data.csv"));
    }

    #[test]
    fn read_failure_maps_to_input_not_found() {
        let err: TopsisError = TableError::read(Path::new("data.csv"), "invalid UTF-8").into();
        assert_eq!(err.code(), ErrorCode::InputNotFound);
        assert!(err.to_string().contains("invalid UTF-8"));
    }

    #[test]
    fn write_failure_maps_to_output_error() {
        let err: TopsisError = TableError::write(Path::new("out.csv"), "disk full").into();
        assert_eq!(err.code(), ErrorCode::OutputWriteFailed);
    }
}
