//! CSV Table Reader Adapter
//!
//! Loads a delimited text file into a `DataTable`. Rows are read in
//! flexible mode so width mismatches reach the validator instead of
//! failing inside the parser.

use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::domain::analysis::DataTable;
use crate::ports::{TableError, TableReader};

/// Reads delimited tables from the filesystem.
#[derive(Debug, Clone)]
pub struct CsvTableReader {
    delimiter: u8,
}

impl CsvTableReader {
    /// Create a reader for the given single-byte delimiter.
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl Default for CsvTableReader {
    fn default() -> Self {
        Self::new(b',')
    }
}

impl TableReader for CsvTableReader {
    fn read_table(&self, path: &Path) -> Result<DataTable, TableError> {
        if !path.exists() {
            return Err(TableError::NotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path).map_err(|e| TableError::read(path, e))?;
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| TableError::read(path, e))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| TableError::read(path, e))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(
            path = %path.display(),
            columns = headers.len(),
            rows = rows.len(),
            "loaded table"
        );

        Ok(DataTable::new(headers, rows))
    }
}
