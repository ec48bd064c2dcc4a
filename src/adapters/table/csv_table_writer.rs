//! CSV Table Writer Adapter
//!
//! Serializes a `DataTable` to a delimited text file.
//!
//! Uses a write-to-temp-then-rename pattern to ensure atomic writes:
//! the temporary file lives in the destination directory and is only
//! persisted over the destination once every record has been flushed.

use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::analysis::DataTable;
use crate::ports::{TableError, TableWriter};

/// Writes delimited tables to the filesystem.
#[derive(Debug, Clone)]
pub struct CsvTableWriter {
    delimiter: u8,
}

impl CsvTableWriter {
    /// Create a writer for the given single-byte delimiter.
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl Default for CsvTableWriter {
    fn default() -> Self {
        Self::new(b',')
    }
}

impl TableWriter for CsvTableWriter {
    fn write_table(&self, path: &Path, table: &DataTable) -> Result<(), TableError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(|e| TableError::write(path, e))?;

        {
            let mut writer = csv::WriterBuilder::new()
                .delimiter(self.delimiter)
                .flexible(true)
                .terminator(csv::Terminator::Any(b'\n'))
                .from_writer(temp.as_file_mut());

            writer
                .write_record(table.headers())
                .map_err(|e| TableError::write(path, e))?;
            for row in table.rows() {
                writer
                    .write_record(row)
                    .map_err(|e| TableError::write(path, e))?;
            }
            writer.flush().map_err(|e| TableError::write(path, e))?;
        }

        temp.as_file()
            .sync_all()
            .map_err(|e| TableError::write(path, e))?;
        temp.persist(path)
            .map_err(|e| TableError::write(path, e.error))?;

        debug!(path = %path.display(), rows = table.row_count(), "wrote table");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn ranked() -> DataTable {
        DataTable::builder()
            .headers(vec!["Model", "Price", "TOPSIS Score", "Rank"])
            .row(vec!["M1", "250", "0.25", "2"])
            .row(vec!["Phone, Pro", "200", "0.75", "1"])
            .build()
    }

    #[test]
    fn writes_header_and_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        CsvTableWriter::default().write_table(&path, &ranked()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Model,Price,TOPSIS Score,Rank\nM1,250,0.25,2\n\"Phone, Pro\",200,0.75,1\n"
        );
    }

    #[test]
    fn replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "stale").unwrap();

        CsvTableWriter::default().write_table(&path, &ranked()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Model,"));
    }

    #[test]
    fn custom_delimiter_is_used() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        CsvTableWriter::new(b';').write_table(&path, &ranked()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Model;Price;TOPSIS Score;Rank\n"));
    }

    #[test]
    fn missing_directory_fails_without_creating_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let err = CsvTableWriter::default().write_table(&path, &ranked()).unwrap_err();

        assert!(matches!(err, TableError::WriteFailed { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn no_temp_files_left_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        CsvTableWriter::default().write_table(&path, &ranked()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
