//! In-Memory Table Store Adapter
//!
//! Keeps tables in memory, keyed by path. Implements both table ports.
//! Useful for testing and embedding.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::domain::analysis::DataTable;
use crate::ports::{TableError, TableReader, TableWriter};

/// In-memory storage for tables
#[derive(Debug, Clone, Default)]
pub struct InMemoryTableStore {
    tables: Arc<RwLock<HashMap<PathBuf, DataTable>>>,
    fail_writes: bool,
}

impl InMemoryTableStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose writes always fail (useful for tests)
    pub fn failing_writes() -> Self {
        Self {
            tables: Arc::default(),
            fail_writes: true,
        }
    }

    /// Add a table at `path`
    pub fn with_table(self, path: impl Into<PathBuf>, table: DataTable) -> Self {
        if let Ok(mut tables) = self.tables.write() {
            tables.insert(path.into(), table);
        }
        self
    }

    /// Get a copy of the table stored at `path`
    pub fn get(&self, path: &Path) -> Option<DataTable> {
        self.tables.read().ok()?.get(path).cloned()
    }

    /// Get the number of stored tables
    pub fn table_count(&self) -> usize {
        self.tables.read().map(|t| t.len()).unwrap_or(0)
    }
}

impl TableReader for InMemoryTableStore {
    fn read_table(&self, path: &Path) -> Result<DataTable, TableError> {
        let tables = self
            .tables
            .read()
            .map_err(|e| TableError::read(path, e))?;
        tables.get(path).cloned().ok_or_else(|| TableError::NotFound {
            path: path.display().to_string(),
        })
    }
}

impl TableWriter for InMemoryTableStore {
    fn write_table(&self, path: &Path, table: &DataTable) -> Result<(), TableError> {
        if self.fail_writes {
            return Err(TableError::write(path, "simulated write failure"));
        }
        let mut tables = self
            .tables
            .write()
            .map_err(|e| TableError::write(path, e))?;
        tables.insert(path.to_path_buf(), table.clone());
        Ok(())
    }
}
