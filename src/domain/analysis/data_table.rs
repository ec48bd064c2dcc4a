//! Data Table - The delimited table as loaded, before validation.

use serde::{Deserialize, Serialize};

/// A header row plus string rows, exactly as read from the source.
///
/// The first column holds the alternative identifier. Rows are not
/// guaranteed to match the header width until the validator has run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Creates a table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Creates a builder for constructing a table.
    pub fn builder() -> DataTableBuilder {
        DataTableBuilder::new()
    }

    /// Returns the header row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the data rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the number of header columns, identifier included.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Returns the number of criteria columns (header width minus the identifier).
    pub fn criteria_count(&self) -> usize {
        self.headers.len().saturating_sub(1)
    }

    /// Returns the number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns a new table with one more column appended.
    ///
    /// `values` must hold one cell per data row.
    pub fn with_column(&self, name: impl Into<String>, values: Vec<String>) -> Self {
        debug_assert_eq!(values.len(), self.rows.len());

        let mut headers = self.headers.clone();
        headers.push(name.into());

        let rows = self
            .rows
            .iter()
            .zip(values)
            .map(|(row, value)| {
                let mut row = row.clone();
                row.push(value);
                row
            })
            .collect();

        Self { headers, rows }
    }
}

/// Builder for constructing DataTable instances.
#[derive(Debug, Default)]
pub struct DataTableBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DataTableBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header row.
    pub fn headers(mut self, headers: Vec<impl Into<String>>) -> Self {
        self.headers = headers.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Appends a data row.
    pub fn row(mut self, cells: Vec<impl Into<String>>) -> Self {
        self.rows.push(cells.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Builds the table.
    pub fn build(self) -> DataTable {
        DataTable {
            headers: self.headers,
            rows: self.rows,
        }
    }
}
