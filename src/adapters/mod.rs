//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `table` - Delimited file and in-memory table storage
//! - `report` - Console and JSON rendering of ranking summaries

pub mod report;
pub mod table;

pub use table::{CsvTableReader, CsvTableWriter, InMemoryTableStore};
