//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Table Ports
//!
//! - `TableReader` - Loads the delimited input table
//! - `TableWriter` - Stores the ranked output table atomically

mod table_io;

pub use table_io::{TableError, TableReader, TableWriter};
