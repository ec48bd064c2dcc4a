//! Table Adapters
//!
//! Implementations of the TableReader and TableWriter ports.
//!
//! ## Available Adapters
//!
//! - **CsvTableReader** - Loads delimited text files
//! - **CsvTableWriter** - Writes delimited text files atomically
//! - **InMemoryTableStore** - Keeps tables in memory (testing/embedding)
//!
//! ## Usage
//!
//! ```ignore
//! use topsis_ranker::adapters::table::{CsvTableReader, CsvTableWriter};
//!
//! let table = CsvTableReader::default().read_table(Path::new("data.csv"))?;
//! CsvTableWriter::new(b';').write_table(Path::new("result.csv"), &table)?;
//! ```

mod csv_table_reader;
mod csv_table_writer;
mod in_memory_table_store;

pub use csv_table_reader::CsvTableReader;
pub use csv_table_writer::CsvTableWriter;
pub use in_memory_table_store::InMemoryTableStore;
