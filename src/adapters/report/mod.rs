//! Report Adapters
//!
//! Presentation of a finished ranking for the terminal.
//!
//! - **console** - Ranked text table with criteria and warnings
//! - **json** - Pretty JSON of `TopsisScoresComputed`

mod console;
mod json;

pub use console::{render_summary, separator};
pub use json::render_json;
