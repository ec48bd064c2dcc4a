//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects, parameter parsing, and error types
//! that form the vocabulary of the ranking domain.

mod errors;
mod impact;
mod parameters;
mod timestamp;

pub use errors::{ErrorCode, TopsisError, ValidationError};
pub use impact::Impact;
pub use parameters::{parse_impacts, parse_weights};
pub use timestamp::Timestamp;
