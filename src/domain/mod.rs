//! Domain layer containing the ranking logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (impacts, parameters, timestamps, errors)
//! - `analysis` - Pure domain services for TOPSIS ranking

pub mod analysis;
pub mod foundation;
