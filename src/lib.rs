//! Topsis Ranker - Multi-criteria ranking of alternatives
//!
//! This crate scores the alternatives of a delimited table against weighted
//! benefit and cost criteria with TOPSIS, appending a closeness score and a
//! rank to every row.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
