//! Analysis Module - Pure domain services for TOPSIS ranking.
//!
//! # Components
//!
//! - `DataTable` - The loaded delimited table (identifier column first)
//! - `DecisionMatrix` - Numeric alternatives x criteria values
//! - `Validator` - Shape and parameter checks, run before any arithmetic
//! - `Normalizer` - Column vector normalization
//! - `Weighter` - Per-criterion weighting, flags non-positive weights
//! - `IdealPointResolver` - Ideal-best / ideal-worst vectors per impact
//! - `ScoreCalculator` - Distances and closeness coefficients
//! - `rank_descending` - Standard competition ranking
//! - `TopsisAnalyzer` - The stages composed in order
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. Every stage
//! takes an immutable input and returns a new value. No ports needed.

mod data_table;
mod decision_matrix;
mod events;
mod ideal_point_resolver;
mod normalizer;
mod ranking;
mod score_calculator;
mod topsis_analyzer;
mod validator;
mod weighter;

// Re-export all public types
pub use data_table::{DataTable, DataTableBuilder};
pub use decision_matrix::DecisionMatrix;
pub use events::{CriterionSummary, RankedAlternative, TopsisScoresComputed};
pub use ideal_point_resolver::{IdealPointResolver, IdealPoints};
pub use normalizer::Normalizer;
pub use ranking::{rank_descending, TIE_EPSILON};
pub use score_calculator::{euclidean, AlternativeScore, ScoreCalculator};
pub use topsis_analyzer::{TopsisAnalyzer, TopsisResult};
pub use validator::{ColumnPolicy, ValidatedInput, ValidationRules, Validator};
pub use weighter::{WeightIssue, WeightWarning, Weighter};
