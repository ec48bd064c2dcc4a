//! Weighter - Applies per-criterion weights to the normalized matrix.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::DecisionMatrix;

/// Why a weight was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightIssue {
    /// The criterion has no influence on the ranking.
    Zero,
    /// Preference on the criterion is inverted.
    Negative,
}

/// A non-positive weight. Reported, never rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightWarning {
    /// 1-based criterion position.
    pub criterion: usize,
    pub name: String,
    pub weight: f64,
    pub issue: WeightIssue,
}

impl fmt::Display for WeightWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.issue {
            WeightIssue::Zero => write!(
                f,
                "Weight for criterion {} ('{}') is zero; it will not affect the ranking",
                self.criterion, self.name
            ),
            WeightIssue::Negative => write!(
                f,
                "Weight for criterion {} ('{}') is negative ({}); its preference is inverted",
                self.criterion, self.name, self.weight
            ),
        }
    }
}

/// Column weighting.
pub struct Weighter;

impl Weighter {
    /// Multiplies each column by its weight. `weights` must match the criteria count.
    pub fn apply(matrix: &DecisionMatrix, weights: &[f64]) -> DecisionMatrix {
        debug_assert_eq!(weights.len(), matrix.criteria_count());

        let values = matrix
            .rows()
            .iter()
            .map(|row| row.iter().zip(weights).map(|(v, w)| v * w).collect())
            .collect();

        matrix.with_values(values)
    }

    /// Lists weights that are zero or negative.
    pub fn warnings(matrix: &DecisionMatrix, weights: &[f64]) -> Vec<WeightWarning> {
        weights
            .iter()
            .zip(matrix.criteria())
            .enumerate()
            .filter_map(|(j, (&weight, name))| {
                let issue = if weight == 0.0 {
                    WeightIssue::Zero
                } else if weight < 0.0 {
                    WeightIssue::Negative
                } else {
                    return None;
                };
                Some(WeightWarning {
                    criterion: j + 1,
                    name: name.clone(),
                    weight,
                    issue,
                })
            })
            .collect()
    }
}
