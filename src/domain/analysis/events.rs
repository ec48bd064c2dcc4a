//! Analysis summary emitted when a ranking run completes.
//!
//! Carries summarized results rather than the intermediate matrices, so it
//! stays small enough to print as JSON or log.

use serde::{Deserialize, Serialize};

use super::TopsisResult;
use crate::domain::foundation::{Impact, Timestamp};

/// Final score and rank of one alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    /// Identifier from the first column of the input.
    pub alternative: String,
    /// Closeness coefficient.
    pub score: f64,
    /// Competition rank, 1 = most preferred.
    pub rank: usize,
    pub distance_to_best: f64,
    pub distance_to_worst: f64,
}

/// Parameters and ideal points of one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionSummary {
    pub name: String,
    pub weight: f64,
    pub impact: Impact,
    pub ideal_best: f64,
    pub ideal_worst: f64,
}

/// Published when TOPSIS scores are computed for a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisScoresComputed {
    /// Alternatives in input row order.
    pub alternatives: Vec<RankedAlternative>,
    /// Criteria in column order.
    pub criteria: Vec<CriterionSummary>,
    /// ID of the best-ranked alternative (None on a tie for first).
    pub best_alternative: Option<String>,
    /// Human-readable notes about zero or negative weights.
    pub weight_warnings: Vec<String>,
    /// When the analysis was computed.
    pub computed_at: Timestamp,
}

impl TopsisScoresComputed {
    /// Summarizes a finished run.
    pub fn from_result(result: &TopsisResult, computed_at: Timestamp) -> Self {
        let alternatives = result
            .weighted
            .alternatives()
            .iter()
            .zip(&result.scores)
            .zip(&result.ranks)
            .map(|((alternative, score), &rank)| RankedAlternative {
                alternative: alternative.clone(),
                score: score.score,
                rank,
                distance_to_best: score.distance_to_best,
                distance_to_worst: score.distance_to_worst,
            })
            .collect();

        let criteria = result
            .weighted
            .criteria()
            .iter()
            .enumerate()
            .map(|(j, name)| CriterionSummary {
                name: name.clone(),
                weight: result.weights[j],
                impact: result.impacts[j],
                ideal_best: result.ideal_points.best[j],
                ideal_worst: result.ideal_points.worst[j],
            })
            .collect();

        Self {
            alternatives,
            criteria,
            best_alternative: result.best_alternative().map(str::to_string),
            weight_warnings: result.weight_warnings.iter().map(|w| w.to_string()).collect(),
            computed_at,
        }
    }

    /// Alternatives sorted by rank, ties kept in input order.
    pub fn by_rank(&self) -> Vec<&RankedAlternative> {
        let mut ranked: Vec<&RankedAlternative> = self.alternatives.iter().collect();
        ranked.sort_by_key(|a| a.rank);
        ranked
    }
}
