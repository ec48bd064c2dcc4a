//! TOPSIS Analyzer - Runs the scoring pipeline end to end.

use serde::Serialize;
use tracing::{debug, warn};

use super::{
    rank_descending, AlternativeScore, DecisionMatrix, IdealPointResolver, IdealPoints,
    Normalizer, ScoreCalculator, WeightWarning, Weighter,
};
use crate::domain::foundation::{Impact, TopsisError, ValidationError};

/// Everything computed during one ranking run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopsisResult {
    pub weights: Vec<f64>,
    pub impacts: Vec<Impact>,
    pub normalized: DecisionMatrix,
    pub weighted: DecisionMatrix,
    pub ideal_points: IdealPoints,
    /// Per alternative, input row order.
    pub scores: Vec<AlternativeScore>,
    /// Per alternative, input row order.
    pub ranks: Vec<usize>,
    pub weight_warnings: Vec<WeightWarning>,
}

impl TopsisResult {
    /// Closeness coefficients in row order.
    pub fn score_values(&self) -> Vec<f64> {
        self.scores.iter().map(|s| s.score).collect()
    }

    /// Alternatives holding rank 1 (more than one on a tie).
    pub fn leaders(&self) -> Vec<&str> {
        self.weighted
            .alternatives()
            .iter()
            .zip(&self.ranks)
            .filter(|(_, &rank)| rank == 1)
            .map(|(alt, _)| alt.as_str())
            .collect()
    }

    /// The single best alternative. Returns None on a tie for first place.
    pub fn best_alternative(&self) -> Option<&str> {
        let leaders = self.leaders();
        match leaders.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

/// TOPSIS pipeline: normalize, weight, resolve ideals, score, rank.
pub struct TopsisAnalyzer;

impl TopsisAnalyzer {
    /// Ranks the alternatives of `matrix`.
    ///
    /// # Errors
    /// - `Validation` if `weights` or `impacts` do not match the criteria count
    /// - `DegenerateColumn` if a criterion column is all zeros
    /// - `UndefinedScore` if an alternative coincides with both ideal points
    pub fn analyze(
        matrix: &DecisionMatrix,
        weights: &[f64],
        impacts: &[Impact],
    ) -> Result<TopsisResult, TopsisError> {
        let criteria = matrix.criteria_count();
        if weights.len() != criteria {
            return Err(ValidationError::WeightCountMismatch {
                weights: weights.len(),
                criteria,
            }
            .into());
        }
        if impacts.len() != criteria {
            return Err(ValidationError::ImpactCountMismatch {
                impacts: impacts.len(),
                criteria,
            }
            .into());
        }

        let normalized = Normalizer::normalize(matrix)?;
        debug!(
            alternatives = matrix.alternative_count(),
            criteria, "normalized decision matrix"
        );

        let weight_warnings = Weighter::warnings(matrix, weights);
        for warning in &weight_warnings {
            warn!(criterion = warning.criterion, weight = warning.weight, "{}", warning);
        }
        let weighted = Weighter::apply(&normalized, weights);
        debug!(?weights, "applied weights");

        let ideal_points = IdealPointResolver::resolve(&weighted, impacts);
        debug!(best = ?ideal_points.best, worst = ?ideal_points.worst, "resolved ideal points");

        let scores = ScoreCalculator::compute(&weighted, &ideal_points)?;
        let values: Vec<f64> = scores.iter().map(|s| s.score).collect();
        let ranks = rank_descending(&values);
        debug!(?values, ?ranks, "scored alternatives");

        Ok(TopsisResult {
            weights: weights.to_vec(),
            impacts: impacts.to_vec(),
            normalized,
            weighted,
            ideal_points,
            scores,
            ranks,
            weight_warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Impact::{Benefit, Cost};

    fn phones() -> DecisionMatrix {
        DecisionMatrix::from_rows(vec![
            vec![250.0, 16.0, 12.0, 5.0],
            vec![200.0, 16.0, 8.0, 3.0],
            vec![300.0, 32.0, 16.0, 4.0],
            vec![275.0, 32.0, 8.0, 4.0],
            vec![225.0, 16.0, 16.0, 2.0],
        ])
        .unwrap()
    }

    const IMPACTS: [Impact; 4] = [Benefit, Benefit, Cost, Benefit];

    #[test]
    fn reference_scenario_scores_and_ranks() {
        let result = TopsisAnalyzer::analyze(&phones(), &[0.25; 4], &IMPACTS).unwrap();

        let expected = [
            0.534_276_857_182_100_3,
            0.422_351_291_676_278_2,
            0.577_648_708_323_721_8,
            0.795_991_425_176_143_6,
            0.072_726_190_425_820_74,
        ];
        for (got, want) in result.score_values().iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "got {got}, want {want}");
        }
        assert_eq!(result.ranks, vec![3, 4, 2, 1, 5]);
        assert_eq!(result.best_alternative(), Some("A4"));
    }

    #[test]
    fn reference_scenario_is_deterministic() {
        let first = TopsisAnalyzer::analyze(&phones(), &[0.25; 4], &IMPACTS).unwrap();
        let second = TopsisAnalyzer::analyze(&phones(), &[0.25; 4], &IMPACTS).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn scores_lie_in_unit_interval() {
        let result = TopsisAnalyzer::analyze(&phones(), &[1.0, 2.0, 1.0, 0.5], &IMPACTS).unwrap();
        assert!(result.score_values().iter().all(|s| (0.0..=1.0).contains(s)));
    }

    #[test]
    fn uniform_weight_scaling_keeps_ranks() {
        let base = TopsisAnalyzer::analyze(&phones(), &[1.0, 1.0, 2.0, 1.0], &IMPACTS).unwrap();
        let scaled = TopsisAnalyzer::analyze(&phones(), &[7.0, 7.0, 14.0, 7.0], &IMPACTS).unwrap();
        assert_eq!(base.ranks, scaled.ranks);
    }

    #[test]
    fn extreme_weight_magnitudes_keep_reference_ranks() {
        let reference = TopsisAnalyzer::analyze(&phones(), &[0.25; 4], &IMPACTS).unwrap();

        for weight in [1e-200, 1e-150, 1e150, 1e200, 1e300] {
            let result = TopsisAnalyzer::analyze(&phones(), &[weight; 4], &IMPACTS).unwrap();
            assert_eq!(result.ranks, vec![3, 4, 2, 1, 5], "weight {weight}");
            for (got, want) in result.score_values().iter().zip(reference.score_values()) {
                assert!(!got.is_nan(), "weight {weight} produced NaN");
                assert!((got - want).abs() < 1e-9, "weight {weight}: got {got}, want {want}");
            }
        }
    }

    #[test]
    fn flipping_impact_keeps_shape() {
        let base = TopsisAnalyzer::analyze(&phones(), &[0.25; 4], &IMPACTS).unwrap();
        let flipped =
            TopsisAnalyzer::analyze(&phones(), &[0.25; 4], &[Cost, Benefit, Cost, Benefit]).unwrap();

        assert_eq!(flipped.scores.len(), base.scores.len());
        assert_eq!(flipped.ranks.len(), base.ranks.len());
        assert_eq!(flipped.ideal_points.best[0], base.ideal_points.worst[0]);
        assert_eq!(flipped.ideal_points.worst[0], base.ideal_points.best[0]);
        assert_eq!(flipped.ideal_points.best[1..], base.ideal_points.best[1..]);
    }

    #[test]
    fn identical_alternatives_share_rank() {
        let m = DecisionMatrix::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![3.0, 1.0, 2.0],
            vec![1.0, 2.0, 3.0],
        ])
        .unwrap();
        let result = TopsisAnalyzer::analyze(&m, &[1.0; 3], &[Benefit; 3]).unwrap();

        assert_eq!(result.ranks[0], result.ranks[2]);
        assert_eq!(result.scores[0].score, result.scores[2].score);
    }

    #[test]
    fn single_alternative_is_undefined() {
        let m = DecisionMatrix::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
        let err = TopsisAnalyzer::analyze(&m, &[1.0; 3], &[Benefit; 3]).unwrap_err();
        assert!(matches!(err, TopsisError::UndefinedScore { row: 1, .. }));
    }

    #[test]
    fn all_identical_rows_are_undefined() {
        let m = DecisionMatrix::from_rows(vec![vec![4.0, 5.0, 6.0]; 3]).unwrap();
        let err = TopsisAnalyzer::analyze(&m, &[1.0; 3], &[Benefit, Cost, Benefit]).unwrap_err();
        assert!(matches!(err, TopsisError::UndefinedScore { .. }));
    }

    #[test]
    fn zero_column_is_degenerate() {
        let m = DecisionMatrix::from_rows(vec![vec![1.0, 0.0, 3.0], vec![2.0, 0.0, 1.0]]).unwrap();
        let err = TopsisAnalyzer::analyze(&m, &[1.0; 3], &[Benefit; 3]).unwrap_err();
        assert!(matches!(err, TopsisError::DegenerateColumn { column: 2, .. }));
    }

    #[test]
    fn mismatched_weights_are_rejected() {
        let err = TopsisAnalyzer::analyze(&phones(), &[1.0; 3], &IMPACTS).unwrap_err();
        assert_eq!(
            err,
            TopsisError::Validation(ValidationError::WeightCountMismatch {
                weights: 3,
                criteria: 4,
            })
        );
    }

    #[test]
    fn non_positive_weights_are_flagged_not_rejected() {
        let result = TopsisAnalyzer::analyze(&phones(), &[1.0, 0.0, -1.0, 1.0], &IMPACTS).unwrap();
        assert_eq!(result.weight_warnings.len(), 2);
        assert_eq!(result.ranks.len(), 5);
    }

    #[test]
    fn tie_for_first_has_no_single_best() {
        let m = DecisionMatrix::from_rows(vec![
            vec![3.0, 3.0, 1.0],
            vec![3.0, 3.0, 1.0],
            vec![1.0, 1.0, 3.0],
        ])
        .unwrap();
        let result = TopsisAnalyzer::analyze(&m, &[1.0; 3], &[Benefit, Benefit, Cost]).unwrap();
        assert_eq!(result.leaders(), vec!["A1", "A2"]);
        assert_eq!(result.best_alternative(), None);
    }
}
