//! Score Calculator - Distances to the ideal points and closeness coefficients.

use serde::{Deserialize, Serialize};

use super::{DecisionMatrix, IdealPoints};
use crate::domain::foundation::TopsisError;

/// Distances and closeness coefficient for one alternative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlternativeScore {
    pub distance_to_best: f64,
    pub distance_to_worst: f64,
    /// `distance_to_worst / (distance_to_best + distance_to_worst)`, in [0, 1].
    pub score: f64,
}

/// Closeness computation over the weighted matrix.
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Scores every alternative in row order.
    ///
    /// # Errors
    /// `UndefinedScore` (1-based row) when an alternative sits on both
    /// ideal points, leaving a zero denominator.
    pub fn compute(
        weighted: &DecisionMatrix,
        ideals: &IdealPoints,
    ) -> Result<Vec<AlternativeScore>, TopsisError> {
        weighted
            .rows()
            .iter()
            .zip(weighted.alternatives())
            .enumerate()
            .map(|(i, (row, alternative))| {
                let distance_to_best = euclidean(row, &ideals.best);
                let distance_to_worst = euclidean(row, &ideals.worst);
                let span = distance_to_best + distance_to_worst;

                if span == 0.0 {
                    return Err(TopsisError::UndefinedScore {
                        row: i + 1,
                        alternative: alternative.clone(),
                    });
                }

                Ok(AlternativeScore {
                    distance_to_best,
                    distance_to_worst,
                    score: closeness(distance_to_best, distance_to_worst),
                })
            })
            .collect()
    }
}

/// Euclidean distance between two equal-length vectors.
///
/// Accumulates with `hypot`, so huge or tiny coordinates neither overflow
/// nor underflow to zero.
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x - y).fold(0.0, f64::hypot)
}

/// `distance_to_worst / (distance_to_best + distance_to_worst)` for a non-zero span.
fn closeness(distance_to_best: f64, distance_to_worst: f64) -> f64 {
    let span = distance_to_best + distance_to_worst;
    if span.is_finite() {
        distance_to_worst / span
    } else {
        // Sum overflowed; halving both terms is exact.
        (0.5 * distance_to_worst) / (0.5 * distance_to_best + 0.5 * distance_to_worst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn euclidean_distance() {
        assert!(close(euclidean(&[0.0, 0.0], &[3.0, 4.0]), 5.0));
        assert_eq!(euclidean(&[1.0, 2.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn alternative_on_best_point_scores_one() {
        let m = DecisionMatrix::from_rows(vec![vec![1.0, 1.0], vec![0.0, 0.0]]).unwrap();
        let ideals = IdealPoints {
            best: vec![1.0, 1.0],
            worst: vec![0.0, 0.0],
        };
        let scores = ScoreCalculator::compute(&m, &ideals).unwrap();

        assert_eq!(scores[0].score, 1.0);
        assert_eq!(scores[1].score, 0.0);
        assert!(close(scores[0].distance_to_worst, 2f64.sqrt()));
    }

    #[test]
    fn midpoint_scores_one_half() {
        let m = DecisionMatrix::from_rows(vec![vec![0.5, 0.5]]).unwrap();
        let ideals = IdealPoints {
            best: vec![1.0, 1.0],
            worst: vec![0.0, 0.0],
        };
        let scores = ScoreCalculator::compute(&m, &ideals).unwrap();
        assert!(close(scores[0].score, 0.5));
        assert!(close(scores[0].distance_to_best, scores[0].distance_to_worst));
    }

    #[test]
    fn huge_coordinates_do_not_overflow() {
        let m = DecisionMatrix::from_rows(vec![vec![0.5e300, 0.5e300]]).unwrap();
        let ideals = IdealPoints {
            best: vec![1e300, 1e300],
            worst: vec![0.0, 0.0],
        };
        let scores = ScoreCalculator::compute(&m, &ideals).unwrap();

        assert!(scores[0].distance_to_best.is_finite());
        assert!(close(scores[0].score, 0.5));
    }

    #[test]
    fn tiny_coordinates_do_not_underflow() {
        let d = euclidean(&[3e-200, 4e-200], &[0.0, 0.0]);
        assert!(d > 0.0);
        assert!(close(d / 1e-200, 5.0));
    }

    #[test]
    fn overflowing_span_still_yields_unit_interval_score() {
        assert!(close(closeness(f64::MAX, f64::MAX), 0.5));
        assert_eq!(closeness(f64::MAX, 0.0), 0.0);
    }

    #[test]
    fn coincident_ideals_yield_undefined_score() {
        let m = DecisionMatrix::new(
            vec!["Price".to_string()],
            vec![("Only".to_string(), vec![0.4])],
        )
        .unwrap();
        let ideals = IdealPoints {
            best: vec![0.4],
            worst: vec![0.4],
        };
        let err = ScoreCalculator::compute(&m, &ideals).unwrap_err();
        assert_eq!(
            err,
            TopsisError::UndefinedScore {
                row: 1,
                alternative: "Only".to_string(),
            }
        );
    }
}
