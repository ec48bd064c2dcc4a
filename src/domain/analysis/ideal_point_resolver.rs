//! Ideal-Point Resolver - Best and worst reference vectors per criterion.

use serde::{Deserialize, Serialize};

use super::DecisionMatrix;
use crate::domain::foundation::Impact;

/// Ideal-best and ideal-worst values, one per criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealPoints {
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
}

impl IdealPoints {
    /// Returns the number of criteria covered.
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Returns true if no criteria are covered.
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}

/// Column-wise reduction of the weighted matrix into ideal points.
pub struct IdealPointResolver;

impl IdealPointResolver {
    /// Resolves ideal points on a weighted matrix.
    ///
    /// # Algorithm
    /// - `Benefit`: best = column max, worst = column min
    /// - `Cost`: best = column min, worst = column max
    ///
    /// `impacts` must match the criteria count. Columns are independent.
    pub fn resolve(weighted: &DecisionMatrix, impacts: &[Impact]) -> IdealPoints {
        debug_assert_eq!(impacts.len(), weighted.criteria_count());

        let (best, worst) = impacts
            .iter()
            .enumerate()
            .map(|(j, impact)| {
                let (min, max) = Self::column_range(weighted, j);
                match impact {
                    Impact::Benefit => (max, min),
                    Impact::Cost => (min, max),
                }
            })
            .unzip();

        IdealPoints { best, worst }
    }

    fn column_range(matrix: &DecisionMatrix, column: usize) -> (f64, f64) {
        matrix
            .column(column)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
                (min.min(v), max.max(v))
            })
    }
}
