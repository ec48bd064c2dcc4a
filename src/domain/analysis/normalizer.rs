//! Normalizer - Rescales each criterion column to unit Euclidean length.

use super::DecisionMatrix;
use crate::domain::foundation::TopsisError;

/// Vector normalization of a decision matrix.
pub struct Normalizer;

impl Normalizer {
    /// Divides every value by the Euclidean norm of its column.
    ///
    /// # Errors
    /// `DegenerateColumn` (1-based column) when a column is all zeros.
    pub fn normalize(matrix: &DecisionMatrix) -> Result<DecisionMatrix, TopsisError> {
        let norms = Self::column_norms(matrix);

        if let Some(j) = norms.iter().position(|&n| n == 0.0) {
            return Err(TopsisError::DegenerateColumn {
                column: j + 1,
                name: matrix.criteria()[j].clone(),
            });
        }

        let values = matrix
            .rows()
            .iter()
            .map(|row| row.iter().zip(&norms).map(|(v, n)| v / n).collect())
            .collect();

        Ok(matrix.with_values(values))
    }

    /// Euclidean norm of every column.
    ///
    /// Uses `hypot` accumulation so very large or very small values
    /// neither overflow nor underflow to zero.
    pub fn column_norms(matrix: &DecisionMatrix) -> Vec<f64> {
        (0..matrix.criteria_count())
            .map(|j| matrix.column(j).fold(0.0, f64::hypot))
            .collect()
    }
}
