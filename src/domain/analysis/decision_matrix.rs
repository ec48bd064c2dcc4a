//! Decision Matrix - Alternatives x criteria numeric values.

use serde::Serialize;

use crate::domain::foundation::ValidationError;

/// Rectangular matrix of criteria values, one row per alternative.
///
/// Immutable once built. Every pipeline stage returns a new matrix that
/// keeps the alternative and criterion labels of its input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    alternatives: Vec<String>,
    criteria: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Creates a matrix from criterion names and `(alternative, values)` rows.
    ///
    /// # Errors
    /// - `NoAlternatives` when `rows` is empty
    /// - `RaggedRow` when a row's width differs from the criteria count
    pub fn new(
        criteria: Vec<String>,
        rows: Vec<(String, Vec<f64>)>,
    ) -> Result<Self, ValidationError> {
        if rows.is_empty() {
            return Err(ValidationError::NoAlternatives);
        }

        let expected = criteria.len();
        let mut alternatives = Vec::with_capacity(rows.len());
        let mut values = Vec::with_capacity(rows.len());

        for (i, (alternative, row)) in rows.into_iter().enumerate() {
            if row.len() != expected {
                return Err(ValidationError::ragged_row(i + 1, expected, row.len()));
            }
            alternatives.push(alternative);
            values.push(row);
        }

        Ok(Self {
            alternatives,
            criteria,
            values,
        })
    }

    /// Creates a matrix from bare rows, labelling alternatives `A1..` and criteria `C1..`.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ValidationError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let criteria = (1..=width).map(|j| format!("C{}", j)).collect();
        let labelled = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| (format!("A{}", i + 1), row))
            .collect();
        Self::new(criteria, labelled)
    }

    /// Returns a matrix with the same labels and new values.
    ///
    /// Callers must keep the shape; the pipeline stages only map values.
    pub(crate) fn with_values(&self, values: Vec<Vec<f64>>) -> Self {
        debug_assert_eq!(values.len(), self.values.len());
        Self {
            alternatives: self.alternatives.clone(),
            criteria: self.criteria.clone(),
            values,
        }
    }

    /// Returns the alternative identifiers in row order.
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// Returns the criterion names in column order.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Returns a single value, if in range.
    pub fn value(&self, row: usize, column: usize) -> Option<f64> {
        self.values.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Iterates down one criterion column.
    pub fn column(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(move |row| row.get(column).copied())
    }

    /// Returns the number of alternatives.
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns the number of criteria.
    pub fn criteria_count(&self) -> usize {
        self.criteria.len()
    }
}
