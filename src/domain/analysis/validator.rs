//! Validator - Shape and parameter checks that gate the scoring pipeline.

use serde::{Deserialize, Serialize};

use super::{DataTable, DecisionMatrix};
use crate::domain::foundation::{Impact, ValidationError};

/// Which columns count towards the minimum column requirement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnPolicy {
    /// Only criteria columns count; the identifier column is excluded.
    #[default]
    CriteriaOnly,
    /// Every column counts, identifier included.
    IncludingIdentifier,
}

impl ColumnPolicy {
    fn counted(&self) -> &'static str {
        match self {
            ColumnPolicy::CriteriaOnly => "criteria",
            ColumnPolicy::IncludingIdentifier => "total",
        }
    }
}

/// Tunable validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRules {
    pub column_policy: ColumnPolicy,
    pub min_columns: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            column_policy: ColumnPolicy::CriteriaOnly,
            min_columns: 3,
        }
    }
}

/// Output of a successful validation: everything the analyzer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub matrix: DecisionMatrix,
    pub weights: Vec<f64>,
    pub impacts: Vec<Impact>,
}

/// Pure validation of a loaded table against its weights and impacts.
pub struct Validator;

impl Validator {
    /// Validates the table and parameters and builds the numeric matrix.
    ///
    /// # Checks (in order)
    /// 1. At least one data row
    /// 2. Every row as wide as the header
    /// 3. Minimum column count under `rules.column_policy`
    /// 4. Weight count equals criteria count
    /// 5. Impact count equals criteria count
    /// 6. Every impact is `+` or `-`
    /// 7. Every criteria cell is a finite number
    ///
    /// Row and column positions in errors are 1-based.
    pub fn validate(
        table: &DataTable,
        weights: &[f64],
        impacts: &[String],
        rules: &ValidationRules,
    ) -> Result<ValidatedInput, ValidationError> {
        if table.is_empty() {
            return Err(ValidationError::NoAlternatives);
        }

        let width = table.column_count();
        if let Some((i, row)) = table
            .rows()
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != width)
        {
            return Err(ValidationError::ragged_row(i + 1, width, row.len()));
        }

        let criteria = table.criteria_count();
        let counted = match rules.column_policy {
            ColumnPolicy::CriteriaOnly => criteria,
            ColumnPolicy::IncludingIdentifier => width,
        };
        if counted < rules.min_columns {
            return Err(ValidationError::TooFewColumns {
                counted: rules.column_policy.counted(),
                expected: rules.min_columns,
                actual: counted,
            });
        }

        if weights.len() != criteria {
            return Err(ValidationError::WeightCountMismatch {
                weights: weights.len(),
                criteria,
            });
        }

        if impacts.len() != criteria {
            return Err(ValidationError::ImpactCountMismatch {
                impacts: impacts.len(),
                criteria,
            });
        }

        let impacts = impacts
            .iter()
            .enumerate()
            .map(|(i, symbol)| {
                Impact::from_symbol(symbol)
                    .ok_or_else(|| ValidationError::invalid_impact(i + 1, symbol.as_str()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let matrix = Self::to_matrix(table)?;

        Ok(ValidatedInput {
            matrix,
            weights: weights.to_vec(),
            impacts,
        })
    }

    /// Converts the criteria cells into numbers. Assumes widths are already checked.
    fn to_matrix(table: &DataTable) -> Result<DecisionMatrix, ValidationError> {
        let criteria: Vec<String> = table.headers().iter().skip(1).cloned().collect();

        let mut rows = Vec::with_capacity(table.row_count());
        for (i, row) in table.rows().iter().enumerate() {
            let mut cells = row.iter();
            let alternative = cells.next().cloned().unwrap_or_default();

            let values = cells
                .zip(&criteria)
                .map(|(cell, column)| {
                    cell.trim()
                        .parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite())
                        .ok_or_else(|| ValidationError::non_numeric(i + 1, column.as_str(), cell.as_str()))
                })
                .collect::<Result<Vec<_>, _>>()?;

            rows.push((alternative, values));
        }

        DecisionMatrix::new(criteria, rows)
    }
}
