//! Input validation configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::{ColumnPolicy, ValidationRules};

/// How strictly the input table shape is checked
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Whether the identifier column counts towards `min_columns`
    #[serde(default)]
    pub column_policy: ColumnPolicy,

    /// Minimum number of columns under the chosen policy
    #[serde(default = "default_min_columns")]
    pub min_columns: usize,
}

impl ValidationConfig {
    /// Rules handed to the domain validator.
    pub fn rules(&self) -> ValidationRules {
        ValidationRules {
            column_policy: self.column_policy,
            min_columns: self.min_columns,
        }
    }

    /// Validate the validation settings themselves
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_columns == 0 {
            return Err(ValidationError::InvalidMinColumns);
        }
        Ok(())
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            column_policy: ColumnPolicy::default(),
            min_columns: default_min_columns(),
        }
    }
}

fn default_min_columns() -> usize {
    3
}
