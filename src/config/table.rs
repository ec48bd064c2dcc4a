//! Table input/output configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Delimited table configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    /// Field delimiter for both reading and writing
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Header of the appended score column
    #[serde(default = "default_score_column")]
    pub score_column: String,

    /// Header of the appended rank column
    #[serde(default = "default_rank_column")]
    pub rank_column: String,

    /// Fixed number of decimal places for scores; shortest round-trip form when unset
    #[serde(default)]
    pub score_precision: Option<usize>,
}

/// Highest precision that still carries information for an f64.
pub const MAX_SCORE_PRECISION: usize = 17;

impl TableConfig {
    /// The delimiter as a byte.
    ///
    /// Falls back to a comma for a delimiter that fails [`TableConfig::validate`].
    pub fn delimiter_byte(&self) -> u8 {
        single_ascii(&self.delimiter).unwrap_or(b',')
    }

    /// Formats a score for the output table.
    pub fn format_score(&self, score: f64) -> String {
        match self.score_precision {
            Some(places) => format!("{score:.places$}"),
            None => score.to_string(),
        }
    }

    /// Validate table configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match single_ascii(&self.delimiter) {
            Some(b'"') | Some(b'\n') | Some(b'\r') | None => {
                return Err(ValidationError::InvalidDelimiter(self.delimiter.clone()));
            }
            Some(_) => {}
        }
        if self.score_column.trim().is_empty() {
            return Err(ValidationError::EmptyColumnName("score"));
        }
        if self.rank_column.trim().is_empty() {
            return Err(ValidationError::EmptyColumnName("rank"));
        }
        if self.score_column == self.rank_column {
            return Err(ValidationError::DuplicateColumnNames);
        }
        if let Some(places) = self.score_precision {
            if places > MAX_SCORE_PRECISION {
                return Err(ValidationError::PrecisionTooLarge(places));
            }
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            score_column: default_score_column(),
            rank_column: default_rank_column(),
            score_precision: None,
        }
    }
}

fn single_ascii(value: &str) -> Option<u8> {
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Some(*byte),
        _ => None,
    }
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_score_column() -> String {
    "TOPSIS Score".to_string()
}

fn default_rank_column() -> String {
    "Rank".to_string()
}
