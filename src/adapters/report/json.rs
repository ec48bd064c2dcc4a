//! JSON Report - Ranking summary as pretty-printed JSON.

use crate::domain::analysis::TopsisScoresComputed;

/// Serializes the summary to pretty JSON.
pub fn render_json(summary: &TopsisScoresComputed) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}
