//! Console Report - Ranking summary as a formatted text table.

use std::fmt;

use crate::domain::analysis::TopsisScoresComputed;

const WIDTH: usize = 60;

/// Horizontal separator of box-drawing chars.
pub fn separator(width: usize) -> String {
    "\u{2500}".repeat(width)
}

/// Renders alternatives best-first, then the per-criterion parameters
/// and any weight warnings.
pub fn render_summary(summary: &TopsisScoresComputed) -> String {
    SummaryReport(summary).to_string()
}

/// Console layout of a ranking summary.
struct SummaryReport<'a>(&'a TopsisScoresComputed);

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;
        let separator = separator(WIDTH);

        let name_width = summary
            .alternatives
            .iter()
            .map(|a| a.alternative.chars().count())
            .max()
            .unwrap_or(0)
            .clamp(11, 40);

        writeln!(f, "TOPSIS Ranking ({})", summary.computed_at.to_rfc3339())?;
        writeln!(f, "{separator}")?;
        writeln!(f, " {:>4}  {:>8}  {:<name_width$}", "Rank", "Score", "Alternative")?;
        writeln!(f, "{separator}")?;
        for a in summary.by_rank() {
            writeln!(
                f,
                " {:>4}  {:>8.4}  {:<name_width$}",
                a.rank,
                a.score,
                truncate(&a.alternative, name_width)
            )?;
        }
        writeln!(f, "{separator}")?;

        writeln!(
            f,
            " {:<20} {:>8}  {:<7}  {:>9}  {:>9}",
            "Criterion", "Weight", "Impact", "Best", "Worst"
        )?;
        writeln!(f, "{separator}")?;
        for c in &summary.criteria {
            writeln!(
                f,
                " {:<20} {:>8}  {:<7}  {:>9.5}  {:>9.5}",
                truncate(&c.name, 20),
                c.weight,
                c.impact.label(),
                c.ideal_best,
                c.ideal_worst
            )?;
        }
        writeln!(f, "{separator}")?;

        match &summary.best_alternative {
            Some(best) => writeln!(f, " Best alternative: {best}")?,
            None => writeln!(f, " Best alternative: tie for first place")?,
        }

        for warning in &summary.weight_warnings {
            writeln!(f, " warning: {warning}")?;
        }
        Ok(())
    }
}

/// Shortens `s` to `max` chars, marking the cut with `...`.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(3);
    let head: String = s.chars().take(keep).collect();
    format!("{head}...")
}
