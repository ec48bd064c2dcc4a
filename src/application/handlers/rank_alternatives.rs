//! RankAlternativesHandler - Command handler for ranking a table of alternatives.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::TableConfig;
use crate::domain::analysis::{
    DataTable, TopsisAnalyzer, TopsisResult, TopsisScoresComputed, ValidationRules, Validator,
};
use crate::domain::foundation::{
    parse_impacts, parse_weights, Timestamp, TopsisError, ValidationError,
};
use crate::ports::{TableReader, TableWriter};

/// Command to rank the alternatives of one input table.
#[derive(Debug, Clone)]
pub struct RankAlternativesCommand {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Comma-separated weights, one per criterion
    pub weights: String,
    /// Comma-separated `+`/`-` symbols, one per criterion
    pub impacts: String,
}

/// Result of a successful ranking run.
#[derive(Debug, Clone)]
pub struct RankAlternativesResult {
    pub output_path: PathBuf,
    pub result: TopsisResult,
    pub summary: TopsisScoresComputed,
    /// The table as written to `output_path`
    pub table: DataTable,
}

/// Handler for ranking alternatives.
pub struct RankAlternativesHandler {
    reader: Arc<dyn TableReader>,
    writer: Arc<dyn TableWriter>,
    table_config: TableConfig,
    rules: ValidationRules,
}

impl RankAlternativesHandler {
    pub fn new(reader: Arc<dyn TableReader>, writer: Arc<dyn TableWriter>) -> Self {
        Self {
            reader,
            writer,
            table_config: TableConfig::default(),
            rules: ValidationRules::default(),
        }
    }

    /// Use custom output columns and score formatting.
    pub fn with_table_config(mut self, table_config: TableConfig) -> Self {
        self.table_config = table_config;
        self
    }

    /// Use custom input shape rules.
    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn handle(&self, cmd: RankAlternativesCommand) -> Result<RankAlternativesResult, TopsisError> {
        let started = Timestamp::now();

        // 1. Parse parameters
        let weights = parse_weights(&cmd.weights)?;
        let impacts = parse_impacts(&cmd.impacts)?;

        // 2. Load input
        let table = self.reader.read_table(&cmd.input_path)?;
        debug!(
            rows = table.row_count(),
            columns = table.column_count(),
            "input table loaded"
        );

        // 3. Validate, including room for the result columns
        let input = Validator::validate(&table, &weights, &impacts, &self.rules)?;
        self.check_output_columns(&table)?;

        // 4. Score and rank
        let result = TopsisAnalyzer::analyze(&input.matrix, &input.weights, &input.impacts)?;

        // 5. Append result columns in input row order
        let scores = result
            .scores
            .iter()
            .map(|s| self.table_config.format_score(s.score))
            .collect();
        let ranks = result.ranks.iter().map(|r| r.to_string()).collect();
        let ranked = table
            .with_column(self.table_config.score_column.as_str(), scores)
            .with_column(self.table_config.rank_column.as_str(), ranks);

        // 6. Persist only after every prior step succeeded
        self.writer.write_table(&cmd.output_path, &ranked)?;

        let finished = Timestamp::now();
        let summary = TopsisScoresComputed::from_result(&result, finished);
        info!(
            input = %cmd.input_path.display(),
            output = %cmd.output_path.display(),
            alternatives = ranked.row_count(),
            best = summary.best_alternative.as_deref().unwrap_or("tie"),
            elapsed_ms = finished.millis_since(&started),
            "ranking written"
        );

        Ok(RankAlternativesResult {
            output_path: cmd.output_path,
            result,
            summary,
            table: ranked,
        })
    }

    fn check_output_columns(&self, table: &DataTable) -> Result<(), ValidationError> {
        let output = [&self.table_config.score_column, &self.table_config.rank_column];
        match output.into_iter().find(|&name| table.headers().contains(name)) {
            Some(name) => Err(ValidationError::OutputColumnExists { name: name.clone() }),
            None => Ok(()),
        }
    }
}
