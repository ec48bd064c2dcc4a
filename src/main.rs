mod cli;

use std::io::{self, Write};
use std::sync::Arc;

use clap::Parser;
use thiserror::Error;
use topsis_ranker::adapters::report::{render_json, render_summary};
use topsis_ranker::adapters::{CsvTableReader, CsvTableWriter};
use topsis_ranker::application::{RankAlternativesHandler, RankAlternativesResult};
use topsis_ranker::config::{AppConfig, ConfigError, LogFormat, LoggingConfig};
use topsis_ranker::domain::foundation::TopsisError;

use crate::cli::Cli;

/// Everything that can end a `topsis` run early.
#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ranking(#[from] TopsisError),

    #[error("Could not render JSON summary: {0}")]
    Report(#[from] serde_json::Error),

    #[error("Could not write to the terminal: {0}")]
    Terminal(#[from] io::Error),
}

fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter())
        .with_writer(std::io::stderr);

    let result = match logging.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Plain => builder.try_init(),
    };
    if let Err(err) = result {
        eprintln!("warning: logging disabled: {err}");
    }
}

fn run(cli: &Cli) -> Result<(), RunError> {
    let config = AppConfig::load_validated(cli.config.as_deref())?;
    init_tracing(&config.logging);

    let delimiter = config.table.delimiter_byte();
    let handler = RankAlternativesHandler::new(
        Arc::new(CsvTableReader::new(delimiter)),
        Arc::new(CsvTableWriter::new(delimiter)),
    )
    .with_table_config(config.table.clone())
    .with_rules(config.validation.rules());

    let outcome = handler.handle(cli.command()).map_err(|err| {
        tracing::debug!(code = %err.code(), "ranking failed");
        err
    })?;

    report(cli, &outcome, &mut io::stdout().lock(), &mut io::stderr().lock())
}

/// Prints the outcome. With `--json`, stdout carries only the JSON document.
fn report(
    cli: &Cli,
    outcome: &RankAlternativesResult,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> Result<(), RunError> {
    let saved = format!("Result saved in {}", outcome.output_path.display());
    if cli.json {
        writeln!(stderr, "{saved}")?;
        writeln!(stdout, "{}", render_json(&outcome.summary)?)?;
        return Ok(());
    }

    writeln!(stdout, "{saved}")?;
    if cli.summary {
        write!(stdout, "{}", render_summary(&outcome.summary))?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topsis_ranker::adapters::InMemoryTableStore;
    use topsis_ranker::domain::analysis::DataTable;

    fn outcome() -> RankAlternativesResult {
        let table = DataTable::builder()
            .headers(vec!["Model", "Price", "Storage", "Camera"])
            .row(vec!["M1", "250", "16", "12"])
            .row(vec!["M2", "200", "32", "8"])
            .build();
        let store = InMemoryTableStore::new().with_table("in.csv", table);
        let handler = RankAlternativesHandler::new(Arc::new(store.clone()), Arc::new(store));
        let cli = Cli::parse_from(["topsis", "in.csv", "1,1,1", "-,+,+", "out.csv"]);
        handler.handle(cli.command()).unwrap()
    }

    fn captured(args: &[&str]) -> (String, String) {
        let cli = Cli::parse_from(args);
        let (mut out, mut err) = (Vec::new(), Vec::new());
        report(&cli, &outcome(), &mut out, &mut err).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn json_mode_keeps_stdout_parseable() {
        let (out, err) = captured(&["topsis", "in.csv", "1,1,1", "-,+,+", "out.csv", "--json"]);

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["alternatives"].as_array().unwrap().len(), 2);
        assert_eq!(err.trim(), "Result saved in out.csv");
    }

    #[test]
    fn plain_mode_prints_location_on_stdout() {
        let (out, err) = captured(&["topsis", "in.csv", "1,1,1", "-,+,+", "out.csv"]);

        assert_eq!(out, "Result saved in out.csv\n");
        assert!(err.is_empty());
    }

    #[test]
    fn summary_follows_location() {
        let (out, _) = captured(&["topsis", "in.csv", "1,1,1", "-,+,+", "out.csv", "--summary"]);

        assert!(out.starts_with("Result saved in out.csv\n"));
        assert!(out.contains("TOPSIS Ranking"));
    }
}
