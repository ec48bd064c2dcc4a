/// CLI argument definitions for the `topsis` command.
use std::path::PathBuf;

use clap::Parser;
use topsis_ranker::application::RankAlternativesCommand;

/// Rank alternatives in a delimited table with TOPSIS.
#[derive(Debug, Parser)]
#[command(name = "topsis", version, about = "Rank alternatives using the TOPSIS method")]
pub struct Cli {
    /// Input table: identifier column followed by numeric criteria columns
    pub input: PathBuf,

    /// Comma-separated weights, one per criterion (e.g. "1,1,1,2")
    #[arg(allow_hyphen_values = true)]
    pub weights: String,

    /// Comma-separated impacts, '+' for benefit or '-' for cost (e.g. "+,+,-,+")
    #[arg(allow_hyphen_values = true)]
    pub impacts: String,

    /// Where to write the input table with score and rank columns appended
    pub output: PathBuf,

    /// Print the ranking summary as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Print a ranking table on stdout
    #[arg(long)]
    pub summary: bool,

    /// Config file (default: topsis.toml in the working directory, if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The ranking command these arguments describe.
    pub fn command(&self) -> RankAlternativesCommand {
        RankAlternativesCommand {
            input_path: self.input.clone(),
            output_path: self.output.clone(),
            weights: self.weights.clone(),
            impacts: self.impacts.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_four_positionals() {
        let cli = Cli::try_parse_from(["topsis", "in.csv", "1,1,1", "+,-,+", "out.csv"]).unwrap();
        let cmd = cli.command();
        assert_eq!(cmd.input_path, PathBuf::from("in.csv"));
        assert_eq!(cmd.weights, "1,1,1");
        assert_eq!(cmd.impacts, "+,-,+");
        assert_eq!(cmd.output_path, PathBuf::from("out.csv"));
        assert!(!cli.json);
        assert!(!cli.summary);
    }

    #[test]
    fn accepts_leading_minus_values() {
        let cli =
            Cli::try_parse_from(["topsis", "in.csv", "-1,2,3", "-,+,+", "out.csv", "--json"])
                .unwrap();
        assert_eq!(cli.weights, "-1,2,3");
        assert_eq!(cli.impacts, "-,+,+");
        assert!(cli.json);
    }

    #[test]
    fn missing_output_is_usage_error() {
        assert!(Cli::try_parse_from(["topsis", "in.csv", "1,1,1", "+,+,+"]).is_err());
    }

    #[test]
    fn config_flag_takes_path() {
        let cli = Cli::try_parse_from([
            "topsis", "in.csv", "1,1,1", "+,+,+", "out.csv", "--config", "rank.toml", "--summary",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("rank.toml")));
        assert!(cli.summary);
    }
}
