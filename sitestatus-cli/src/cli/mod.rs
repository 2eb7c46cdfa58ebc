//! Command-line interface

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::{ColumnCommands, InferCommands};

#[derive(Debug, Parser)]
#[command(name = "sitestatus", version, about = "Infer the column layout of site status spreadsheets")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Infer which columns hold each status field
    Infer(InferCommands),
    /// Convert between column indices and labels
    Column(ColumnCommands),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_infer_command() {
        let cli = Cli::try_parse_from([
            "sitestatus",
            "-vv",
            "infer",
            "a.xlsx",
            "b.xlsx",
            "--current-month",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let Commands::Infer(args) = cli.command else {
            panic!("expected infer command");
        };
        assert_eq!(args.files.len(), 2);
        assert!(args.current_month);
        assert!(!args.past_month);
    }

    #[test]
    fn test_period_flags_conflict() {
        let result = Cli::try_parse_from([
            "sitestatus",
            "infer",
            "a.xlsx",
            "--past-month",
            "--current-month",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_infer_requires_a_file() {
        assert!(Cli::try_parse_from(["sitestatus", "infer"]).is_err());
    }

    #[test]
    fn test_parse_column_command() {
        let cli = Cli::try_parse_from(["sitestatus", "column", "5", "AA"]).unwrap();
        let Commands::Column(args) = cli.command else {
            panic!("expected column command");
        };
        assert_eq!(args.columns, vec!["5", "AA"]);
    }
}
