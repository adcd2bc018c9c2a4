//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabwash",
    version,
    about = "Clean messy tabular data",
    long_about = "Clean messy tabular data: normalize headers, drop duplicate rows,\n\
                  convert number words, coerce column types by majority vote,\n\
                  clip outliers, and fill missing values."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a CSV file and write the cleaned table plus a report.
    Clean(CleanArgs),

    /// Profile a CSV file's columns without cleaning it.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the CSV file to clean.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Cleaned CSV destination (default: <INPUT stem>_cleaned.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Cleaning report destination (default: <INPUT stem>_report.json).
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Clean and summarize without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the CSV file to profile.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_args_parse() {
        let cli = Cli::try_parse_from([
            "tabwash",
            "clean",
            "data.csv",
            "--output",
            "out.csv",
            "--dry-run",
        ])
        .expect("parse");
        let Command::Clean(args) = cli.command else {
            panic!("expected clean command");
        };
        assert_eq!(args.input, PathBuf::from("data.csv"));
        assert_eq!(args.output, Some(PathBuf::from("out.csv")));
        assert!(args.dry_run);
    }

    #[test]
    fn inspect_args_parse() {
        let cli = Cli::try_parse_from(["tabwash", "inspect", "data.csv"]).expect("parse");
        assert!(matches!(cli.command, Command::Inspect(_)));
    }
}
