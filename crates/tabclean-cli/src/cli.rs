//! CLI argument definitions for tabclean.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tabclean",
    version,
    about = "Remove formatting-only duplicate rows and canonicalize entity names in CSV datasets",
    long_about = "Remove duplicate rows that differ only by case or surrounding whitespace,\n\
                  then rewrite known aliases (e.g. \"usa\") to their canonical form\n\
                  (e.g. \"United States\") using a synonym vocabulary."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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
    /// Clean a CSV dataset and write the optimized copy.
    Clean(CleanArgs),

    /// Show the synonym vocabulary that cleaning would use.
    Vocab(VocabArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the CSV file to clean.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: optimized_<timestamp>.csv next to the input).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Vocabulary file (.toml or .csv) replacing the built-in synonyms.
    #[arg(long = "vocab", value_name = "PATH")]
    pub vocab: Option<PathBuf>,

    /// Report what would change without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Number of input rows to show before the summary.
    #[arg(long = "preview-rows", value_name = "N", default_value_t = 5)]
    pub preview_rows: usize,
}

#[derive(Parser)]
pub struct VocabArgs {
    /// Vocabulary file (.toml or .csv); the built-in vocabulary when omitted.
    #[arg(long = "vocab", value_name = "PATH")]
    pub vocab: Option<PathBuf>,
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
