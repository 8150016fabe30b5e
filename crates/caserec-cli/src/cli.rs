//! CLI argument definitions for the case-record cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "caserec",
    version,
    about = "Case-record cleaner - Validate and normalize agency case exports",
    long_about = "Validate and normalize pipe-delimited case-record exports.\n\n\
                  Each file is checked row by row against a typed schema;\n\
                  invalid cells are defaulted and reported in a per-file\n\
                  error CSV alongside the cleaned output."
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
    /// Clean one or more exports against a schema.
    Clean(CleanArgs),

    /// List the vocabularies available to choice columns.
    Vocab(VocabArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Input files to clean.
    #[arg(value_name = "FILE", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Schema configuration (JSON).
    #[arg(long = "schema", value_name = "PATH")]
    pub schema: PathBuf,

    /// Output directory (default: <input dir>/cleaned).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Directory of extra vocabulary JSON files layered over the built-ins.
    #[arg(long = "vocab-dir", value_name = "DIR")]
    pub vocab_dir: Option<PathBuf>,

    /// Concatenate all cleaned files into one consolidated CSV.
    #[arg(long = "concat", value_name = "PATH")]
    pub concat: Option<PathBuf>,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Never flag vocabulary misses; keep the normalized value as-is.
    #[arg(long = "permissive")]
    pub permissive: bool,

    /// Flag datetime values that carry a time where a date was expected.
    #[arg(long = "strict-dates")]
    pub strict_dates: bool,
}

#[derive(Parser)]
pub struct VocabArgs {
    /// Directory of extra vocabulary JSON files layered over the built-ins.
    #[arg(long = "vocab-dir", value_name = "DIR")]
    pub vocab_dir: Option<PathBuf>,
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
