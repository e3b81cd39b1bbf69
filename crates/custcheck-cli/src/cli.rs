//! CLI argument definitions for the customer CSV checker.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use custcheck_cli::pipeline::{DEFAULT_LOGS_DIR, DEFAULT_OUTPUT_DIR};

#[derive(Parser)]
#[command(
    name = "custcheck",
    version,
    about = "Validate customer address CSV files and consolidate the valid rows",
    long_about = "Validate customer address CSV files and consolidate the valid rows.\n\n\
                  Input files are expected under <year>/<month>/<day>/ folders; the folder\n\
                  names become the Date column of every accepted row. Rejected rows are\n\
                  written to the log file with the reason for each failing field."
)]
pub struct Cli {
    /// Directory searched recursively for CSV files (prompted for when omitted).
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory for all_valid_customers.csv.
    #[arg(long = "output-dir", value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Directory for the rejection log (log.txt).
    #[arg(long = "logs-dir", value_name = "DIR", default_value = DEFAULT_LOGS_DIR)]
    pub logs_dir: PathBuf,

    /// Also write a JSON run report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Do not print the summary table.
    #[arg(long = "no-summary")]
    pub no_summary: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write operational logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Prefix operational log lines with a timestamp.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

    /// Include the module path in operational log lines.
    #[arg(long = "log-target")]
    pub log_target: bool,

    /// Allow customer field values in trace-level logs.
    #[arg(long = "log-data")]
    pub log_data: bool,
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
