//! CLI argument definitions for the lab-results triage tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "labtriage",
    version,
    about = "Laboratory result triage - classify values and flag panic results",
    long_about = "Classify exported laboratory results against reference ranges.\n\n\
                  Out-of-range rows are deselected for re-review; panic values lock\n\
                  the batch (exit code 2) until a reviewer acknowledges them."
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

    /// Allow raw result values (PHI) in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Evaluate result sheets and flag abnormal or panic values.
    Check(CheckArgs),

    /// Print the curated fallback-range and panic-threshold tables.
    Rules,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Result sheets to evaluate: CSV files or directories of CSV files.
    #[arg(value_name = "SHEET", required = true)]
    pub inputs: Vec<PathBuf>,

    /// TOML options profile (flags below override profile values).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write triage_report.json into this directory.
    #[arg(long = "report-dir", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,

    /// Keep out-of-range rows selected instead of deselecting them.
    #[arg(long = "no-auto-deselect")]
    pub no_auto_deselect: bool,

    /// Also deselect rows whose value is exactly zero.
    #[arg(long = "deselect-zero")]
    pub deselect_zero: bool,

    /// Also deselect rows whose value is negative.
    #[arg(long = "deselect-negative")]
    pub deselect_negative: bool,

    /// Wait up to this many milliseconds for the inputs to appear.
    ///
    /// Useful when an upstream export job writes the sheets. On timeout the
    /// classifier does not run and the command exits with an error.
    #[arg(long = "wait-ms", value_name = "MS", default_value_t = 0)]
    pub wait_ms: u64,
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
