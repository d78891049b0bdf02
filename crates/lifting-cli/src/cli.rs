//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lifting",
    version,
    about = "Clean lifting records and load them into a star-schema warehouse",
    long_about = "Clean raw lifting competition records and load them into a star-schema \
                  warehouse.\n\n\
                  Writes dimension and fact relations to SQLite and/or CSV, and can export \
                  the cleaned dataset and the warehouse DDL."
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
    /// Clean an input CSV and load the star schema.
    Run(RunArgs),

    /// Show the configured dimensions and fact relation.
    Schema(SchemaArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Raw lifting records (CSV with a header row).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Warehouse config (default: $LIFTING_WAREHOUSE_CONFIG or the built-in layout).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// SQLite database to load the relations into.
    #[arg(long = "database", value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// Directory receiving one CSV file per relation.
    #[arg(long = "csv-dir", value_name = "DIR")]
    pub csv_dir: Option<PathBuf>,

    /// Write the warehouse DDL to this file.
    #[arg(long = "ddl", value_name = "PATH")]
    pub ddl: Option<PathBuf>,

    /// Write the cleaned dataset to this CSV file.
    #[arg(long = "clean-csv", value_name = "PATH")]
    pub clean_csv: Option<PathBuf>,

    /// Validate and report without writing the database or output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write a JSON run report.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Warehouse config (default: $LIFTING_WAREHOUSE_CONFIG or the built-in layout).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
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
