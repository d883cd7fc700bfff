//! CLI argument definitions for the document migration helper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "docmig",
    version,
    about = "Normalize migrated documents field by field",
    long_about = "Apply idempotent field-level normalizations to JSON documents.\n\n\
                  Replaces \"null\" markers, fills missing fields, stamps schema versions\n\
                  and renders documents as SQL INSERT statements."
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

    /// Allow field values to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply a rule file to every document in a JSON array.
    Normalize(NormalizeArgs),

    /// Render documents as SQL INSERT statements.
    Sql(SqlArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// JSON file holding an array of flat documents.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// JSON rule file describing the normalization pipeline.
    #[arg(long = "rules", value_name = "FILE")]
    pub rules: PathBuf,

    /// Where to write the normalized documents (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Schema version to stamp, replacing any stamp in the rule file.
    ///
    /// Integers are stamped as numbers, anything else as text.
    #[arg(long = "schema-version", value_name = "VERSION")]
    pub schema_version: Option<String>,
}

#[derive(Parser)]
pub struct SqlArgs {
    /// JSON file holding an array of flat documents.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Target table name.
    #[arg(long = "table", value_name = "NAME")]
    pub table: String,

    /// Comma-separated list of fields to emit, in column order.
    #[arg(long = "fields", value_name = "FIELDS", value_delimiter = ',', required = true)]
    pub fields: Vec<String>,

    /// Double embedded single quotes.
    ///
    /// Without this flag values are quoted verbatim, which is only safe for
    /// trusted data.
    #[arg(long = "escape")]
    pub escape: bool,
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
