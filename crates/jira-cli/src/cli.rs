//! CLI argument definitions for the bulk ticket loader.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use jira_ingest::Delimiter;
use jira_model::TicketVariant;

#[derive(Parser)]
#[command(
    name = "jira-bulk",
    version,
    about = "Bulk-create Jira tickets from a delimited spreadsheet export",
    long_about = "Bulk-create Jira tickets from a delimited spreadsheet export.\n\n\
                  Columns are bound to ticket fields by name matching, adjustable\n\
                  with --map; each run creates one story or sub-task per data row."
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
    /// Create one ticket per data row.
    Run(RunArgs),

    /// Show the resolved column-to-field mapping and the legal choices.
    Map(MapArgs),

    /// Print the parsed table without creating anything.
    Preview(PreviewArgs),

    /// List the ticket fields columns can be mapped to.
    Fields,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the delimited export; first row is the header.
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,

    /// Kind of ticket to create per row.
    #[arg(long = "variant", value_enum, default_value = "sub-task")]
    pub variant: VariantArg,

    /// Field delimiter used by the file.
    #[arg(long = "delimiter", value_enum, default_value = "semicolon")]
    pub delimiter: DelimiterArg,

    /// Override a binding, e.g. --map "Story Points=estimate".
    /// Columns are addressed by header name (case-insensitive) or 0-based index.
    #[arg(long = "map", value_name = "COLUMN=FIELD")]
    pub map: Vec<String>,

    /// Connection configuration file (domain, email, token, project).
    #[arg(long = "config", value_name = "PATH", default_value = "jira.json")]
    pub config: PathBuf,

    /// Log each would-be ticket instead of calling the tracker.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct MapArgs {
    /// Path to the delimited export; first row is the header.
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,

    /// Field delimiter used by the file.
    #[arg(long = "delimiter", value_enum, default_value = "semicolon")]
    pub delimiter: DelimiterArg,

    /// Override a binding before showing the result.
    #[arg(long = "map", value_name = "COLUMN=FIELD")]
    pub map: Vec<String>,
}

#[derive(Parser)]
pub struct PreviewArgs {
    /// Path to the delimited export; first row is the header.
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,

    /// Field delimiter used by the file.
    #[arg(long = "delimiter", value_enum, default_value = "semicolon")]
    pub delimiter: DelimiterArg,

    /// Show at most this many data rows.
    #[arg(long = "limit", value_name = "ROWS")]
    pub limit: Option<usize>,
}

/// CLI ticket variant choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum VariantArg {
    Story,
    SubTask,
}

impl From<VariantArg> for TicketVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Story => TicketVariant::Story,
            VariantArg::SubTask => TicketVariant::SubTask,
        }
    }
}

/// CLI delimiter choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DelimiterArg {
    Semicolon,
    Comma,
    Pipe,
    Tab,
}

impl From<DelimiterArg> for Delimiter {
    fn from(arg: DelimiterArg) -> Self {
        match arg {
            DelimiterArg::Semicolon => Delimiter::Semicolon,
            DelimiterArg::Comma => Delimiter::Comma,
            DelimiterArg::Pipe => Delimiter::Pipe,
            DelimiterArg::Tab => Delimiter::Tab,
        }
    }
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
