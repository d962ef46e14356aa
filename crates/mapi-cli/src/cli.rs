//! CLI argument definitions for `mapi-tags`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use mapi_model::NormalizationOptions;

pub const DEFAULT_CACHE_DIR: &str = ".mapi-cache";

#[derive(Parser)]
#[command(
    name = "mapi-tags",
    version,
    about = "Canonical names for MAPI property tags",
    long_about = "Reduce MAPI property tag names from several documentation sources\n\
                  (PR_*, PidTag*, ptag*, InternalSchema*) to one snake_case name per\n\
                  tag value, and report the tags whose sources disagree."
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

    /// Directory that source documents are read from.
    #[arg(
        long = "cache-dir",
        value_name = "DIR",
        default_value = DEFAULT_CACHE_DIR,
        global = true
    )]
    pub cache_dir: PathBuf,

    /// Word list for dictionary segmentation of run-together words
    /// (one word per line, most frequent first; `.gz` accepted).
    #[arg(long = "segmentation-model", value_name = "PATH", global = true)]
    pub segmentation_model: Option<PathBuf>,

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

impl Cli {
    /// Normalization options from the global flags and, for the commands
    /// that list candidates, `--unsorted`.
    pub fn normalization_options(&self) -> NormalizationOptions {
        let unsorted = match &self.command {
            Command::Convert(args) => args.unsorted,
            Command::Check(args) => args.unsorted,
            Command::Normalize(_) | Command::Fetch(_) => false,
        };
        NormalizationOptions::new()
            .with_segmentation_model(self.segmentation_model.clone())
            .with_sort_candidates(!unsorted)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the canonical name derived for each raw tag name.
    Normalize(NormalizeArgs),

    /// Make sure every source document is present in the cache directory.
    Fetch(SourceArgs),

    /// Merge sources into a tag table and write it as JSON.
    Convert(ConvertArgs),

    /// List the tags of a table that still have no single name.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Raw names such as PR_DISPLAY_NAME or PidTagDisplayName.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

#[derive(Parser)]
pub struct SourceArgs {
    /// Source documents, relative to the cache directory.
    #[arg(value_name = "SOURCE", required = true)]
    pub sources: Vec<PathBuf>,
}

#[derive(Parser)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Existing table to merge into (its entries are kept as recorded).
    #[arg(long = "table", value_name = "PATH")]
    pub table: Option<PathBuf>,

    /// Where to write the table (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// List candidate names in first-seen order instead of sorted.
    #[arg(long = "unsorted")]
    pub unsorted: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Tag table written by `convert`.
    #[arg(value_name = "TABLE")]
    pub table: PathBuf,

    /// List candidate names in first-seen order instead of sorted.
    #[arg(long = "unsorted")]
    pub unsorted: bool,
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
