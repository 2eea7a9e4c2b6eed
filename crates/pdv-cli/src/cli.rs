//! CLI argument definitions for the record validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use pdv_ingest::ReportFormat;
use pdv_validate::Alphabet;

use crate::config::RuleOverrides;

#[derive(Parser)]
#[command(
    name = "pdv",
    version,
    about = "Personal record validator - check records field by field",
    long_about = "Validate personal records read from a JSON file.\n\n\
                  Each record is checked against nine field rules in a fixed order.\n\
                  Valid records are written to a report; invalid records are counted\n\
                  under the first rule they fail."
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

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include record field values in log output.
    ///
    /// Field values are personal data and are redacted by default.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a record file and write the valid records.
    Validate(ValidateArgs),

    /// List the field rules in validation order.
    Rules,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the JSON file holding the records.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file for valid records (default: <INPUT stem>_valid.<ext>).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report format for valid records.
    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: ReportFormatArg,

    /// JSON file with blocklists and alphabet.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Occupation value to reject (repeatable).
    #[arg(long = "block-occupation", value_name = "VALUE")]
    pub block_occupation: Vec<String>,

    /// Political views value to reject (repeatable).
    #[arg(long = "block-political-views", value_name = "VALUE")]
    pub block_political_views: Vec<String>,

    /// Worldview value to reject (repeatable).
    #[arg(long = "block-worldview", value_name = "VALUE")]
    pub block_worldview: Vec<String>,

    /// Letters allowed as the capital of an occupation (overrides the config file).
    #[arg(long = "alphabet", value_enum)]
    pub alphabet: Option<AlphabetArg>,

    /// Classify and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Disable the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

impl ValidateArgs {
    /// Rule settings given on the command line.
    pub fn rule_overrides(&self) -> RuleOverrides {
        RuleOverrides {
            occupation: self.block_occupation.clone(),
            political_views: self.block_political_views.clone(),
            worldview: self.block_worldview.clone(),
            alphabet: self.alphabet.map(Alphabet::from),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Json,
    Csv,
    Text,
}

impl From<ReportFormatArg> for ReportFormat {
    fn from(arg: ReportFormatArg) -> Self {
        match arg {
            ReportFormatArg::Json => ReportFormat::Json,
            ReportFormatArg::Csv => ReportFormat::Csv,
            ReportFormatArg::Text => ReportFormat::Text,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlphabetArg {
    Cyrillic,
    Latin,
    CyrillicLatin,
}

impl From<AlphabetArg> for Alphabet {
    fn from(arg: AlphabetArg) -> Self {
        match arg {
            AlphabetArg::Cyrillic => Alphabet::Cyrillic,
            AlphabetArg::Latin => Alphabet::Latin,
            AlphabetArg::CyrillicLatin => Alphabet::CyrillicLatin,
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
