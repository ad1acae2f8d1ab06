//! CLI command definitions

use afdstats_domain::OutputFormat as ReportFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the statistics report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal report
    Text,
    /// Standalone HTML page
    Html,
    /// Machine-readable JSON
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Html => ReportFormat::Html,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

/// CLI arguments for afdstats
#[derive(Parser, Debug)]
#[command(name = "afdstats")]
#[command(author, version, about = "Articles for Deletion voting statistics for a Wikipedia user")]
#[command(long_about = r#"
afdstats compares a user's votes in Articles for Deletion discussions with the
way those discussions were eventually closed.

For every AfD the user edited (newest first) it finds the user's last bolded
vote, classifies it and the closing result, and reports vote totals, a
vote-versus-result matrix and how often the two matched.

Configuration files are loaded from (in priority order):
1. AFDSTATS_* env       e.g. AFDSTATS_WIKI__TIMEOUT_SECONDS=60
2. --config <path>      Explicit config file
3. ./afdstats.toml      Project-level config
4. ~/.config/afdstats/config.toml   Global config

Example:
  afdstats "Jimbo Wales"
  afdstats Example --max 500 --startdate 20200101
  afdstats Example --nomsonly -o html > report.html
"#)]
pub struct Cli {
    /// Username whose votes are counted (not required with --show-config)
    pub name: Option<String>,

    /// Alternate name that appears in the user's signature
    #[arg(long, value_name = "NAME")]
    pub altname: Option<String>,

    /// Most AfDs to analyze, newest first (at most 500)
    #[arg(long, value_name = "N")]
    pub max: Option<usize>,

    /// Only consider edits on or before this day
    #[arg(long, value_name = "YYYYMMDD")]
    pub startdate: Option<String>,

    /// Only AfDs the user nominated
    #[arg(long)]
    pub nomsonly: bool,

    /// Include votes whose stance couldn't be classified
    #[arg(long)]
    pub undetermined: bool,

    /// Log every matched signature and comment (same as -vv)
    #[arg(long)]
    pub dev: bool,

    /// Output format [default: text, or `output.format` from config]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Log level implied by `-v` count and `--dev`
    pub fn log_level(&self) -> &'static str {
        let verbose = if self.dev {
            self.verbose.max(2)
        } else {
            self.verbose
        };
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace", // -vvv or more
        }
    }
}
