//! Presentation layer for afdstats
//!
//! This crate contains the CLI definition, report formatters
//! (text, HTML, JSON) and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::{
    ConsoleFormatter, HtmlFormatter, JsonFormatter, OutputFormatter, formatter_for,
};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
