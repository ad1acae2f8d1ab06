//! Report formatters
//!
//! - [`ConsoleFormatter`]: colored terminal report
//! - [`HtmlFormatter`]: standalone results page
//! - [`JsonFormatter`]: the report as JSON

pub mod console;
pub mod formatter;
pub mod html;
pub mod json;

#[cfg(test)]
pub(crate) mod fixtures;

pub use console::ConsoleFormatter;
pub use formatter::OutputFormatter;
pub use html::HtmlFormatter;
pub use json::JsonFormatter;

use afdstats_domain::OutputFormat;

/// Formatter for the requested output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Html => Box::new(HtmlFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
