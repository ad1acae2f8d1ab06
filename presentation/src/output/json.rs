//! JSON report formatter

use crate::output::formatter::OutputFormatter;
use afdstats_application::StatsReport;

/// Formats statistics reports as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn format(report: &StatsReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &StatsReport) -> String {
        Self::format(report)
    }
}
