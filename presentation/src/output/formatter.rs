//! Output formatter trait and helpers shared by the formatters

use afdstats_application::StatsReport;
use afdstats_domain::core::string::{page_title, truncate};

/// Longest page link text before it is cut with "..."
pub const LINK_TEXT_LIMIT: usize = 64;

/// Discussion prefix dropped from link text
const DISCUSSION_TITLE_PREFIX: &str = "Articles for deletion/";

/// Trait for rendering a statistics report
pub trait OutputFormatter {
    /// Format the complete report
    fn format(&self, report: &StatsReport) -> String;
}

/// `count / total` as a percentage with one decimal, e.g. "42.9%"
pub fn percent(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    ratio_percent(count as f64 / total as f64)
}

/// A ratio in `0.0..=1.0` as a percentage with one decimal
pub fn ratio_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Short display text for a discussion page
///
/// `Articles_for_deletion/Foo_bar` becomes `Foo bar`, capped at
/// [`LINK_TEXT_LIMIT`] characters.
pub fn link_text(page: &str) -> String {
    let title = page_title(page);
    let short = title
        .strip_prefix(DISCUSSION_TITLE_PREFIX)
        .unwrap_or(&title);
    truncate(short, LINK_TEXT_LIMIT)
}

/// Arguments that rerun the same query starting where this report ended
pub fn next_page_args(report: &StatsReport) -> Option<Vec<(String, Option<String>)>> {
    let start = report.next_start_date.as_ref()?;
    let mut args = vec![
        ("name".to_string(), Some(report.participant.url_name())),
        ("max".to_string(), Some(report.max_results.to_string())),
        ("startdate".to_string(), Some(start.clone())),
    ];
    if let Some(alternate) = report.participant.alternate() {
        args.push(("altname".to_string(), Some(alternate.to_string())));
    }
    if report.include_undetermined {
        args.push(("undetermined".to_string(), None));
    }
    if report.nominations_only {
        args.push(("nomsonly".to_string(), None));
    }
    Some(args)
}
