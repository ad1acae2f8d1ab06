//! Deletion review cross-references
//!
//! Closed discussions that were later taken to Deletion Review carry a
//! template such as `{{delrev xfd|date=2020 May 3|page=Foo}}` above the
//! first heading. Each dated template becomes a numbered citation linking to
//! the review log.

use crate::core::string::percent_encode;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static REVIEW_TEMPLATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\{\{delrev xfd|\{\{delrevafd|\{\{delrevxfd)(.*?)\}\}")
        .expect("review template pattern")
});

static REVIEW_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\|date=(\d{4} \w*? \d{1,2})").expect("review date pattern")
});

static REVIEW_PAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\|page=(.*?)(?:\||$)").expect("review page pattern"));

/// Base URL of the Deletion Review daily logs
pub const REVIEW_LOG_URL: &str = "https://en.wikipedia.org/wiki/Wikipedia:Deletion_review/Log/";

/// Prefix stripped from a discussion's page name to derive the review anchor
const DISCUSSION_PREFIX: &str = "Articles_for_deletion/";

/// A citation pointing at a Deletion Review log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewReference {
    /// 1-based citation number, in discovery order
    pub citation_index: usize,
    /// Log date, e.g. "2020 May 3"
    pub target_date: String,
    /// Anchor inside the log page
    pub target_page: String,
}

impl ReviewReference {
    /// Link to the review log section
    pub fn url(&self) -> String {
        format!(
            "{}{}#{}",
            REVIEW_LOG_URL,
            self.target_date.replace(' ', "_"),
            percent_encode(&self.target_page)
        )
    }

    /// Numbered superscript link, e.g. `[1]`
    pub fn citation_html(&self) -> String {
        format!(
            r#"<a href="{}"><sup><small>[{}]</small></sup></a>"#,
            self.url(),
            self.citation_index
        )
    }
}

/// Find every dated review template in `pre_heading`.
///
/// Templates without a parsable `date=` are skipped and do not consume a
/// citation number.
pub fn detect_review_references(pre_heading: &str, page: &str) -> Vec<ReviewReference> {
    let mut references = Vec::new();
    for template in REVIEW_TEMPLATE_PATTERN.captures_iter(pre_heading) {
        let Some(body) = template.get(1).map(|m| m.as_str()) else {
            continue;
        };
        let Some(date) = REVIEW_DATE_PATTERN
            .captures(body)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
        else {
            continue;
        };
        let target_page = REVIEW_PAGE_PATTERN
            .captures(body)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| page.replacen(DISCUSSION_PREFIX, "", 1));

        references.push(ReviewReference {
            citation_index: references.len() + 1,
            target_date: date,
            target_page,
        });
    }
    references
}

/// Concatenated citation links, in citation order
pub fn render_citation_links(references: &[ReviewReference]) -> String {
    references.iter().map(ReviewReference::citation_html).collect()
}
