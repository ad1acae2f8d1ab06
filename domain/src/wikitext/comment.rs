//! Vote extraction
//!
//! A candidate comment is a bolded stance followed, eventually, by a user
//! link and a UTC timestamp:
//!
//! ```text
//! * '''Delete''' fails [[WP:GNG]]. [[User:Alice|Alice]] 10:00, 1 May 2020 (UTC)
//!   ^^^^^^^^^^^^------------------- ^^^^^^^^^^^^^^^^^^ ------------------^^^^^
//!   stance                          signature                            marker
//! ```
//!
//! The pattern is deliberately permissive. Matches that are not votes are
//! dropped later when no signer resolves or the stance is a remark.

use super::signature::resolve_signer;
use super::timestamp::signature_date;
use regex::Regex;
use std::sync::LazyLock;

static VOTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)'''.*?'''.*?",
        r#"(?:(?:\{\{unsigned.*?\}\})|(?:class="autosigned"))?"#,
        r"(?:\[\[User.*?\]\].*?\(UTC\))",
    ))
    .expect("vote pattern")
});

/// Offset of the stance text inside a comment (after the opening `'''`)
const STANCE_START: usize = 3;

/// A candidate comment borrowed from the vote region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comment<'a> {
    text: &'a str,
}

impl<'a> Comment<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Bolded stance wording, e.g. `Strong keep` for `'''Strong keep'''`
    pub fn stance(&self) -> &'a str {
        let Some(rest) = self.text.get(STANCE_START..) else {
            return "";
        };
        match rest.find('\'') {
            Some(end) => &rest[..end],
            None => rest,
        }
    }

    /// Normalized name of the participant who signed this comment
    pub fn signer(&self) -> Option<String> {
        resolve_signer(self.text)
    }

    /// Date of the comment's signature as "Month D, YYYY"
    pub fn date(&self) -> Option<String> {
        signature_date(self.text)
    }
}

/// All candidate comments in `region`, in document order
pub fn extract_comments(region: &str) -> Vec<Comment<'_>> {
    VOTE_PATTERN
        .find_iter(region)
        .map(|m| Comment::new(m.as_str()))
        .collect()
}
