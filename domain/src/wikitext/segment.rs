//! Discussion page segmentation
//!
//! A deletion discussion is split into three overlapping regions:
//!
//! | Region | Extent | Used by |
//! |--------|--------|---------|
//! | pre-heading | start .. first `==` | nomination rationale, review references |
//! | votes | first `==` .. end | comment extraction |
//! | closing | start .. max(first `==`, first `(UTC)`) | result classification |
//!
//! Closing statements are frequently written above any heading, which is why
//! the closing region may extend past the heading up to the first signature.

use regex::Regex;
use std::sync::LazyLock;

const HEADING_MARKER: &str = "==";
const UTC_MARKER: &str = "(UTC)";

static STRIKE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(?:s|strike|del)>.*?</(?:s|strike|del)>").expect("strike pattern")
});

/// Remove struck-through spans (`<s>`, `<strike>`, `<del>`)
pub fn strip_strikes(text: &str) -> String {
    STRIKE_PATTERN.replace_all(text, "").into_owned()
}

/// A discussion body with strikes removed, ready to be segmented
#[derive(Debug, Clone)]
pub struct DiscussionText {
    text: String,
}

impl DiscussionText {
    pub fn new(raw: &str) -> Self {
        Self {
            text: strip_strikes(raw),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn segments(&self) -> Segments<'_> {
        Segments::split(&self.text)
    }
}

/// Borrowed views into the regions of a discussion
#[derive(Debug, Clone, Copy)]
pub struct Segments<'a> {
    /// Text before the first heading (the whole text if there is none)
    pub pre_heading: &'a str,
    /// Text from the first heading onward (the whole text if there is none)
    pub votes: &'a str,
    /// Text searched for the closing statement
    pub closing: &'a str,
}

impl<'a> Segments<'a> {
    pub fn split(text: &'a str) -> Self {
        let heading = text.find(HEADING_MARKER);
        let first_utc = text.find(UTC_MARKER);

        let (pre_heading, votes) = match heading {
            Some(idx) => (&text[..idx], &text[idx..]),
            None => (text, text),
        };

        let closing_end = match (heading, first_utc) {
            (Some(h), Some(u)) => h.max(u),
            (Some(h), None) => h,
            (None, Some(u)) => u,
            (None, None) => text.len(),
        };

        Self {
            pre_heading,
            votes,
            closing: &text[..closing_end],
        }
    }
}
