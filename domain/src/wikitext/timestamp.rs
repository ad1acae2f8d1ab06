//! Timestamp helpers
//!
//! Signatures end in `HH:MM, D Month YYYY (UTC)`; revision metadata uses
//! `YYYYMMDDHHMMSS`. Both are rendered as "Month D, YYYY".

use crate::core::error::DomainError;
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

static SIGNATURE_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{2}:\d{2}, .*?) \(UTC\)").expect("signature time pattern")
});

static SIGNATURE_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{2}:\d{2}, (\d{1,2}) ([A-Za-z]*) (\d{4})").expect("signature date pattern")
});

static DISPLAY_DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z]*) (\d{1,2}), (\d{4})").expect("display date pattern")
});

const REVISION_FORMAT: &str = "%Y%m%d%H%M%S";
const DISPLAY_FORMAT: &str = "%B %-d, %Y";

/// Date of the first signature in `text`, as "Month D, YYYY"
pub fn signature_date(text: &str) -> Option<String> {
    let stamp = SIGNATURE_TIME_PATTERN.captures(text)?.get(1)?.as_str();
    let parts = SIGNATURE_DATE_PATTERN.captures(stamp)?;
    Some(format!("{} {}, {}", &parts[2], &parts[1], &parts[3]))
}

/// Render a `YYYYMMDDHHMMSS` revision timestamp as "Month D, YYYY"
pub fn revision_date(timestamp: &str) -> Result<String, DomainError> {
    NaiveDateTime::parse_from_str(timestamp.trim(), REVISION_FORMAT)
        .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        .map_err(|e| DomainError::InvalidTimestamp {
            value: timestamp.to_string(),
            reason: e.to_string(),
        })
}

/// Convert a "Month D, YYYY" date into `YYYYMMDD` (used to page backwards
/// through older discussions)
pub fn compact_date(display: &str) -> Option<String> {
    let parts = DISPLAY_DATE_PATTERN.captures(display)?;
    let normalized = format!("{} {} {}", &parts[1], &parts[2], &parts[3]);
    NaiveDate::parse_from_str(&normalized, "%B %d %Y")
        .ok()
        .map(|d| d.format("%Y%m%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_date() {
        let text = "'''Keep''' [[User:A]] 09:41, 3 March 2021 (UTC)";
        assert_eq!(signature_date(text).as_deref(), Some("March 3, 2021"));
    }

    #[test]
    fn test_signature_date_uses_first_stamp() {
        let text = "[[User:A]] 09:41, 3 March 2021 (UTC) reply 10:00, 4 March 2021 (UTC)";
        assert_eq!(signature_date(text).as_deref(), Some("March 3, 2021"));
    }

    #[test]
    fn test_signature_date_missing() {
        assert_eq!(signature_date("'''Keep''' [[User:A]]"), None);
        assert_eq!(signature_date("12:00, sometime (UTC)"), None);
    }

    #[test]
    fn test_revision_date() {
        assert_eq!(revision_date("20200503120000").unwrap(), "May 3, 2020");
        assert_eq!(revision_date("20191231235959").unwrap(), "December 31, 2019");
    }

    #[test]
    fn test_revision_date_invalid() {
        let err = revision_date("2020-05-03").unwrap_err();
        assert!(matches!(err, DomainError::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_compact_date() {
        assert_eq!(compact_date("May 3, 2020").as_deref(), Some("20200503"));
        assert_eq!(compact_date("December 31, 2019").as_deref(), Some("20191231"));
        assert_eq!(compact_date(""), None);
        assert_eq!(compact_date("Smarch 3, 2020"), None);
    }
}
