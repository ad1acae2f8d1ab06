//! String utilities for the domain layer.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything but ASCII alphanumerics and `_ . - ~ /` is escaped
const PAGE_NAME: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Percent-encode a page name for use in a wiki URL path or fragment
pub fn percent_encode(s: &str) -> String {
    utf8_percent_encode(s, PAGE_NAME).to_string()
}

/// Page identifier (`Articles_for_deletion/Foo_bar`) as a display title
pub fn page_title(page: &str) -> String {
    page.replace('_', " ")
}
