//! Signature resolution
//!
//! Comments often quote, ping or link other participants before the author
//! signs, so the signer is taken from the *last* user link in the comment.

use regex::Regex;
use std::sync::LazyLock;

static USER_LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\[\[User.*?:(.*?)(?:\||\]\])").expect("user link pattern")
});

const USER_LINK_OPENINGS: [&str; 2] = ["[[User", "[[user"];
const TOP_ANCHOR: &str = "#top";

/// Byte offset of the rightmost user link opening, if any
fn last_user_link(text: &str) -> Option<usize> {
    USER_LINK_OPENINGS
        .iter()
        .filter_map(|opening| text.rfind(opening))
        .max()
}

/// Resolve the participant who signed `text`.
///
/// Returns the normalized name (underscores as spaces, `#top` removed) or
/// `None` if the text holds no parsable user link.
pub fn resolve_signer(text: &str) -> Option<String> {
    let start = last_user_link(text)?;
    let captures = USER_LINK_PATTERN.captures(&text[start..])?;
    let raw = captures.get(1)?.as_str().trim();
    let name = raw.strip_suffix(TOP_ANCHOR).unwrap_or(raw);
    Some(normalize_name(name))
}

/// MediaWiki treats underscores and spaces in user names as the same
pub fn normalize_name(name: &str) -> String {
    name.replace('_', " ").trim().to_string()
}
