//! Result classification
//!
//! Finds the closing statement ("The result of the debate was '''keep'''")
//! and maps the bolded verdict to a [`ResultCategory`].

use crate::outcome::{Outcome, ResultCategory};
use regex::Regex;
use std::sync::LazyLock;

static RESULT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)The result (?:of the debate )?was(?:.*?\n?.*?)'''(.*?)'''")
        .expect("result pattern")
});

/// Boilerplate found on closed discussions whose verdict could not be read
const ARCHIVE_PHRASES: &[&str] = &[
    "The following discussion is an archived debate of the proposed deletion of the article below",
    "This page is an archive of the proposed deletion of the article below.",
    "'''This page is no longer live.'''",
];

/// Ordered verdict keywords. "no consensus" must precede "keep"/"delete",
/// and the speedy/snow variants must precede the bare keywords.
const RESULT_KEYWORDS: &[(&str, ResultCategory)] = &[
    ("no consensus", ResultCategory::NoConsensus),
    ("merge", ResultCategory::Closed(Outcome::Merge)),
    ("redirect", ResultCategory::Closed(Outcome::Redirect)),
    ("speedy keep", ResultCategory::Closed(Outcome::SpeedyKeep)),
    ("speedily keep", ResultCategory::Closed(Outcome::SpeedyKeep)),
    ("speedyily kept", ResultCategory::Closed(Outcome::SpeedyKeep)),
    ("snow keep", ResultCategory::Closed(Outcome::SpeedyKeep)),
    ("snowball keep", ResultCategory::Closed(Outcome::SpeedyKeep)),
    ("speedy close", ResultCategory::Closed(Outcome::SpeedyKeep)),
    ("speedy delet", ResultCategory::Closed(Outcome::SpeedyDelete)),
    ("speedily delet", ResultCategory::Closed(Outcome::SpeedyDelete)),
    ("snow delet", ResultCategory::Closed(Outcome::SpeedyDelete)),
    ("snowball delet", ResultCategory::Closed(Outcome::SpeedyDelete)),
    ("keep", ResultCategory::Closed(Outcome::Keep)),
    ("delete", ResultCategory::Closed(Outcome::Delete)),
    ("transwiki", ResultCategory::Closed(Outcome::Transwiki)),
    ("userf", ResultCategory::Closed(Outcome::Userfy)),
    ("incubat", ResultCategory::Closed(Outcome::Userfy)),
    ("draftif", ResultCategory::Closed(Outcome::Userfy)),
    // A withdrawn nomination is effectively a speedy keep
    ("withdraw", ResultCategory::Closed(Outcome::SpeedyKeep)),
];

/// Classifies the closing statement of a discussion
#[derive(Debug, Clone)]
pub struct ResultClassifier {
    keywords: &'static [(&'static str, ResultCategory)],
}

impl ResultClassifier {
    pub fn new() -> Self {
        Self {
            keywords: RESULT_KEYWORDS,
        }
    }

    /// The bolded verdict text of the closing statement, if present
    pub fn verdict<'a>(&self, closing: &'a str) -> Option<&'a str> {
        RESULT_PATTERN
            .captures(closing)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }

    /// Classify the closing region of a discussion
    pub fn classify(&self, closing: &str) -> ResultCategory {
        let Some(verdict) = self.verdict(closing) else {
            return if ARCHIVE_PHRASES.iter().any(|p| closing.contains(p)) {
                ResultCategory::Undetermined
            } else {
                ResultCategory::NotClosedYet
            };
        };
        self.classify_verdict(verdict)
    }

    /// Classify verdict wording directly
    pub fn classify_verdict(&self, verdict: &str) -> ResultCategory {
        let verdict = verdict.to_lowercase();
        self.keywords
            .iter()
            .find(|(keyword, _)| verdict.contains(keyword))
            .map(|(_, result)| *result)
            .unwrap_or(ResultCategory::Undetermined)
    }
}

impl Default for ResultClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(closing: &str) -> ResultCategory {
        ResultClassifier::new().classify(closing)
    }

    #[test]
    fn test_result_of_the_debate() {
        assert_eq!(
            classify("The result of the debate was '''keep'''"),
            ResultCategory::Closed(Outcome::Keep)
        );
    }

    #[test]
    fn test_no_consensus_before_delete() {
        assert_eq!(
            classify("The result was '''no consensus, leaning delete'''"),
            ResultCategory::NoConsensus
        );
    }

    #[test]
    fn test_verdict_on_next_line() {
        let closing = "The result was\n'''Delete'''. [[User:Closer|Closer]]";
        assert_eq!(classify(closing), ResultCategory::Closed(Outcome::Delete));
    }

    #[test]
    fn test_case_insensitive_phrase() {
        assert_eq!(
            classify("the RESULT was '''Speedy Keep'''."),
            ResultCategory::Closed(Outcome::SpeedyKeep)
        );
    }

    #[test]
    fn test_snow_and_withdrawn() {
        assert_eq!(
            classify("The result was '''snow keep'''"),
            ResultCategory::Closed(Outcome::SpeedyKeep)
        );
        assert_eq!(
            classify("The result was '''snowball delete'''"),
            ResultCategory::Closed(Outcome::SpeedyDelete)
        );
        assert_eq!(
            classify("The result was '''nomination withdrawn'''"),
            ResultCategory::Closed(Outcome::SpeedyKeep)
        );
    }

    #[test]
    fn test_archive_without_phrase_is_undetermined() {
        let text = "This page is an archive of the proposed deletion of the article below.";
        assert_eq!(classify(text), ResultCategory::Undetermined);
    }

    #[test]
    fn test_open_discussion() {
        assert_eq!(
            classify("[[Foo]] is a non-notable band."),
            ResultCategory::NotClosedYet
        );
    }

    #[test]
    fn test_unrecognised_verdict() {
        assert_eq!(
            classify("The result was '''moot'''"),
            ResultCategory::Undetermined
        );
    }

    #[test]
    fn test_verdict_extraction() {
        let classifier = ResultClassifier::new();
        assert_eq!(
            classifier.verdict("The result was '''merge''' to [[Bar]]."),
            Some("merge")
        );
        assert_eq!(classifier.verdict("no closing statement"), None);
    }
}
