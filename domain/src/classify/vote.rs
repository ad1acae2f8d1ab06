//! Vote classification
//!
//! Maps a bolded stance ("Strong keep", "Speedy delete per nom") to a
//! [`VoteCategory`]. Keywords are substring matches tried in order, so
//! "speedy keep" must come before "keep".

use crate::outcome::{Outcome, VoteCategory};

/// Ordered stance keywords. `None` marks remarks that are not votes.
const VOTE_KEYWORDS: &[(&str, Option<Outcome>)] = &[
    ("comment", None),
    ("note", None),
    ("merge", Some(Outcome::Merge)),
    ("redirect", Some(Outcome::Redirect)),
    ("speedy keep", Some(Outcome::SpeedyKeep)),
    ("speedy delet", Some(Outcome::SpeedyDelete)),
    ("keep", Some(Outcome::Keep)),
    ("delete", Some(Outcome::Delete)),
    ("transwiki", Some(Outcome::Transwiki)),
    ("userf", Some(Outcome::Userfy)),
    ("incubat", Some(Outcome::Userfy)),
    ("draftif", Some(Outcome::Userfy)),
];

/// Classifies stance wording into vote categories
#[derive(Debug, Clone)]
pub struct VoteClassifier {
    keywords: &'static [(&'static str, Option<Outcome>)],
}

impl VoteClassifier {
    pub fn new() -> Self {
        Self {
            keywords: VOTE_KEYWORDS,
        }
    }

    /// Classify a stance.
    ///
    /// Returns `None` for remarks ("Comment", "Note") which must be skipped
    /// entirely, `Some(VoteCategory::Undetermined)` when nothing matched.
    pub fn classify(&self, stance: &str) -> Option<VoteCategory> {
        let stance = stance.to_lowercase();
        for (keyword, outcome) in self.keywords {
            if stance.contains(keyword) {
                return outcome.map(VoteCategory::Cast);
            }
        }
        Some(VoteCategory::Undetermined)
    }
}

impl Default for VoteClassifier {
    fn default() -> Self {
        Self::new()
    }
}
