//! Discussion entities
//!
//! A [`CandidatePage`] is a discussion the participant edited; analyzing it
//! yields a [`DiscussionOutcome`].

use crate::outcome::{ResultCategory, VoteCategory};
use crate::review::{ReviewReference, render_citation_links};
use serde::{Deserialize, Serialize};

/// A discussion the participant edited, with its first-revision metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePage {
    /// Page identifier in underscore form, e.g. `Articles_for_deletion/Foo_bar`
    pub page: String,
    /// Author of the first revision (the nominator)
    pub first_editor: String,
    /// First revision timestamp, `YYYYMMDDHHMMSS`
    pub first_edit_timestamp: String,
}

impl CandidatePage {
    pub fn new(
        page: impl Into<String>,
        first_editor: impl Into<String>,
        first_edit_timestamp: impl Into<String>,
    ) -> Self {
        Self {
            page: page.into(),
            first_editor: first_editor.into(),
            first_edit_timestamp: first_edit_timestamp.into(),
        }
    }
}

/// The participant's effective vote in one discussion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub page: String,
    pub vote: VoteCategory,
    /// "Month D, YYYY", or empty when the signature had no readable date
    pub vote_date: String,
    pub result: ResultCategory,
    /// The vote was synthesized from the participant being the nominator
    pub nominator_fallback: bool,
    pub review_references: Vec<ReviewReference>,
}

impl VoteRecord {
    /// Deletion review citations rendered as HTML superscript links
    pub fn review_links_html(&self) -> String {
        render_citation_links(&self.review_references)
    }
}

/// A discussion where no vote by the participant was detected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoVoteEntry {
    pub page: String,
    /// Signer of the closing statement, if one could be resolved
    pub closer: Option<String>,
}

/// Result of analyzing one discussion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiscussionOutcome {
    Voted(VoteRecord),
    NoVote(NoVoteEntry),
}

impl DiscussionOutcome {
    pub fn page(&self) -> &str {
        match self {
            DiscussionOutcome::Voted(record) => &record.page,
            DiscussionOutcome::NoVote(entry) => &entry.page,
        }
    }

    pub fn vote_record(&self) -> Option<&VoteRecord> {
        match self {
            DiscussionOutcome::Voted(record) => Some(record),
            DiscussionOutcome::NoVote(_) => None,
        }
    }
}
