//! Per-discussion analysis
//!
//! Turns one discussion's wikitext into the participant's effective vote:
//!
//! ```text
//! wikitext ─▶ strip strikes ─▶ segments ─┬─ votes ──▶ comments ─▶ signer == participant? ─▶ stance
//!                                        ├─ closing ─▶ result
//!                                        └─ pre-heading ─▶ review references
//! ```
//!
//! When the participant commented several times, the last vote wins. When
//! they never voted but nominated the page, the nomination counts as an
//! implicit Delete.

use super::entities::{CandidatePage, DiscussionOutcome, NoVoteEntry, VoteRecord};
use super::participant::Participant;
use crate::classify::{ResultClassifier, VoteClassifier};
use crate::core::error::DomainError;
use crate::outcome::{Outcome, VoteCategory};
use crate::review::detect_review_references;
use crate::wikitext::{DiscussionText, extract_comments, resolve_signer, revision_date};

/// A vote by the participant found in the discussion body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedVote {
    pub category: VoteCategory,
    pub date: String,
}

/// Analyzes discussions on behalf of one participant
#[derive(Debug, Clone)]
pub struct DiscussionAnalyzer {
    participant: Participant,
    include_undetermined: bool,
    votes: VoteClassifier,
    results: ResultClassifier,
}

impl DiscussionAnalyzer {
    pub fn new(participant: Participant) -> Self {
        Self {
            participant,
            include_undetermined: false,
            votes: VoteClassifier::new(),
            results: ResultClassifier::new(),
        }
    }

    /// Keep votes whose stance could not be classified
    pub fn with_undetermined(mut self, include: bool) -> Self {
        self.include_undetermined = include;
        self
    }

    pub fn participant(&self) -> &Participant {
        &self.participant
    }

    pub fn include_undetermined(&self) -> bool {
        self.include_undetermined
    }

    /// Whether the participant created (nominated) the discussion
    pub fn is_nominator(&self, candidate: &CandidatePage) -> bool {
        self.participant.matches(&candidate.first_editor)
    }

    /// Analyze one discussion.
    ///
    /// Errors only on structural problems (bad first-revision timestamp);
    /// callers skip the discussion and carry on.
    pub fn analyze(
        &self,
        candidate: &CandidatePage,
        wikitext: &str,
    ) -> Result<DiscussionOutcome, DomainError> {
        let nomination_date = revision_date(&candidate.first_edit_timestamp)
            .map_err(|e| e.in_page(&candidate.page))?;
        let is_nominator = self.is_nominator(candidate);

        let discussion = DiscussionText::new(wikitext);
        let segments = discussion.segments();
        let result = self.results.classify(segments.closing);
        let review_references = detect_review_references(segments.pre_heading, &candidate.page);

        let votes = self.participant_votes(segments.votes, is_nominator);

        let outcome = match votes.into_iter().last() {
            Some(vote) => DiscussionOutcome::Voted(VoteRecord {
                page: candidate.page.clone(),
                vote: vote.category,
                vote_date: vote.date,
                result,
                nominator_fallback: false,
                review_references,
            }),
            None if is_nominator => DiscussionOutcome::Voted(VoteRecord {
                page: candidate.page.clone(),
                vote: VoteCategory::Cast(Outcome::Delete),
                vote_date: nomination_date,
                result,
                nominator_fallback: true,
                review_references,
            }),
            None => DiscussionOutcome::NoVote(NoVoteEntry {
                page: candidate.page.clone(),
                closer: resolve_signer(segments.closing),
            }),
        };
        Ok(outcome)
    }

    /// Every qualifying vote by the participant, in document order
    pub fn participant_votes(&self, votes_region: &str, is_nominator: bool) -> Vec<DetectedVote> {
        extract_comments(votes_region)
            .into_iter()
            .filter_map(|comment| {
                let signer = comment.signer()?;
                if !self.participant.matches(&signer) {
                    return None;
                }
                let category = self.votes.classify(comment.stance())?;
                if category.is_undetermined() && (!self.include_undetermined || is_nominator) {
                    return None;
                }
                Some(DetectedVote {
                    category,
                    date: comment.date().unwrap_or_default(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::ResultCategory;

    const PAGE: &str = "Articles_for_deletion/Foo_Bar";

    fn analyzer(name: &str) -> DiscussionAnalyzer {
        DiscussionAnalyzer::new(Participant::new(name).unwrap())
    }

    fn candidate(first_editor: &str) -> CandidatePage {
        CandidatePage::new(PAGE, first_editor, "20200501093000")
    }

    const CLOSED: &str = "\
{{delrev xfd|date=2020 June 2}}
The result was '''delete'''. [[User:Closer|Closer]] 12:00, 8 May 2020 (UTC)
===[[Foo Bar]]===
:{{la|Foo Bar}}
Non-notable band. [[User:Nominator]] 09:30, 1 May 2020 (UTC)
* '''Keep''' has sources. [[User:Alice|Alice]] 10:00, 2 May 2020 (UTC)
* '''Comment''' the sources are blogs. [[User:Bob]] 11:00, 2 May 2020 (UTC)
* '''Delete''' per [[User:Alice|Alice]]'s own admission. [[User:Carol]] 12:00, 3 May 2020 (UTC)
* <s>'''Keep'''</s> '''Delete''' changed my mind. [[User:Alice|Alice]] 13:00, 4 May 2020 (UTC)
";

    fn record(outcome: DiscussionOutcome) -> VoteRecord {
        match outcome {
            DiscussionOutcome::Voted(record) => record,
            DiscussionOutcome::NoVote(entry) => panic!("expected a vote, got {:?}", entry),
        }
    }

    #[test]
    fn test_last_vote_wins() {
        let outcome = analyzer("Alice").analyze(&candidate("Nominator"), CLOSED).unwrap();
        let record = record(outcome);
        assert_eq!(record.vote, Outcome::Delete.into());
        assert_eq!(record.vote_date, "May 4, 2020");
        assert_eq!(record.result, ResultCategory::Closed(Outcome::Delete));
        assert!(!record.nominator_fallback);
        assert_eq!(record.review_references.len(), 1);
    }

    #[test]
    fn test_quoted_user_not_credited() {
        // Carol quotes Alice before signing; the vote belongs to Carol
        let votes = analyzer("Carol").participant_votes(CLOSED, false);
        assert_eq!(votes.len(), 1);
        assert_eq!(votes[0].category, Outcome::Delete.into());
    }

    #[test]
    fn test_remark_is_not_a_vote() {
        let outcome = analyzer("Bob").analyze(&candidate("Nominator"), CLOSED).unwrap();
        assert_eq!(
            outcome,
            DiscussionOutcome::NoVote(NoVoteEntry {
                page: PAGE.to_string(),
                closer: Some("Closer".to_string()),
            })
        );
    }

    #[test]
    fn test_nominator_fallback() {
        let outcome = analyzer("Nominator").analyze(&candidate("Nominator"), CLOSED).unwrap();
        let record = record(outcome);
        assert_eq!(record.vote, Outcome::Delete.into());
        assert!(record.nominator_fallback);
        assert_eq!(record.vote_date, "May 1, 2020");
    }

    #[test]
    fn test_undetermined_votes_gated_by_flag() {
        let text = "==[[Foo]]==\n* '''Oppose''' [[User:Dave]] 10:00, 2 May 2020 (UTC)\n";

        let hidden = analyzer("Dave").analyze(&candidate("Nominator"), text).unwrap();
        assert!(matches!(hidden, DiscussionOutcome::NoVote(_)));

        let shown = analyzer("Dave")
            .with_undetermined(true)
            .analyze(&candidate("Nominator"), text)
            .unwrap();
        assert_eq!(record(shown).vote, VoteCategory::Undetermined);
    }

    #[test]
    fn test_undetermined_never_counted_for_nominator() {
        let text = "==[[Foo]]==\n* '''Oppose''' [[User:Dave]] 10:00, 2 May 2020 (UTC)\n";
        let outcome = analyzer("Dave")
            .with_undetermined(true)
            .analyze(&candidate("dave"), text)
            .unwrap();
        let record = record(outcome);
        assert_eq!(record.vote, Outcome::Delete.into());
        assert!(record.nominator_fallback);
    }

    #[test]
    fn test_alternate_identity_counts() {
        let participant = Participant::new("Alice Smith").unwrap().with_alternate("Alice");
        let outcome = DiscussionAnalyzer::new(participant)
            .analyze(&candidate("Nominator"), CLOSED)
            .unwrap();
        assert_eq!(record(outcome).vote, Outcome::Delete.into());
    }

    #[test]
    fn test_open_discussion_result() {
        let text = "==[[Foo]]==\n* '''Keep''' [[User:Alice]] 10:00, 2 May 2020 (UTC)\n";
        let outcome = analyzer("Alice").analyze(&candidate("Nominator"), text).unwrap();
        assert_eq!(record(outcome).result, ResultCategory::NotClosedYet);
    }

    #[test]
    fn test_bad_timestamp_is_malformed() {
        let bad = CandidatePage::new(PAGE, "Nominator", "not-a-time");
        let err = analyzer("Alice").analyze(&bad, CLOSED).unwrap_err();
        assert!(matches!(err, DomainError::MalformedDiscussion { .. }));
    }
}
