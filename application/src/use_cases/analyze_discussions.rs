//! Analyze Discussions use case
//!
//! Runs the per-discussion analyzer over fetched pages and folds the results.
//! A discussion that can't be analyzed is logged and skipped; it never aborts
//! the run.

use crate::ports::progress::{NoProgress, Phase, ProgressNotifier};
use afdstats_domain::wikitext::{DiscussionText, extract_comments};
use afdstats_domain::{
    CandidatePage, DiscussionAnalyzer, DiscussionOutcome, DomainError, NoVoteEntry,
    OutcomeAggregator, VoteRecord,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{Level, debug, trace, warn};

/// A discussion left out of the statistics, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedDiscussion {
    pub page: String,
    pub reason: String,
}

/// Everything a batch of discussions produced
#[derive(Debug, Clone)]
pub struct AnalysisOutput {
    /// One record per discussion with an effective vote, in input order
    pub records: Vec<VoteRecord>,
    pub no_votes: Vec<NoVoteEntry>,
    pub skipped: Vec<SkippedDiscussion>,
    pub aggregator: OutcomeAggregator,
}

impl AnalysisOutput {
    fn new(track_undetermined: bool) -> Self {
        Self {
            records: Vec::new(),
            no_votes: Vec::new(),
            skipped: Vec::new(),
            aggregator: OutcomeAggregator::new(track_undetermined),
        }
    }
}

/// Use case for classifying a batch of discussions
pub struct AnalyzeDiscussionsUseCase {
    analyzer: DiscussionAnalyzer,
}

impl AnalyzeDiscussionsUseCase {
    pub fn new(analyzer: DiscussionAnalyzer) -> Self {
        Self { analyzer }
    }

    pub fn analyzer(&self) -> &DiscussionAnalyzer {
        &self.analyzer
    }

    /// Execute the use case with default (no-op) progress
    pub fn execute(
        &self,
        candidates: &[CandidatePage],
        texts: &HashMap<String, String>,
    ) -> AnalysisOutput {
        self.execute_with_progress(candidates, texts, &NoProgress)
    }

    /// Execute the use case with progress callbacks.
    ///
    /// `texts` is keyed by page identifier; a candidate without text is
    /// skipped.
    pub fn execute_with_progress(
        &self,
        candidates: &[CandidatePage],
        texts: &HashMap<String, String>,
        progress: &dyn ProgressNotifier,
    ) -> AnalysisOutput {
        progress.on_phase_start(&Phase::Analyzing, candidates.len());
        let mut output = AnalysisOutput::new(self.analyzer.include_undetermined());

        for candidate in candidates {
            let analyzed = match texts.get(&candidate.page) {
                Some(text) => {
                    if tracing::enabled!(Level::TRACE) {
                        trace_comments(&candidate.page, text);
                    }
                    self.analyzer.analyze(candidate, text)
                }
                None => Err(DomainError::MissingText(candidate.page.clone())),
            };

            match analyzed {
                Ok(DiscussionOutcome::Voted(record)) => {
                    let kind = output.aggregator.record(&record);
                    debug!(
                        "{}: {} vs {} ({:?})",
                        record.page,
                        record.vote.label(),
                        record.result.label(),
                        kind
                    );
                    output.records.push(record);
                }
                Ok(DiscussionOutcome::NoVote(entry)) => {
                    debug!("{}: no vote found", entry.page);
                    output.no_votes.push(entry);
                }
                Err(e) => {
                    warn!("Skipping {}: {}", candidate.page, e);
                    output.skipped.push(SkippedDiscussion {
                        page: candidate.page.clone(),
                        reason: e.to_string(),
                    });
                    progress.on_task_complete(&Phase::Analyzing, &candidate.page, false);
                    continue;
                }
            }
            progress.on_task_complete(&Phase::Analyzing, &candidate.page, true);
        }

        progress.on_phase_complete(&Phase::Analyzing);
        output
    }
}

/// Dump every signed comment with its resolved signer
fn trace_comments(page: &str, text: &str) {
    let discussion = DiscussionText::new(text);
    for comment in extract_comments(discussion.segments().votes) {
        trace!(
            "{}, {}, {}",
            page,
            comment.signer().unwrap_or_default(),
            comment.text()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use afdstats_domain::{Outcome, Participant, ResultCategory, VoteCategory};
    use std::sync::Mutex;

    const KEPT: &str = "\
The result was '''keep'''. [[User:Closer]] 12:00, 8 May 2020 (UTC)
===[[Foo]]===
* '''Keep''' notable. [[User:Alice]] 10:00, 2 May 2020 (UTC)
";

    const DELETED: &str = "\
The result was '''delete'''. [[User:Closer]] 12:00, 9 May 2020 (UTC)
===[[Bar]]===
* '''Keep''' notable. [[User:Alice]] 10:00, 3 May 2020 (UTC)
";

    const UNVOTED: &str = "\
The result was '''delete'''. [[User:Closer]] 12:00, 9 May 2020 (UTC)
===[[Baz]]===
* '''Delete''' [[User:Bob]] 10:00, 3 May 2020 (UTC)
";

    fn use_case(name: &str) -> AnalyzeDiscussionsUseCase {
        AnalyzeDiscussionsUseCase::new(DiscussionAnalyzer::new(Participant::new(name).unwrap()))
    }

    fn candidate(page: &str) -> CandidatePage {
        CandidatePage::new(page, "Nominator", "20200501093000")
    }

    fn texts(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(page, text)| (page.to_string(), text.to_string()))
            .collect()
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<(String, bool)>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_phase_start(&self, _phase: &Phase, _total_tasks: usize) {}
        fn on_task_complete(&self, _phase: &Phase, label: &str, success: bool) {
            self.events.lock().unwrap().push((label.to_string(), success));
        }
        fn on_phase_complete(&self, _phase: &Phase) {}
    }

    #[test]
    fn test_records_and_no_votes_are_separated() {
        let candidates = vec![candidate("AfD/Foo"), candidate("AfD/Bar"), candidate("AfD/Baz")];
        let texts = texts(&[("AfD/Foo", KEPT), ("AfD/Bar", DELETED), ("AfD/Baz", UNVOTED)]);

        let output = use_case("Alice").execute(&candidates, &texts);

        assert_eq!(output.records.len(), 2);
        assert_eq!(output.records[0].page, "AfD/Foo");
        assert_eq!(output.records[1].page, "AfD/Bar");
        assert_eq!(output.no_votes.len(), 1);
        assert_eq!(output.no_votes[0].closer.as_deref(), Some("Closer"));
        assert!(output.skipped.is_empty());

        assert_eq!(output.aggregator.stats.vote_count(Outcome::Keep), 2);
        assert_eq!(
            output
                .aggregator
                .stats
                .cell(Outcome::Keep, ResultCategory::Closed(Outcome::Delete)),
            1
        );
        assert_eq!(output.aggregator.matches.matched, 1);
        assert_eq!(output.aggregator.matches.mismatched, 1);
    }

    #[test]
    fn test_missing_text_is_skipped() {
        let candidates = vec![candidate("AfD/Foo"), candidate("AfD/Gone")];
        let texts = texts(&[("AfD/Foo", KEPT)]);
        let progress = RecordingProgress::default();

        let output = use_case("Alice").execute_with_progress(&candidates, &texts, &progress);

        assert_eq!(output.records.len(), 1);
        assert_eq!(output.skipped.len(), 1);
        assert_eq!(output.skipped[0].page, "AfD/Gone");
        assert_eq!(
            *progress.events.lock().unwrap(),
            vec![("AfD/Foo".to_string(), true), ("AfD/Gone".to_string(), false)]
        );
    }

    #[test]
    fn test_malformed_discussion_does_not_abort() {
        let candidates = vec![
            CandidatePage::new("AfD/Broken", "Nominator", "garbage"),
            candidate("AfD/Foo"),
        ];
        let texts = texts(&[("AfD/Broken", KEPT), ("AfD/Foo", KEPT)]);

        let output = use_case("Alice").execute(&candidates, &texts);

        assert_eq!(output.skipped.len(), 1);
        assert_eq!(output.skipped[0].page, "AfD/Broken");
        assert_eq!(output.records.len(), 1);
        assert_eq!(output.records[0].vote, VoteCategory::Cast(Outcome::Keep));
    }

    #[test]
    fn test_undetermined_tracking_follows_analyzer() {
        let analyzer =
            DiscussionAnalyzer::new(Participant::new("Alice").unwrap()).with_undetermined(true);
        let output = AnalyzeDiscussionsUseCase::new(analyzer).execute(&[], &HashMap::new());
        assert_eq!(output.aggregator.stats.undetermined(), Some(0));

        let output = use_case("Alice").execute(&[], &HashMap::new());
        assert_eq!(output.aggregator.stats.undetermined(), None);
    }
}
