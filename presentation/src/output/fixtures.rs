//! Sample reports for formatter tests

use afdstats_application::{SkippedDiscussion, StartDate, StatsReport};
use afdstats_domain::{
    NoVoteEntry, Outcome, OutcomeAggregator, Participant, ResultCategory, ReviewReference,
    VoteCategory, VoteRecord,
};

fn record(page: &str, vote: VoteCategory, date: &str, result: ResultCategory) -> VoteRecord {
    VoteRecord {
        page: page.to_string(),
        vote,
        vote_date: date.to_string(),
        result,
        nominator_fallback: false,
        review_references: Vec::new(),
    }
}

/// Three votes (match, mismatch, no consensus), one nomination, one page
/// without a vote and one skipped page
pub fn sample_report() -> StatsReport {
    let mut nominated = record(
        "Articles_for_deletion/Garage_band",
        Outcome::Delete.into(),
        "May 1, 2020",
        ResultCategory::Closed(Outcome::Redirect),
    );
    nominated.nominator_fallback = true;
    nominated.review_references.push(ReviewReference {
        citation_index: 1,
        target_date: "2020 June 2".to_string(),
        target_page: "Garage_band".to_string(),
    });

    let records = vec![
        record(
            "Articles_for_deletion/Foo_<b>",
            Outcome::Keep.into(),
            "May 9, 2020",
            ResultCategory::Closed(Outcome::SpeedyKeep),
        ),
        record(
            "Articles_for_deletion/Bar",
            Outcome::Keep.into(),
            "May 8, 2020",
            ResultCategory::Closed(Outcome::Delete),
        ),
        record(
            "Articles_for_deletion/Baz",
            Outcome::Merge.into(),
            "May 7, 2020",
            ResultCategory::NoConsensus,
        ),
        nominated,
    ];
    let aggregator = OutcomeAggregator::from_records(&records, false);

    StatsReport {
        participant: Participant::new("Example user").unwrap(),
        start_date: StartDate::parse("20200510"),
        nominations_only: false,
        include_undetermined: false,
        max_results: 5,
        total_candidates: 7,
        analyzed: 6,
        records,
        no_votes: vec![NoVoteEntry {
            page: "Articles_for_deletion/Quux".to_string(),
            closer: Some("Closer".to_string()),
        }],
        skipped: vec![SkippedDiscussion {
            page: "Articles_for_deletion/Broken".to_string(),
            reason: "no page text".to_string(),
        }],
        stats: aggregator.stats,
        matches: aggregator.matches,
        next_start_date: Some("20200501".to_string()),
    }
}

/// A run where no votes were found at all
pub fn empty_report() -> StatsReport {
    let aggregator = OutcomeAggregator::new(false);
    StatsReport {
        participant: Participant::new("Lurker").unwrap(),
        start_date: None,
        nominations_only: false,
        include_undetermined: false,
        max_results: 200,
        total_candidates: 1,
        analyzed: 1,
        records: Vec::new(),
        no_votes: vec![NoVoteEntry {
            page: "Articles_for_deletion/Quux".to_string(),
            closer: None,
        }],
        skipped: Vec::new(),
        stats: aggregator.stats,
        matches: aggregator.matches,
        next_start_date: None,
    }
}
