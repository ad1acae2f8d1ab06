//! Outcome aggregation
//!
//! Folds one [`VoteRecord`] per discussion into the vote totals, the
//! vote × result matrix and the match partition.

pub mod aggregate;
pub mod match_stats;

pub use aggregate::{MatrixCell, StatsAggregate};
pub use match_stats::MatchStats;

use crate::discussion::VoteRecord;
use crate::outcome::MatchKind;
use serde::{Deserialize, Serialize};

/// Aggregates vote records into [`StatsAggregate`] and [`MatchStats`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeAggregator {
    pub stats: StatsAggregate,
    pub matches: MatchStats,
}

impl OutcomeAggregator {
    pub fn new(track_undetermined: bool) -> Self {
        Self {
            stats: StatsAggregate::new(track_undetermined),
            matches: MatchStats::default(),
        }
    }

    /// Aggregate a whole list from zero
    pub fn from_records<'a>(
        records: impl IntoIterator<Item = &'a VoteRecord>,
        track_undetermined: bool,
    ) -> Self {
        let mut aggregator = Self::new(track_undetermined);
        for record in records {
            aggregator.record(record);
        }
        aggregator
    }

    /// Fold one record; returns how the vote compared to the result
    pub fn record(&mut self, record: &VoteRecord) -> MatchKind {
        self.stats.record(record.vote, record.result);
        self.matches.record(record.vote, record.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{Outcome, ResultCategory, VoteCategory, classify_match};

    fn record(vote: VoteCategory, result: ResultCategory) -> VoteRecord {
        VoteRecord {
            page: "Articles_for_deletion/X".to_string(),
            vote,
            vote_date: String::new(),
            result,
            nominator_fallback: false,
            review_references: vec![],
        }
    }

    fn sample() -> Vec<VoteRecord> {
        vec![
            record(Outcome::Keep.into(), Outcome::Keep.into()),
            record(Outcome::Delete.into(), Outcome::Redirect.into()),
            record(Outcome::Merge.into(), Outcome::Delete.into()),
            record(Outcome::Keep.into(), ResultCategory::NoConsensus),
            record(VoteCategory::Undetermined, Outcome::Keep.into()),
            record(Outcome::Userfy.into(), ResultCategory::NotClosedYet),
        ]
    }

    #[test]
    fn test_aggregate_sample() {
        let aggregator = OutcomeAggregator::from_records(&sample(), true);
        assert_eq!(aggregator.stats.vote_count(Outcome::Keep), 2);
        assert_eq!(aggregator.stats.undetermined(), Some(1));
        assert_eq!(aggregator.stats.total_votes(), 6);
        assert_eq!(aggregator.matches.matched, 2);
        assert_eq!(aggregator.matches.mismatched, 1);
        assert_eq!(aggregator.matches.no_consensus, 1);
    }

    #[test]
    fn test_reaggregation_is_idempotent() {
        let records = sample();
        let first = OutcomeAggregator::from_records(&records, false);
        let second = OutcomeAggregator::from_records(&records, false);
        assert_eq!(first, second);
    }

    #[test]
    fn test_matrix_shading_agrees_with_match_stats() {
        let mut results: Vec<ResultCategory> = Outcome::ALL.into_iter().map(Into::into).collect();
        results.push(ResultCategory::NoConsensus);

        for vote in Outcome::ALL {
            for &result in &results {
                let mut matches = MatchStats::default();
                let scalar = matches.record(vote.into(), result);

                let mut stats = StatsAggregate::new(false);
                stats.record(vote.into(), result);
                let cell = stats
                    .matrix_rows()
                    .into_iter()
                    .find(|(v, _)| *v == vote)
                    .and_then(|(_, cells)| cells.into_iter().find(|c| c.result == result))
                    .unwrap();

                assert_eq!(cell.kind, scalar, "{vote} vs {result}");
                assert_eq!(cell.kind, classify_match(vote.into(), result));
                assert_eq!(cell.count, 1);
            }
        }
    }
}
