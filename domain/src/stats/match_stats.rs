//! Match / mismatch / no-consensus partition

use crate::outcome::{MatchKind, ResultCategory, VoteCategory, classify_match};
use serde::{Deserialize, Serialize};

/// How often the participant's vote agreed with the close
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    pub matched: usize,
    pub mismatched: usize,
    pub no_consensus: usize,
}

impl MatchStats {
    /// Tally one pair; excluded pairs leave the counters untouched
    pub fn record(&mut self, vote: VoteCategory, result: ResultCategory) -> MatchKind {
        let kind = classify_match(vote, result);
        match kind {
            MatchKind::Match => self.matched += 1,
            MatchKind::Mismatch => self.mismatched += 1,
            MatchKind::NoConsensus => self.no_consensus += 1,
            MatchKind::Excluded => {}
        }
        kind
    }

    /// All tallied discussions
    pub fn total(&self) -> usize {
        self.matched + self.mismatched + self.no_consensus
    }

    /// Tallied discussions that were not "No Consensus"
    fn decisive(&self) -> usize {
        self.matched + self.mismatched
    }

    fn ratio(count: usize, total: usize) -> Option<f64> {
        (total > 0).then(|| count as f64 / total as f64)
    }

    /// Match rate ignoring "No Consensus" results
    pub fn match_rate(&self) -> Option<f64> {
        Self::ratio(self.matched, self.decisive())
    }
}
