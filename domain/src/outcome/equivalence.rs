//! Vote/result agreement
//!
//! A single table decides whether a vote "matched" the close. Both the
//! scalar match statistics and the shading of the voting matrix go through
//! [`classify_match`], so the two can never disagree.

use super::category::{Outcome, ResultCategory, VoteCategory};
use serde::{Deserialize, Serialize};

/// Pairs of distinct outcomes that still count as a match (symmetric)
const EQUIVALENT_OUTCOMES: &[(Outcome, Outcome)] = &[
    (Outcome::SpeedyKeep, Outcome::Keep),
    (Outcome::SpeedyDelete, Outcome::Delete),
    (Outcome::Redirect, Outcome::Delete),
    (Outcome::Redirect, Outcome::Merge),
];

/// How a vote compares to the eventual result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Vote matched (or closely resembled) the result
    Match,
    /// Vote and result disagree
    Mismatch,
    /// Result was "No Consensus"
    NoConsensus,
    /// Either side is unknown; not counted at all
    Excluded,
}

/// Whether a vote for `vote` agrees with a close as `result`
pub fn outcomes_equivalent(vote: Outcome, result: Outcome) -> bool {
    vote == result
        || EQUIVALENT_OUTCOMES
            .iter()
            .any(|&(a, b)| (vote == a && result == b) || (vote == b && result == a))
}

/// Classify a (vote, result) pair
pub fn classify_match(vote: VoteCategory, result: ResultCategory) -> MatchKind {
    match (vote, result) {
        (_, ResultCategory::NoConsensus) => MatchKind::NoConsensus,
        (VoteCategory::Cast(v), ResultCategory::Closed(r)) => {
            if outcomes_equivalent(v, r) {
                MatchKind::Match
            } else {
                MatchKind::Mismatch
            }
        }
        _ => MatchKind::Excluded,
    }
}
