//! Vote totals and the vote × result matrix

use crate::outcome::{MatchKind, Outcome, ResultCategory, VoteCategory, classify_match};
use serde::{Deserialize, Serialize};

const RESULT_COLUMNS: usize = ResultCategory::MATRIX_COLUMNS.len();

/// Running tallies of the participant's votes
///
/// # Example
///
/// ```
/// use afdstats_domain::{Outcome, ResultCategory, StatsAggregate, VoteCategory};
///
/// let mut stats = StatsAggregate::new(false);
/// stats.record(VoteCategory::Cast(Outcome::Keep), ResultCategory::NoConsensus);
/// assert_eq!(stats.vote_count(Outcome::Keep), 1);
/// assert_eq!(stats.cell(Outcome::Keep, ResultCategory::NoConsensus), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsAggregate {
    votes: [usize; 8],
    matrix: [[usize; RESULT_COLUMNS]; 8],
    /// Present only when undetermined votes are being counted
    undetermined: Option<usize>,
}

impl StatsAggregate {
    pub fn new(track_undetermined: bool) -> Self {
        Self {
            votes: [0; 8],
            matrix: [[0; RESULT_COLUMNS]; 8],
            undetermined: track_undetermined.then_some(0),
        }
    }

    /// Fold one (vote, result) pair into the tallies
    pub fn record(&mut self, vote: VoteCategory, result: ResultCategory) {
        match vote {
            VoteCategory::Cast(outcome) => {
                self.votes[outcome.index()] += 1;
                if let Some(column) = result.column_index() {
                    self.matrix[outcome.index()][column] += 1;
                }
            }
            VoteCategory::Undetermined => {
                if let Some(count) = self.undetermined.as_mut() {
                    *count += 1;
                }
            }
        }
    }

    pub fn vote_count(&self, outcome: Outcome) -> usize {
        self.votes[outcome.index()]
    }

    /// Count of undetermined votes, if tracked
    pub fn undetermined(&self) -> Option<usize> {
        self.undetermined
    }

    /// Number of discussions where the vote was `vote` and the result
    /// `result`; zero for results outside the matrix
    pub fn cell(&self, vote: Outcome, result: ResultCategory) -> usize {
        result
            .column_index()
            .map(|column| self.matrix[vote.index()][column])
            .unwrap_or(0)
    }

    /// Per-category vote counts in display order, including UNDETERMINED
    /// when tracked
    pub fn vote_totals(&self) -> Vec<(VoteCategory, usize)> {
        let mut totals: Vec<_> = Outcome::ALL
            .into_iter()
            .map(|o| (VoteCategory::Cast(o), self.vote_count(o)))
            .collect();
        if let Some(count) = self.undetermined {
            totals.push((VoteCategory::Undetermined, count));
        }
        totals
    }

    /// Sum of all counted votes
    pub fn total_votes(&self) -> usize {
        self.votes.iter().sum::<usize>() + self.undetermined.unwrap_or(0)
    }

    /// One matrix row per vote outcome, each cell paired with its shading
    pub fn matrix_rows(&self) -> Vec<(Outcome, Vec<MatrixCell>)> {
        Outcome::ALL
            .into_iter()
            .map(|vote| {
                let cells = ResultCategory::MATRIX_COLUMNS
                    .into_iter()
                    .map(|result| MatrixCell::new(vote, result, self.cell(vote, result)))
                    .collect();
                (vote, cells)
            })
            .collect()
    }
}

/// A single cell of the voting matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixCell {
    pub vote: Outcome,
    pub result: ResultCategory,
    pub count: usize,
    pub kind: MatchKind,
}

impl MatrixCell {
    pub fn new(vote: Outcome, result: ResultCategory, count: usize) -> Self {
        Self {
            vote,
            result,
            count,
            kind: classify_match(VoteCategory::Cast(vote), result),
        }
    }
}
