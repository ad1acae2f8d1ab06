//! Vote and result categories
//!
//! Every classifier in this crate produces one of these closed enumerations;
//! free text never escapes as a category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label used for votes and results that could not be classified
pub const UNDETERMINED_LABEL: &str = "UNDETERMINED";

/// Label used for discussions without a closing statement
pub const NOT_CLOSED_LABEL: &str = "Not closed yet";

/// Label used for "No Consensus" closes
pub const NO_CONSENSUS_LABEL: &str = "No Consensus";

/// One of the eight concrete outcomes a deletion discussion can argue for
/// or end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Keep,
    Delete,
    SpeedyKeep,
    SpeedyDelete,
    Merge,
    Redirect,
    Transwiki,
    Userfy,
}

impl Outcome {
    /// All outcomes, in matrix row order
    pub const ALL: [Outcome; 8] = [
        Outcome::Keep,
        Outcome::Delete,
        Outcome::SpeedyKeep,
        Outcome::SpeedyDelete,
        Outcome::Merge,
        Outcome::Redirect,
        Outcome::Transwiki,
        Outcome::Userfy,
    ];

    /// Position of this outcome in [`Outcome::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Outcome::Keep => 0,
            Outcome::Delete => 1,
            Outcome::SpeedyKeep => 2,
            Outcome::SpeedyDelete => 3,
            Outcome::Merge => 4,
            Outcome::Redirect => 5,
            Outcome::Transwiki => 6,
            Outcome::Userfy => 7,
        }
    }

    /// Short code used by the voting matrix (e.g. "sk")
    pub fn short_code(&self) -> &'static str {
        match self {
            Outcome::Keep => "k",
            Outcome::Delete => "d",
            Outcome::SpeedyKeep => "sk",
            Outcome::SpeedyDelete => "sd",
            Outcome::Merge => "m",
            Outcome::Redirect => "r",
            Outcome::Transwiki => "t",
            Outcome::Userfy => "u",
        }
    }

    /// Human readable label (e.g. "Speedy Keep")
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Keep => "Keep",
            Outcome::Delete => "Delete",
            Outcome::SpeedyKeep => "Speedy Keep",
            Outcome::SpeedyDelete => "Speedy Delete",
            Outcome::Merge => "Merge",
            Outcome::Redirect => "Redirect",
            Outcome::Transwiki => "Transwiki",
            Outcome::Userfy => "Userfy",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.label() == label)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown category label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// Category of a single participant's vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum VoteCategory {
    /// A recognised vote
    Cast(Outcome),
    /// Bolded stance that matched no known keyword
    Undetermined,
}

impl VoteCategory {
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            VoteCategory::Cast(outcome) => Some(*outcome),
            VoteCategory::Undetermined => None,
        }
    }

    pub fn is_undetermined(&self) -> bool {
        matches!(self, VoteCategory::Undetermined)
    }

    pub fn label(&self) -> &'static str {
        match self {
            VoteCategory::Cast(outcome) => outcome.label(),
            VoteCategory::Undetermined => UNDETERMINED_LABEL,
        }
    }
}

impl From<Outcome> for VoteCategory {
    fn from(outcome: Outcome) -> Self {
        VoteCategory::Cast(outcome)
    }
}

impl fmt::Display for VoteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VoteCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == UNDETERMINED_LABEL {
            return Ok(VoteCategory::Undetermined);
        }
        Outcome::from_label(s)
            .map(VoteCategory::Cast)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl From<VoteCategory> for String {
    fn from(category: VoteCategory) -> Self {
        category.label().to_string()
    }
}

impl TryFrom<String> for VoteCategory {
    type Error = UnknownCategory;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// How a discussion was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ResultCategory {
    /// Closed with a concrete outcome
    Closed(Outcome),
    /// Closed as "No Consensus"
    NoConsensus,
    /// Closed, but the verdict could not be classified
    Undetermined,
    /// No closing statement found
    NotClosedYet,
}

impl ResultCategory {
    /// Result columns of the voting matrix, in order
    pub const MATRIX_COLUMNS: [ResultCategory; 9] = [
        ResultCategory::Closed(Outcome::Keep),
        ResultCategory::Closed(Outcome::Delete),
        ResultCategory::Closed(Outcome::SpeedyKeep),
        ResultCategory::Closed(Outcome::SpeedyDelete),
        ResultCategory::Closed(Outcome::Merge),
        ResultCategory::Closed(Outcome::Redirect),
        ResultCategory::Closed(Outcome::Transwiki),
        ResultCategory::Closed(Outcome::Userfy),
        ResultCategory::NoConsensus,
    ];

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            ResultCategory::Closed(outcome) => Some(*outcome),
            _ => None,
        }
    }

    /// Matrix column index, if this result has one
    pub fn column_index(&self) -> Option<usize> {
        match self {
            ResultCategory::Closed(outcome) => Some(outcome.index()),
            ResultCategory::NoConsensus => Some(8),
            ResultCategory::Undetermined | ResultCategory::NotClosedYet => None,
        }
    }

    /// Matrix short code ("nc" for No Consensus); `None` for results that
    /// never appear in the matrix
    pub fn short_code(&self) -> Option<&'static str> {
        match self {
            ResultCategory::Closed(outcome) => Some(outcome.short_code()),
            ResultCategory::NoConsensus => Some("nc"),
            ResultCategory::Undetermined | ResultCategory::NotClosedYet => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResultCategory::Closed(outcome) => outcome.label(),
            ResultCategory::NoConsensus => NO_CONSENSUS_LABEL,
            ResultCategory::Undetermined => UNDETERMINED_LABEL,
            ResultCategory::NotClosedYet => NOT_CLOSED_LABEL,
        }
    }
}

impl From<Outcome> for ResultCategory {
    fn from(outcome: Outcome) -> Self {
        ResultCategory::Closed(outcome)
    }
}

impl fmt::Display for ResultCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ResultCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            NO_CONSENSUS_LABEL => Ok(ResultCategory::NoConsensus),
            UNDETERMINED_LABEL => Ok(ResultCategory::Undetermined),
            NOT_CLOSED_LABEL => Ok(ResultCategory::NotClosedYet),
            other => Outcome::from_label(other)
                .map(ResultCategory::Closed)
                .ok_or_else(|| UnknownCategory(other.to_string())),
        }
    }
}

impl From<ResultCategory> for String {
    fn from(category: ResultCategory) -> Self {
        category.label().to_string()
    }
}

impl TryFrom<String> for ResultCategory {
    type Error = UnknownCategory;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
