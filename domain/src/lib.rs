//! Domain layer for afdstats
//!
//! This crate contains the wikitext discussion parser and the
//! outcome-classification engine. It performs no I/O: page text and
//! first-revision metadata are handed in by the outer layers.
//!
//! # Core Concepts
//!
//! ## Discussion
//!
//! An Articles for Deletion debate. Its body is segmented into the text above
//! the first heading (closing statement, review templates) and the vote
//! region below it.
//!
//! ## Vote and Result
//!
//! - **Vote**: a bolded stance followed by the participant's signature
//! - **Result**: the bolded verdict of the closing statement
//!
//! Both are classified into the same closed [`Outcome`] taxonomy and compared
//! through a single equivalence table ([`classify_match`]).

pub mod classify;
pub mod config;
pub mod core;
pub mod discussion;
pub mod outcome;
pub mod review;
pub mod stats;
pub mod wikitext;

// Re-export commonly used types
pub use classify::{ResultClassifier, VoteClassifier};
pub use config::OutputFormat;
pub use crate::core::error::DomainError;
pub use discussion::{
    CandidatePage, DetectedVote, DiscussionAnalyzer, DiscussionOutcome, NoVoteEntry, Participant,
    VoteRecord,
};
pub use outcome::{
    MatchKind, Outcome, ResultCategory, UnknownCategory, VoteCategory, classify_match,
    outcomes_equivalent,
};
pub use review::{ReviewReference, detect_review_references, render_citation_links};
pub use stats::{MatchStats, MatrixCell, OutcomeAggregator, StatsAggregate};
