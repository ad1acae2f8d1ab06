//! Deletion discussions and the participant's part in them.

pub mod analyzer;
pub mod entities;
pub mod participant;

pub use analyzer::{DetectedVote, DiscussionAnalyzer};
pub use entities::{CandidatePage, DiscussionOutcome, NoVoteEntry, VoteRecord};
pub use participant::Participant;
