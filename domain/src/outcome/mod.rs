//! Outcome taxonomy shared by votes and results.
//!
//! - [`category`]: the closed category enumerations
//! - [`equivalence`]: which votes count as matching which results

pub mod category;
pub mod equivalence;

pub use category::{Outcome, ResultCategory, UnknownCategory, VoteCategory};
pub use equivalence::{MatchKind, classify_match, outcomes_equivalent};
