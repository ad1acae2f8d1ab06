//! Keyword classifiers for votes and closing statements.
//!
//! Both classifiers own an immutable, ordered keyword table. Order is part
//! of the behavior: the first keyword contained in the text wins.

pub mod result;
pub mod vote;

pub use result::ResultClassifier;
pub use vote::VoteClassifier;
