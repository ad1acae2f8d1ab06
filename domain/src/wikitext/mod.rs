//! Wikitext handling for deletion discussions.
//!
//! This is heuristic pattern matching over human-written markup, not a
//! wikitext parser. The pieces run in this order:
//!
//! 1. [`segment`]: strip strikes, split into pre-heading / votes / closing
//! 2. [`comment`]: extract bold-stance-to-signature comments
//! 3. [`signature`]: resolve who signed each comment
//! 4. [`timestamp`]: date formatting for signatures and revisions

pub mod comment;
pub mod segment;
pub mod signature;
pub mod timestamp;

pub use comment::{Comment, extract_comments};
pub use segment::{DiscussionText, Segments, strip_strikes};
pub use signature::{normalize_name, resolve_signer};
pub use timestamp::{compact_date, revision_date, signature_date};
