//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// None of these abort a batch: callers treat them as "skip this
/// discussion".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No participant name given")]
    EmptyParticipant,

    #[error("No text available for {0}")]
    MissingText(String),

    #[error("Invalid revision timestamp {value:?}: {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Malformed discussion {page}: {reason}")]
    MalformedDiscussion { page: String, reason: String },
}

impl DomainError {
    /// Attach the page name to an error raised while analyzing it
    pub fn in_page(self, page: &str) -> Self {
        match self {
            DomainError::MalformedDiscussion { .. } | DomainError::MissingText(_) => self,
            other => DomainError::MalformedDiscussion {
                page: page.to_string(),
                reason: other.to_string(),
            },
        }
    }
}
