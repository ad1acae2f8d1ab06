//! The participant whose votes are being tallied

use crate::core::error::DomainError;
use crate::wikitext::signature::normalize_name;
use serde::{Deserialize, Serialize};

/// Target participant identity (primary name plus optional alternate, for
/// users whose signature doesn't link their account name)
///
/// # Example
///
/// ```
/// use afdstats_domain::Participant;
///
/// let participant = Participant::new("some_user").unwrap().with_alternate("SU");
/// assert_eq!(participant.name(), "Some user");
/// assert!(participant.matches("SOME_USER"));
/// assert!(participant.matches("su"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    name: String,
    alternate: Option<String>,
}

impl Participant {
    /// Normalize and validate a user name (underscores become spaces, the
    /// first letter is upper-cased as MediaWiki does)
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let normalized = normalize_name(name);
        let mut chars = normalized.chars();
        let Some(first) = chars.next() else {
            return Err(DomainError::EmptyParticipant);
        };
        let name = first.to_uppercase().chain(chars).collect();
        Ok(Self {
            name,
            alternate: None,
        })
    }

    /// Add an alternate identity; blank names are ignored
    pub fn with_alternate(mut self, alternate: &str) -> Self {
        let alternate = normalize_name(alternate);
        self.alternate = (!alternate.is_empty()).then_some(alternate);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alternate(&self) -> Option<&str> {
        self.alternate.as_deref()
    }

    /// Name in URL form (spaces as underscores)
    pub fn url_name(&self) -> String {
        self.name.replace(' ', "_")
    }

    /// Case-insensitive comparison against the primary or alternate name
    pub fn matches(&self, other: &str) -> bool {
        let other = normalize_name(other).to_lowercase();
        if other.is_empty() {
            return false;
        }
        other == self.name.to_lowercase()
            || self
                .alternate
                .as_ref()
                .is_some_and(|alt| other == alt.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_normalized() {
        let participant = Participant::new("  example_user ").unwrap();
        assert_eq!(participant.name(), "Example user");
        assert_eq!(participant.url_name(), "Example_user");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(Participant::new(" _ "), Err(DomainError::EmptyParticipant));
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let participant = Participant::new("Alice").unwrap();
        assert!(participant.matches("alice"));
        assert!(participant.matches("ALICE"));
        assert!(!participant.matches("Alicia"));
    }

    #[test]
    fn test_blank_alternate_matches_nothing() {
        let participant = Participant::new("Alice").unwrap().with_alternate("  ");
        assert_eq!(participant.alternate(), None);
        assert!(!participant.matches(""));
    }

    #[test]
    fn test_alternate_identity() {
        let participant = Participant::new("Alice").unwrap().with_alternate("Ali_B");
        assert!(participant.matches("ali b"));
        assert!(participant.matches("Ali_B"));
    }
}
