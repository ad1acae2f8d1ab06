//! Error types for the MediaWiki adapters

use afdstats_application::{ContentError, IndexError};
use thiserror::Error;

/// Result type alias for MediaWiki operations
pub type Result<T> = std::result::Result<T, MediaWikiError>;

/// Errors that can occur when talking to the MediaWiki Action API
#[derive(Error, Debug)]
pub enum MediaWikiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error: {status}")]
    Status { status: u16 },

    #[error("API error ({code}): {info}")]
    Api { code: String, info: String },

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

impl From<MediaWikiError> for IndexError {
    fn from(e: MediaWikiError) -> Self {
        match e {
            MediaWikiError::UnexpectedResponse(_) | MediaWikiError::InvalidTimestamp(_) => {
                IndexError::InvalidResponse(e.to_string())
            }
            _ => IndexError::RequestFailed(e.to_string()),
        }
    }
}

impl From<MediaWikiError> for ContentError {
    fn from(e: MediaWikiError) -> Self {
        match e {
            MediaWikiError::UnexpectedResponse(_) | MediaWikiError::InvalidTimestamp(_) => {
                ContentError::InvalidResponse(e.to_string())
            }
            _ => ContentError::RequestFailed(e.to_string()),
        }
    }
}
