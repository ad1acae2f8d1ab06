//! Page content port
//!
//! Fetches the current wikitext of discussion pages. Adapters accept a
//! bounded batch per call; the use case does the batching.

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

/// Most titles a single content request may carry
pub const MAX_CONTENT_BATCH: usize = 50;

/// Errors that can occur while fetching page text
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Port for fetching discussion wikitext
#[async_trait]
pub trait PageContentPort: Send + Sync {
    /// Fetch the wikitext of up to [`MAX_CONTENT_BATCH`] pages.
    ///
    /// The map is keyed by page identifier. Pages that don't exist or are
    /// redirects are simply absent.
    async fn fetch(&self, pages: &[String]) -> Result<HashMap<String, String>, ContentError>;
}
