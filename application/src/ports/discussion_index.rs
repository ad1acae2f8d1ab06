//! Discussion index port
//!
//! Lists the deletion discussions a participant edited, newest first, and
//! resolves each page's first-revision author and timestamp.

use afdstats_domain::{CandidatePage, Participant};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur while listing discussions
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Only consider edits made on or before this day
///
/// Accepts `YYYYMMDD` between 2000 and 2030, matching the range the wiki
/// actually has discussions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct StartDate(NaiveDate);

impl StartDate {
    const MIN: u32 = 20_000_000;
    const MAX: u32 = 20_300_000;

    /// Parse a `YYYYMMDD` string; anything out of range is `None`
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.len() != 8 {
            return None;
        }
        let number: u32 = value.parse().ok()?;
        if number <= Self::MIN || number >= Self::MAX {
            return None;
        }
        NaiveDate::parse_from_str(value, "%Y%m%d").ok().map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// `YYYYMMDD`
    pub fn compact(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }

    /// e.g. "May 03 2020"
    pub fn display(&self) -> String {
        self.0.format("%b %d %Y").to_string()
    }
}

impl fmt::Display for StartDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compact())
    }
}

impl From<StartDate> for String {
    fn from(date: StartDate) -> Self {
        date.compact()
    }
}

impl TryFrom<String> for StartDate {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid start date: {}", value))
    }
}

/// What to list
#[derive(Debug, Clone)]
pub struct IndexQuery {
    pub participant: Participant,
    /// Only discussions the participant created
    pub nominations_only: bool,
    pub start_date: Option<StartDate>,
}

/// Port for listing candidate discussions
#[async_trait]
pub trait DiscussionIndexPort: Send + Sync {
    /// Page identifiers (underscore form), newest first, without duplicates
    async fn list_pages(&self, query: &IndexQuery) -> Result<Vec<String>, IndexError>;

    /// First-revision metadata for `pages`, in the same order.
    ///
    /// Pages that can't be resolved are left out.
    async fn first_revisions(&self, pages: &[String]) -> Result<Vec<CandidatePage>, IndexError>;
}
