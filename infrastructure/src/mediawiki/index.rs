//! Discussion index backed by `list=usercontribs`

use super::client::{MediaWikiClient, params};
use super::error::{MediaWikiError, Result};
use super::titles::{api_title, is_discussion, page_id};
use super::types::{PagesQuery, UserContrib, UserContribsQuery};
use afdstats_application::{DiscussionIndexPort, IndexError, IndexQuery, StartDate};
use afdstats_domain::CandidatePage;
use async_trait::async_trait;
use chrono::DateTime;
use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Contributions scanned before giving up on older history
pub const DEFAULT_MAX_CONTRIBUTIONS: usize = 5000;

/// First-revision lookups in flight at once
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Largest `uclimit` available without bot rights
const CONTRIBS_PER_REQUEST: usize = 500;

/// Lists discussions from a user's project-namespace contributions
pub struct MediaWikiDiscussionIndex {
    client: Arc<MediaWikiClient>,
    max_contributions: usize,
    concurrency: usize,
}

impl MediaWikiDiscussionIndex {
    pub fn new(client: Arc<MediaWikiClient>) -> Self {
        Self {
            client,
            max_contributions: DEFAULT_MAX_CONTRIBUTIONS,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    pub fn with_max_contributions(mut self, max: usize) -> Self {
        self.max_contributions = max.max(1);
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    async fn contributions(&self, query: &IndexQuery) -> Result<Vec<String>> {
        let mut request = contribs_params(query);
        let mut seen = HashSet::new();
        let mut pages = Vec::new();
        let mut scanned = 0;

        loop {
            let response = self.client.query::<UserContribsQuery>(&request).await?;
            let contribs = response.query.unwrap_or_default().usercontribs;
            scanned += contribs.len();
            collect_discussions(&contribs, &mut seen, &mut pages);
            debug!("{} contributions scanned, {} discussions", scanned, pages.len());

            let Some(continuation) = response.continuation else {
                break;
            };
            if scanned >= self.max_contributions {
                info!(
                    "Stopped after {} contributions; older history not scanned",
                    scanned
                );
                break;
            }

            request.retain(|(key, _)| !continuation.contains_key(key));
            request.extend(continuation);
        }

        Ok(pages)
    }

    async fn first_revision(&self, page: &str) -> Result<Option<CandidatePage>> {
        let request = params([
            ("titles", api_title(page).as_str()),
            ("prop", "revisions"),
            ("rvdir", "newer"),
            ("rvlimit", "1"),
            ("rvprop", "user|timestamp"),
        ]);
        let response = self.client.query::<PagesQuery>(&request).await?;

        let Some(entry) = response.query.unwrap_or_default().pages.into_iter().next() else {
            return Ok(None);
        };
        let Some(revision) = entry.revisions.into_iter().next() else {
            return Ok(None);
        };
        // Hidden users come back without a name
        let (Some(user), Some(timestamp)) = (revision.user, revision.timestamp) else {
            return Ok(None);
        };

        Ok(Some(CandidatePage::new(
            page,
            user,
            compact_timestamp(&timestamp)?,
        )))
    }
}

#[async_trait]
impl DiscussionIndexPort for MediaWikiDiscussionIndex {
    async fn list_pages(&self, query: &IndexQuery) -> std::result::Result<Vec<String>, IndexError> {
        Ok(self.contributions(query).await?)
    }

    async fn first_revisions(
        &self,
        pages: &[String],
    ) -> std::result::Result<Vec<CandidatePage>, IndexError> {
        let lookups: Vec<_> = stream::iter(pages.to_vec())
            .map(|page| async move {
                let lookup = self.first_revision(&page).await;
                (page, lookup)
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        let mut candidates = Vec::with_capacity(lookups.len());
        for (page, lookup) in lookups {
            match lookup {
                Ok(Some(candidate)) => candidates.push(candidate),
                Ok(None) => warn!("{}: no visible first revision", page),
                Err(e) => warn!("{}: first revision lookup failed: {}", page, e),
            }
        }
        Ok(candidates)
    }
}

/// Request parameters for the first `usercontribs` page
fn contribs_params(query: &IndexQuery) -> Vec<(String, String)> {
    let mut request = params([
        ("list", "usercontribs"),
        ("ucuser", query.participant.name()),
        ("ucnamespace", "4"),
        ("ucprop", "title|timestamp"),
        ("ucdir", "older"),
    ]);
    request.push(("uclimit".to_string(), CONTRIBS_PER_REQUEST.to_string()));
    if let Some(start) = query.start_date {
        request.push(("ucstart".to_string(), contribs_start(start)));
    }
    if query.nominations_only {
        request.push(("ucshow".to_string(), "new".to_string()));
    }
    request
}

/// Last second of the start day, as the API expects it
fn contribs_start(start: StartDate) -> String {
    format!("{}T23:59:59Z", start.date().format("%Y-%m-%d"))
}

/// Append unseen discussion pages in the order given
fn collect_discussions(
    contribs: &[UserContrib],
    seen: &mut HashSet<String>,
    pages: &mut Vec<String>,
) {
    for contrib in contribs {
        let Some(page) = page_id(&contrib.title) else {
            continue;
        };
        if is_discussion(&page) && seen.insert(page.clone()) {
            pages.push(page);
        }
    }
}

/// `2020-05-01T09:30:00Z` -> `20200501093000`
fn compact_timestamp(iso: &str) -> Result<String> {
    DateTime::parse_from_rfc3339(iso)
        .map(|t| t.format("%Y%m%d%H%M%S").to_string())
        .map_err(|e| MediaWikiError::InvalidTimestamp(format!("{}: {}", iso, e)))
}
