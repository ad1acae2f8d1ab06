//! Page content backed by `prop=revisions` with `rvslots=main`

use super::client::{MediaWikiClient, params};
use super::error::Result;
use super::titles::{api_title, page_id};
use super::types::PagesQuery;
use afdstats_application::{ContentError, MAX_CONTENT_BATCH, PageContentPort};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Fetches current discussion wikitext, up to 50 titles per request
pub struct MediaWikiPageContent {
    client: Arc<MediaWikiClient>,
}

impl MediaWikiPageContent {
    pub fn new(client: Arc<MediaWikiClient>) -> Self {
        Self { client }
    }

    async fn fetch_batch(&self, pages: &[String]) -> Result<HashMap<String, String>> {
        let titles = pages
            .iter()
            .map(|page| api_title(page))
            .collect::<Vec<_>>()
            .join("|");
        let request = params([
            ("titles", titles.as_str()),
            ("prop", "revisions|info"),
            ("rvprop", "content"),
            ("rvslots", "main"),
        ]);

        let response = self.client.query::<PagesQuery>(&request).await?;
        Ok(texts_by_page(response.query.unwrap_or_default()))
    }
}

#[async_trait]
impl PageContentPort for MediaWikiPageContent {
    async fn fetch(
        &self,
        pages: &[String],
    ) -> std::result::Result<HashMap<String, String>, ContentError> {
        let mut texts = HashMap::with_capacity(pages.len());
        for batch in pages.chunks(MAX_CONTENT_BATCH) {
            texts.extend(self.fetch_batch(batch).await?);
        }
        Ok(texts)
    }
}

/// Map page identifier to wikitext, dropping redirects and empty pages
fn texts_by_page(query: PagesQuery) -> HashMap<String, String> {
    query
        .pages
        .into_iter()
        .filter_map(|entry| {
            if entry.missing || entry.invalid || entry.redirect {
                debug!("{}: missing or redirect, skipped", entry.title);
                return None;
            }
            let page = page_id(&entry.title)?;
            let text = entry.content()?.to_string();
            Some((page, text))
        })
        .collect()
}
