//! Thin HTTP client for the MediaWiki Action API

use super::error::{MediaWikiError, Result};
use super::types::ApiResponse;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::trace;

/// Connection settings for [`MediaWikiClient`]
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Full `api.php` endpoint
    pub api_url: String,
    /// Wikimedia requires an identifying User-Agent
    pub user_agent: String,
    pub timeout: Duration,
}

/// Issues `action=query` requests and decodes `formatversion=2` JSON
#[derive(Debug, Clone)]
pub struct MediaWikiClient {
    http: reqwest::Client,
    api_url: String,
}

impl MediaWikiClient {
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(settings.timeout)
            .build()?;
        Ok(Self {
            http,
            api_url: settings.api_url.clone(),
        })
    }

    /// Run one query; API-level errors become [`MediaWikiError::Api`]
    pub async fn query<Q: DeserializeOwned>(
        &self,
        params: &[(String, String)],
    ) -> Result<ApiResponse<Q>> {
        trace!("GET {} {:?}", self.api_url, params);

        let response = self
            .http
            .get(&self.api_url)
            .query(&[("action", "query"), ("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MediaWikiError::Status {
                status: status.as_u16(),
            });
        }

        let body: ApiResponse<Q> = response.json().await?;
        if let Some(error) = body.error {
            return Err(MediaWikiError::Api {
                code: error.code,
                info: error.info,
            });
        }
        Ok(body)
    }
}

/// Build an owned parameter list from string pairs
pub(crate) fn params<const N: usize>(pairs: [(&str, &str); N]) -> Vec<(String, String)> {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
