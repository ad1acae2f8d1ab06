//! Wiki connection configuration from TOML (`[wiki]` section)

use crate::mediawiki::ClientSettings;
use crate::mediawiki::index::{DEFAULT_CONCURRENCY, DEFAULT_MAX_CONTRIBUTIONS};
use afdstats_application::MAX_CONTENT_BATCH;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw wiki configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWikiConfig {
    /// `api.php` endpoint
    pub api_url: String,
    /// Identifying User-Agent sent with every request
    pub user_agent: String,
    /// Timeout in seconds for API calls
    pub timeout_seconds: u64,
    /// Titles per content request (1-50)
    pub batch_size: usize,
    /// First-revision lookups in flight at once
    pub concurrency: usize,
    /// Contributions scanned before older history is skipped
    pub max_contributions: usize,
}

impl Default for FileWikiConfig {
    fn default() -> Self {
        Self {
            api_url: "https://en.wikipedia.org/w/api.php".to_string(),
            user_agent: format!(
                "afdstats/{} (https://afdstats.toolforge.org/)",
                env!("CARGO_PKG_VERSION")
            ),
            timeout_seconds: 30,
            batch_size: MAX_CONTENT_BATCH,
            concurrency: DEFAULT_CONCURRENCY,
            max_contributions: DEFAULT_MAX_CONTRIBUTIONS,
        }
    }
}

impl FileWikiConfig {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            api_url: self.api_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_settings() {
        let settings = FileWikiConfig::default().client_settings();
        assert_eq!(settings.api_url, "https://en.wikipedia.org/w/api.php");
        assert!(settings.user_agent.starts_with("afdstats/"));
        assert_eq!(settings.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_scan_limits_default() {
        let config = FileWikiConfig::default();
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.max_contributions, 5000);
    }
}
