//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod analysis;
mod output;
mod wiki;

pub use analysis::FileAnalysisConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use wiki::FileWikiConfig;

use afdstats_application::{MAX_CONTENT_BATCH, RunParams};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("wiki.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("wiki.batch_size must be between 1 and {max}, got {got}")]
    InvalidBatchSize { got: usize, max: usize },

    #[error("wiki.max_contributions cannot be 0")]
    InvalidMaxContributions,

    #[error("wiki.api_url cannot be empty")]
    EmptyApiUrl,

    #[error("analysis.max_results cannot be 0")]
    InvalidMaxResults,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Wiki connection settings
    pub wiki: FileWikiConfig,
    /// Analysis settings
    pub analysis: FileAnalysisConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.wiki.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.wiki.batch_size == 0 || self.wiki.batch_size > MAX_CONTENT_BATCH {
            return Err(ConfigValidationError::InvalidBatchSize {
                got: self.wiki.batch_size,
                max: MAX_CONTENT_BATCH,
            });
        }

        if self.wiki.api_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyApiUrl);
        }

        if self.wiki.max_contributions == 0 {
            return Err(ConfigValidationError::InvalidMaxContributions);
        }

        if self.analysis.max_results == 0 {
            return Err(ConfigValidationError::InvalidMaxResults);
        }

        Ok(())
    }

    pub fn run_params(&self) -> RunParams {
        self.analysis.run_params(self.wiki.batch_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use afdstats_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[wiki]
api_url = "https://test.wikipedia.org/w/api.php"
user_agent = "afdstats-test/1.0"
timeout_seconds = 60
batch_size = 20
concurrency = 2
max_contributions = 1000

[analysis]
max_results = 50
include_undetermined = true

[output]
format = "json"
color = false
show_progress = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.wiki.api_url, "https://test.wikipedia.org/w/api.php");
        assert_eq!(config.wiki.timeout_seconds, 60);
        assert_eq!(config.wiki.batch_size, 20);
        assert_eq!(config.wiki.concurrency, 2);
        assert_eq!(config.wiki.max_contributions, 1000);
        assert_eq!(config.analysis.max_results, 50);
        assert!(config.analysis.include_undetermined);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.output.show_progress);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[analysis]
max_results = 100
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.analysis.max_results, 100);
        // Defaults should apply
        assert!(!config.analysis.include_undetermined);
        assert_eq!(config.wiki.batch_size, 50);
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.analysis.max_results, 200);
        assert_eq!(config.wiki.timeout_seconds, 30);
        assert_eq!(config.output.format, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let toml_str = r#"
[wiki]
timeout_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_validate_batch_size() {
        for size in [0, 51] {
            let mut config = FileConfig::default();
            config.wiki.batch_size = size;
            assert!(matches!(
                config.validate(),
                Err(ConfigValidationError::InvalidBatchSize { got, max: 50 }) if got == size
            ));
        }
    }

    #[test]
    fn test_validate_zero_max_contributions() {
        let mut config = FileConfig::default();
        config.wiki.max_contributions = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidMaxContributions)
        ));
    }

    #[test]
    fn test_validate_zero_max_results() {
        let mut config = FileConfig::default();
        config.analysis.max_results = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidMaxResults)
        ));
    }

    #[test]
    fn test_run_params_clamps_max_results() {
        let mut config = FileConfig::default();
        config.analysis.max_results = 9000;
        config.wiki.batch_size = 25;
        let params = config.run_params();
        assert_eq!(params.max_results, 500);
        assert_eq!(params.batch_size, 25);
    }
}
