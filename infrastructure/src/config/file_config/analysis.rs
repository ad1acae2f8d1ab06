//! Analysis configuration from TOML (`[analysis]` section)

use afdstats_application::{DEFAULT_MAX_RESULTS, RunParams};
use serde::{Deserialize, Serialize};

/// Raw analysis configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnalysisConfig {
    /// Discussions analyzed per run (capped at 500)
    pub max_results: usize,
    /// Count votes whose stance couldn't be classified
    pub include_undetermined: bool,
}

impl Default for FileAnalysisConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            include_undetermined: false,
        }
    }
}

impl FileAnalysisConfig {
    /// Run parameters, with `batch_size` from the `[wiki]` section
    pub fn run_params(&self, batch_size: usize) -> RunParams {
        RunParams::default()
            .with_max_results(self.max_results)
            .with_batch_size(batch_size)
    }
}
