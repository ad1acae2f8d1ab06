//! Run parameters: volume control for a statistics run.
//!
//! [`RunParams`] groups the limits that bound a single
//! [`CompileStatsUseCase`](crate::use_cases::compile_stats::CompileStatsUseCase)
//! run. These are application-layer concerns, not domain policy.

use crate::ports::page_content::MAX_CONTENT_BATCH;
use serde::{Deserialize, Serialize};

/// Discussions analyzed when no limit is given
pub const DEFAULT_MAX_RESULTS: usize = 200;

/// Hard ceiling on discussions analyzed per run
pub const MAX_RESULTS_LIMIT: usize = 500;

/// Volume limits for one run.
///
/// Builder methods clamp their input, so a `RunParams` is always within
/// the bounds the wiki API tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunParams {
    /// Most discussions to analyze, newest first.
    pub max_results: usize,
    /// Titles per content request.
    pub batch_size: usize,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            batch_size: MAX_CONTENT_BATCH,
        }
    }
}

impl RunParams {
    // ==================== Builder Methods ====================

    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max.clamp(1, MAX_RESULTS_LIMIT);
        self
    }

    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.clamp(1, MAX_CONTENT_BATCH);
        self
    }
}
