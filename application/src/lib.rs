//! Application layer for afdstats
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_MAX_RESULTS, MAX_RESULTS_LIMIT, RunParams};
pub use ports::{
    discussion_index::{DiscussionIndexPort, IndexError, IndexQuery, StartDate},
    page_content::{ContentError, MAX_CONTENT_BATCH, PageContentPort},
    progress::{NoProgress, Phase, ProgressNotifier},
};
pub use use_cases::analyze_discussions::{
    AnalysisOutput, AnalyzeDiscussionsUseCase, SkippedDiscussion,
};
pub use use_cases::compile_stats::{
    CompileStatsError, CompileStatsInput, CompileStatsUseCase, StatsReport,
};
