//! Use cases (application services)

pub mod analyze_discussions;
pub mod compile_stats;
