//! Application-level configuration.
//!
//! - [`RunParams`]: how much one statistics run fetches and how it batches

pub mod run_params;

pub use run_params::{DEFAULT_MAX_RESULTS, MAX_RESULTS_LIMIT, RunParams};
