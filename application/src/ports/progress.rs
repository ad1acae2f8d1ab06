//! Progress notification port
//!
//! Defines the interface for reporting progress while statistics are compiled.

use std::fmt;

/// Stages of a statistics run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Listing candidate discussions
    Listing,
    /// Fetching page text in batches
    Fetching,
    /// Classifying discussions
    Analyzing,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Listing => "listing",
            Phase::Fetching => "fetching",
            Phase::Analyzing => "analyzing",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback for progress updates
///
/// Implementations live in the presentation layer.
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize);

    /// Called when a unit of work (a batch, a discussion) completes
    fn on_task_complete(&self, phase: &Phase, label: &str, success: bool);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &Phase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &Phase, _total_tasks: usize) {}
    fn on_task_complete(&self, _phase: &Phase, _label: &str, _success: bool) {}
    fn on_phase_complete(&self, _phase: &Phase) {}
}
