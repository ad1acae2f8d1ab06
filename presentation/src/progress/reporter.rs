//! Progress reporting for statistics runs

use afdstats_application::ports::progress::{Phase, ProgressNotifier};
use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress with indicatif progress bars (drawn on stderr)
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn phase_display_name(phase: &Phase) -> &'static str {
        match phase {
            Phase::Listing => "Listing AfDs",
            Phase::Fetching => "Fetching pages",
            Phase::Analyzing => "Analyzing",
        }
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.phase_bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(Self::phase_display_name(phase).to_string());
        pb.set_message("Starting...");

        if let Ok(mut guard) = self.phase_bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_task_complete(&self, _phase: &Phase, label: &str, success: bool) {
        self.with_bar(|pb| {
            let status = if success {
                format!("{} {}", "v".green(), label)
            } else {
                format!("{} {}", "x".red(), label)
            };
            pb.set_message(status);
            pb.inc(1);
        });
    }

    fn on_phase_complete(&self, phase: &Phase) {
        let bar = self.phase_bar.lock().ok().and_then(|mut guard| guard.take());
        if let Some(pb) = bar {
            pb.finish_with_message(format!(
                "{} complete",
                Self::phase_display_name(phase).green()
            ));
        }
    }
}

/// Simple line-based progress on stderr (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        eprintln!(
            "{} {} ({} tasks)",
            "->".cyan(),
            ProgressReporter::phase_display_name(phase).bold(),
            total_tasks
        );
    }

    fn on_task_complete(&self, phase: &Phase, label: &str, success: bool) {
        // Per-discussion lines would drown the output; only failures are shown
        if success && *phase == Phase::Analyzing {
            return;
        }
        if success {
            eprintln!("  {} {}", "v".green(), label);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), label);
        }
    }

    fn on_phase_complete(&self, _phase: &Phase) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_phase_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_phase_start(&Phase::Fetching, 2);
        reporter.on_task_complete(&Phase::Fetching, "batch 1/2", true);
        reporter.on_task_complete(&Phase::Fetching, "batch 2/2", false);
        reporter.on_phase_complete(&Phase::Fetching);

        assert!(reporter.phase_bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_task_without_phase_is_ignored() {
        let reporter = ProgressReporter::new();
        reporter.on_task_complete(&Phase::Analyzing, "AfD/Foo", true);
        reporter.on_phase_complete(&Phase::Analyzing);
    }
}
