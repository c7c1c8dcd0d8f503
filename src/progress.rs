//! Progress display while probing for installed tools

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for the CLI-suite presence checks
///
/// Install commands run with inherited stdio, so the spinner is only shown while
/// probing and is cleared before anything else prints.
pub trait ProgressReporter {
    /// Show that `tool` is being checked (`current` of `total`)
    fn checking(&mut self, tool: &str, current: usize, total: usize);

    /// Clear the indicator
    fn clear(&mut self);
}

/// Spinner on stderr
pub struct SpinnerProgress {
    spinner: Option<ProgressBar>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self { spinner: None }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for SpinnerProgress {
    fn checking(&mut self, tool: &str, current: usize, total: usize) {
        let spinner = self.spinner.get_or_insert_with(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::style());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        spinner.set_message(format!("({current}/{total}) Checking {tool}..."));
    }

    fn clear(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

/// No-op reporter for dry runs, verbose runs and tests
#[derive(Debug, Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn checking(&mut self, _tool: &str, _current: usize, _total: usize) {}

    fn clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_progress_no_ops() {
        let mut reporter = SilentProgress;
        reporter.checking("codex", 1, 5);
        reporter.clear();
    }

    #[test]
    fn test_spinner_is_created_lazily_and_cleared() {
        let mut reporter = SpinnerProgress::new();
        assert!(reporter.spinner.is_none());

        reporter.checking("codex", 1, 5);
        assert!(reporter.spinner.is_some());

        reporter.clear();
        assert!(reporter.spinner.is_none());
    }
}
