//! Run summary
//!
//! Only the final state of each component counts; a component that failed twice and
//! then succeeded is a success.

use super::state::{ComponentRun, ComponentState, Failure};

/// How the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    /// The user aborted; later components stay pending
    Aborted,
}

/// Final accounting of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub preview: bool,
    pub runs: Vec<ComponentRun>,
    /// Prompt error that ended the run when a failure could not be put to the user
    pub interrupted: Option<String>,
}

impl RunSummary {
    fn count(&self, predicate: impl Fn(&ComponentState) -> bool) -> usize {
        self.runs.iter().filter(|run| predicate(run.state())).count()
    }

    pub fn succeeded(&self) -> usize {
        self.count(|s| matches!(s, ComponentState::Succeeded))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, ComponentState::Failed(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, ComponentState::Skipped(_)))
    }

    pub fn previewed(&self) -> usize {
        self.count(|s| matches!(s, ComponentState::Previewed))
    }

    /// Components the run never reached
    pub fn not_attempted(&self) -> Vec<&ComponentRun> {
        self.runs
            .iter()
            .filter(|run| matches!(run.state(), ComponentState::Pending))
            .collect()
    }

    /// Every component whose last attempt failed, skipped or not
    pub fn failures(&self) -> Vec<(&ComponentRun, &Failure)> {
        self.runs
            .iter()
            .filter_map(|run| run.state().failure().map(|failure| (run, failure)))
            .collect()
    }

    pub fn failed_names(&self) -> Vec<String> {
        self.failures()
            .into_iter()
            .map(|(run, _)| run.name.clone())
            .collect()
    }

    /// The component the run was aborted at
    pub fn aborted_at(&self) -> Option<&ComponentRun> {
        if self.outcome != RunOutcome::Aborted {
            return None;
        }
        self.runs
            .iter()
            .rev()
            .find(|run| !matches!(run.state(), ComponentState::Pending))
    }

    /// Success means the run completed and no component ended in failure
    pub fn is_success(&self) -> bool {
        self.outcome == RunOutcome::Completed && self.failures().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_in(id: &str, states: &[&str]) -> ComponentRun {
        let mut run = ComponentRun::new(id, id.to_uppercase());
        for state in states {
            match *state {
                "start" => run.start(),
                "ok" => run.succeed(),
                "fail" => run.fail(Failure::action("exited with status 1")),
                "skip" => run.skip(),
                "preview" => run.preview(),
                other => panic!("unknown step {other}"),
            }
        }
        run
    }

    #[test]
    fn test_counts_final_states_only() {
        let summary = RunSummary {
            outcome: RunOutcome::Completed,
            preview: false,
            runs: vec![
                run_in("a", &["start", "fail", "start", "ok"]),
                run_in("b", &["start", "fail", "skip"]),
                run_in("c", &["start", "ok"]),
            ],
            interrupted: None,
        };

        assert_eq!(summary.succeeded(), 2);
        assert_eq!(summary.skipped(), 1);
        assert_eq!(summary.failed(), 0);
        assert_eq!(summary.failed_names(), vec!["B"]);
        assert!(!summary.is_success());
    }

    #[test]
    fn test_aborted_run_reports_not_attempted() {
        let summary = RunSummary {
            outcome: RunOutcome::Aborted,
            preview: false,
            runs: vec![
                run_in("a", &["start", "ok"]),
                run_in("b", &["start", "fail"]),
                run_in("c", &[]),
            ],
            interrupted: None,
        };

        assert_eq!(summary.failed(), 1);
        let pending: Vec<&str> = summary.not_attempted().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(pending, vec!["c"]);
        assert_eq!(summary.aborted_at().map(|r| r.id.as_str()), Some("b"));
        assert!(!summary.is_success());
    }

    #[test]
    fn test_preview_run_is_success() {
        let summary = RunSummary {
            outcome: RunOutcome::Completed,
            preview: true,
            runs: vec![run_in("a", &["start", "preview"]), run_in("b", &["start", "preview"])],
            interrupted: None,
        };

        assert_eq!(summary.previewed(), 2);
        assert_eq!(summary.succeeded(), 0);
        assert!(summary.aborted_at().is_none());
        assert!(summary.is_success());
    }
}
