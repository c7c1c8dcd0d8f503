//! Run orchestration
//!
//! One run goes through these phases:
//!
//! 1. **Selection**: preset ids or an interactive pick; required components are always added
//! 2. **Resolution**: dependency closure, sorted into the canonical execution order
//! 3. **Disclosure**: auto-added dependencies and the numbered plan are shown
//! 4. **Confirmation**: skipped with `--yes` and in preview mode
//! 5. **Execution**: strictly sequential, one [`ComponentRun`] state machine per component
//! 6. **Summary**: final states only; see [`RunSummary`]
//!
//! A failed component (including one whose action could not even start) goes to the
//! prompter for a [`Decision`]: retry it, skip it, or abort the whole run. A live run does
//! not start unless the prompter can answer that question, and a prompt that fails anyway
//! aborts the run with its summary intact.

pub mod state;
pub mod summary;

use std::collections::BTreeSet;

pub use state::{ComponentRun, ComponentState, Failure, FailureKind};
pub use summary::{RunOutcome, RunSummary};

use crate::error::Result;
use crate::executor::{Action, ExecutionResult, Executor};
use crate::prompt::{Decision, Prompter};
use crate::registry::{Component, Registry};
use crate::resolver::{self, ExecutionPlan};
use crate::ui::display;

/// What a run ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunReport {
    /// Nothing was selected; no component ran
    NothingSelected,
    /// The user declined the confirmation
    Cancelled,
    Finished(RunSummary),
}

/// Drives a selection through resolution and execution
pub struct Orchestrator<'r, A, P> {
    registry: &'r Registry,
    executor: Executor<A>,
    prompter: P,
}

impl<'r, A: Action, P: Prompter> Orchestrator<'r, A, P> {
    pub fn new(registry: &'r Registry, executor: Executor<A>, prompter: P) -> Self {
        Self {
            registry,
            executor,
            prompter,
        }
    }

    /// Run the installer
    ///
    /// `preset` skips the interactive selection.
    ///
    /// # Errors
    ///
    /// Returns usage errors (unknown ids, no terminal for a needed prompt) before any
    /// component runs. Component failures are not errors; they are reported in the
    /// [`RunSummary`].
    pub fn run(&mut self, preset: Option<BTreeSet<String>>) -> Result<RunReport> {
        let mut selection = match preset {
            Some(ids) => ids,
            None => self.prompter.select(self.registry.components())?,
        };
        selection.extend(self.registry.required_ids().map(str::to_string));

        if selection.is_empty() {
            display::nothing_selected();
            return Ok(RunReport::NothingSelected);
        }

        let plan = resolver::plan(self.registry, &selection)?;
        display::auto_added(self.registry, &plan.auto_added);
        display::plan(self.registry, &plan);

        let mode = self.executor.mode();
        if !mode.preview {
            self.prompter.ensure_can_choose()?;
        }
        if !mode.preview
            && !mode.assume_yes
            && !self.prompter.confirm("Proceed with installation?")?
        {
            display::cancelled();
            return Ok(RunReport::Cancelled);
        }

        let summary = self.execute_plan(&plan)?;
        display::summary(&summary);
        Ok(RunReport::Finished(summary))
    }

    /// Execute every planned component in order
    fn execute_plan(&mut self, plan: &ExecutionPlan) -> Result<RunSummary> {
        let registry = self.registry;
        let components: Vec<&Component> = plan
            .steps
            .iter()
            .map(|id| registry.find(id))
            .collect::<Result<_>>()?;
        let mut runs: Vec<ComponentRun> = components
            .iter()
            .map(|c| ComponentRun::new(&c.id, &c.name))
            .collect();

        tracing::info!(steps = plan.steps.len(), "executing plan");
        display::execution_started();

        let mut outcome = RunOutcome::Completed;
        let mut interrupted = None;
        for (component, run) in components.iter().zip(runs.iter_mut()) {
            match self.drive(component, run)? {
                Flow::Continue => {}
                Flow::Abort => {
                    display::aborted(component);
                    outcome = RunOutcome::Aborted;
                    break;
                }
                Flow::Interrupted(reason) => {
                    display::recovery_failed(component, &reason);
                    outcome = RunOutcome::Aborted;
                    interrupted = Some(reason);
                    break;
                }
            }
        }

        tracing::info!(?outcome, "run finished");

        Ok(RunSummary {
            outcome,
            preview: self.executor.mode().preview,
            runs,
            interrupted,
        })
    }

    /// Attempt one component until it succeeds, is skipped, or the run is aborted
    fn drive(&mut self, component: &Component, run: &mut ComponentRun) -> Result<Flow> {
        loop {
            if run.attempts() > 0 {
                display::retrying(component, run.attempts() + 1);
            }
            run.start();

            let failure = match self.executor.execute(component) {
                Ok(ExecutionResult::Succeeded) => {
                    run.succeed();
                    return Ok(Flow::Continue);
                }
                Ok(ExecutionResult::Preview { .. }) => {
                    run.preview();
                    return Ok(Flow::Continue);
                }
                Ok(ExecutionResult::Failed { diagnostic }) => Failure::action(diagnostic),
                Err(err) if err.is_environment() => {
                    tracing::debug!(component = %component.id, error = %err, "environment error");
                    display::environment_error(component, &err);
                    Failure::environment(err.to_string())
                }
                Err(err) => return Err(err),
            };
            run.fail(failure);

            let prompt = format!("{} failed. What would you like to do?", component.name);
            let decision = match self.prompter.choose(&prompt, &Decision::ALL) {
                Ok(decision) => decision,
                Err(err) => {
                    tracing::warn!(component = %component.id, error = %err, "recovery prompt failed");
                    return Ok(Flow::Interrupted(err.to_string()));
                }
            };
            match decision {
                Decision::Retry => {
                    tracing::debug!(component = %component.id, "retrying");
                }
                Decision::Skip => {
                    run.skip();
                    return Ok(Flow::Continue);
                }
                Decision::Abort => return Ok(Flow::Abort),
            }
        }
    }

    #[cfg(test)]
    fn prompter(&self) -> &P {
        &self.prompter
    }

    #[cfg(test)]
    fn executor(&self) -> &Executor<A> {
        &self.executor
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Abort,
    /// The recovery prompt itself failed
    Interrupted(String),
}
