//! Component execution
//!
//! The [`Executor`] runs the action bound to one component and classifies the
//! outcome. Expected action failures (non-zero exit) come back as
//! [`ExecutionResult::Failed`]; only environment problems, such as a missing
//! script or interpreter, are returned as errors.
//!
//! In preview mode nothing is run: the executor reports the command it would
//! have invoked and returns [`ExecutionResult::Preview`].

pub mod action;
pub mod script;

pub use action::{Action, ActionOutcome};
pub use script::ScriptAction;

use crate::error::Result;
use crate::registry::Component;
use crate::ui::display;

/// Immutable run flags threaded through execution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionMode {
    /// Compute and show the plan without running any action
    pub preview: bool,
    /// Echo the exact command invoked for each component
    pub verbose: bool,
    /// Skip confirmation prompts, also passed on to the actions
    pub assume_yes: bool,
}

/// Result of one execution attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    Succeeded,
    Failed { diagnostic: String },
    /// Preview mode; carries the command that would have run
    Preview { command: String },
}

impl ExecutionResult {
    pub fn is_success(&self) -> bool {
        !matches!(self, ExecutionResult::Failed { .. })
    }
}

/// Runs component actions according to an [`ExecutionMode`]
#[derive(Debug)]
pub struct Executor<A> {
    action: A,
    mode: ExecutionMode,
}

impl<A: Action> Executor<A> {
    pub fn new(action: A, mode: ExecutionMode) -> Self {
        Self { action, mode }
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Execute one component
    ///
    /// # Errors
    ///
    /// Returns an environment error (`ActionNotFound`, `ActionSpawnFailed`) when the
    /// action cannot be started at all. A failing action is not an error.
    pub fn execute(&mut self, component: &Component) -> Result<ExecutionResult> {
        let command = self.action.describe(component, &self.mode);

        if self.mode.verbose {
            display::verbose_command(&command);
        }

        if self.mode.preview {
            display::preview_command(&command);
            return Ok(ExecutionResult::Preview { command });
        }

        display::component_started(component);
        tracing::info!(component = %component.id, %command, "running action");

        match self.action.run(component, &self.mode)? {
            ActionOutcome::Success => {
                display::component_succeeded(component);
                Ok(ExecutionResult::Succeeded)
            }
            ActionOutcome::Failure { diagnostic } => {
                tracing::debug!(component = %component.id, %diagnostic, "action failed");
                display::component_failed(component, &diagnostic);
                Ok(ExecutionResult::Failed { diagnostic })
            }
        }
    }

    #[cfg(test)]
    pub fn action(&self) -> &A {
        &self.action
    }
}
