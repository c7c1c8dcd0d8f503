//! The external action bound to a component

use super::ExecutionMode;
use crate::error::Result;
use crate::registry::Component;

/// Outcome of an action that could be started
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Success,
    Failure { diagnostic: String },
}

/// Runs the side effect behind a component
///
/// Implementations run synchronously; the executor waits for `run` to return
/// before it reacts to the outcome.
pub trait Action {
    /// Human-readable command line, shown in verbose and preview output
    fn describe(&self, component: &Component, mode: &ExecutionMode) -> String;

    /// Run the action
    ///
    /// # Errors
    ///
    /// Returns an environment error when the action cannot be located or started.
    /// A started action that fails is reported as [`ActionOutcome::Failure`].
    fn run(&mut self, component: &Component, mode: &ExecutionMode) -> Result<ActionOutcome>;
}
