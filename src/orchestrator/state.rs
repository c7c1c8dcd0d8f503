//! Per-component run state
//!
//! ```text
//! Pending -> Running -> Succeeded
//!                    -> Previewed
//!                    -> Failed -> Running    (retry)
//!                              -> Skipped    (skip)
//! ```
//!
//! A component left `Pending` when the run ends was never attempted.

use std::fmt;

/// Where a failed attempt came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The action ran and reported failure
    Action,
    /// The action could not be started at all
    Environment,
}

/// A failed attempt and its diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub diagnostic: String,
}

impl Failure {
    pub fn action(diagnostic: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Action,
            diagnostic: diagnostic.into(),
        }
    }

    pub fn environment(diagnostic: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Environment,
            diagnostic: diagnostic.into(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FailureKind::Action => write!(f, "{}", self.diagnostic),
            FailureKind::Environment => write!(f, "environment error: {}", self.diagnostic),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentState {
    Pending,
    Running,
    Succeeded,
    Failed(Failure),
    Skipped(Failure),
    Previewed,
}

impl ComponentState {
    /// The failure of the last attempt, if it failed
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            ComponentState::Failed(failure) | ComponentState::Skipped(failure) => Some(failure),
            _ => None,
        }
    }
}

/// One planned component and everything that happened to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRun {
    pub id: String,
    pub name: String,
    state: ComponentState,
    attempts: u32,
}

impl ComponentRun {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            state: ComponentState::Pending,
            attempts: 0,
        }
    }

    pub fn state(&self) -> &ComponentState {
        &self.state
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Begin an attempt; valid from `Pending` and, as a retry, from `Failed`
    pub fn start(&mut self) {
        match self.state {
            ComponentState::Pending | ComponentState::Failed(_) => {
                self.attempts += 1;
                self.state = ComponentState::Running;
            }
            _ => self.reject("start"),
        }
    }

    pub fn succeed(&mut self) {
        self.finish(ComponentState::Succeeded, "succeed");
    }

    pub fn preview(&mut self) {
        self.finish(ComponentState::Previewed, "preview");
    }

    pub fn fail(&mut self, failure: Failure) {
        self.finish(ComponentState::Failed(failure), "fail");
    }

    /// Give up on a failed component and move on
    pub fn skip(&mut self) {
        match std::mem::replace(&mut self.state, ComponentState::Pending) {
            ComponentState::Failed(failure) => self.state = ComponentState::Skipped(failure),
            other => {
                self.state = other;
                self.reject("skip");
            }
        }
    }

    fn finish(&mut self, next: ComponentState, transition: &str) {
        if self.state == ComponentState::Running {
            self.state = next;
        } else {
            self.reject(transition);
        }
    }

    fn reject(&self, transition: &str) {
        tracing::warn!(
            component = %self.id,
            state = ?self.state,
            transition,
            "ignoring invalid state transition"
        );
    }
}
