//! User interaction
//!
//! The orchestrator never talks to the terminal directly; it asks a [`Prompter`].
//! [`TerminalPrompter`] is backed by `inquire`, and tests use a scripted prompter
//! that replays canned answers.

pub mod terminal;

#[cfg(test)]
pub mod scripted;

use std::collections::BTreeSet;
use std::fmt;

pub use terminal::TerminalPrompter;

use crate::error::Result;
use crate::registry::Component;

/// Recovery choice after a component fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Retry,
    Skip,
    Abort,
}

impl Decision {
    pub const ALL: [Decision; 3] = [Decision::Retry, Decision::Skip, Decision::Abort];
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Decision::Retry => "Retry",
            Decision::Skip => "Skip and continue",
            Decision::Abort => "Abort installation",
        };
        f.write_str(label)
    }
}

/// Source of user decisions
pub trait Prompter {
    /// Pick component ids from `candidates`
    fn select(&mut self, candidates: &[Component]) -> Result<BTreeSet<String>>;

    /// Yes/no question
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Pick one of `options`
    fn choose(&mut self, prompt: &str, options: &[Decision]) -> Result<Decision>;

    /// Fails when a failed component could not be put to the user
    ///
    /// Checked before the first component of a live run starts.
    fn ensure_can_choose(&self) -> Result<()> {
        Ok(())
    }
}
