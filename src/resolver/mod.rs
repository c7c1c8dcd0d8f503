//! Dependency resolution for components
//!
//! This module handles:
//! - Expanding a selection to its dependency closure
//! - Sorting the closure into the canonical execution order
//!
//! The result is an [`ExecutionPlan`]: the ordered list of components to run,
//! plus the ids that were pulled in automatically.

pub mod closure;
pub mod sort;

use std::collections::BTreeSet;

pub use closure::{Closure, close_over};
pub use sort::order;

use crate::error::Result;
use crate::registry::Registry;

/// The closure of a selection, sorted into canonical execution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionPlan {
    /// Component ids in the order they will run
    pub steps: Vec<String>,
    /// Ids added because something in the selection depends on them
    pub auto_added: BTreeSet<String>,
}

/// Resolve a selection into an execution plan
///
/// # Errors
///
/// Returns `SetupError::UnknownComponent` if the selection names an unknown id.
pub fn plan(registry: &Registry, selection: &BTreeSet<String>) -> Result<ExecutionPlan> {
    let Closure {
        closure,
        auto_added,
    } = close_over(registry, selection)?;

    let steps = order(registry.canonical_order(), &closure);
    tracing::debug!(steps = ?steps, "execution plan resolved");

    Ok(ExecutionPlan { steps, auto_added })
}
