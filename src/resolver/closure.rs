//! Dependency closure
//!
//! Expands a selection to every transitively required component using a
//! breadth-first walk over the dependency lists.
//!
//! ```text
//! registry:   c -> b -> a
//! selection:  {c}
//! closure:    {a, b, c}
//! auto_added: {a, b}
//! ```

use std::collections::{BTreeSet, VecDeque};

use crate::error::Result;
use crate::registry::Registry;

/// A selection expanded with all of its transitive dependencies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Closure {
    /// Selection plus every transitive dependency
    pub closure: BTreeSet<String>,
    /// Ids that were not selected but are required by the selection
    pub auto_added: BTreeSet<String>,
}

/// Compute the dependency closure of `selection`
///
/// Terminates because the registry graph is finite and acyclic (checked when the
/// registry was built).
///
/// # Errors
///
/// Returns `SetupError::UnknownComponent` before any expansion if the selection
/// names a component that is not in the registry.
pub fn close_over(registry: &Registry, selection: &BTreeSet<String>) -> Result<Closure> {
    registry.ensure_known(selection)?;

    let mut seen = selection.clone();
    let mut auto_added = BTreeSet::new();
    let mut queue: VecDeque<&str> = selection.iter().map(String::as_str).collect();

    while let Some(id) = queue.pop_front() {
        let Some(component) = registry.get(id) else {
            continue;
        };
        for dep in &component.dependencies {
            if seen.insert(dep.clone()) {
                tracing::debug!(component = id, dependency = %dep, "auto-selecting dependency");
                auto_added.insert(dep.clone());
                queue.push_back(dep);
            }
        }
    }

    Ok(Closure {
        closure: seen,
        auto_added,
    })
}
