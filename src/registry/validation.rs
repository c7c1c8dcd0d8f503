//! Registry integrity checks
//!
//! This module provides:
//! - Dependency reference validation
//! - Standalone component checks
//! - Circular dependency detection
//! - Canonical execution order validation
//!
//! ## Cycle detection
//!
//! Uses DFS with three-color marking:
//!
//! 1. **WHITE** (unvisited): Node hasn't been processed
//! 2. **GRAY** (in progress): Node is on the current DFS path
//! 3. **BLACK** (done): Node and all of its dependencies have been processed
//!
//! Reaching a GRAY node means the current path closes a cycle.

use std::collections::{HashMap, HashSet};

use super::Component;
use crate::error::{Result, registry as registry_error};

/// Validate that every dependency refers to a known component
///
/// # Errors
///
/// Returns `SetupError::DependencyNotFound` for the first unknown dependency.
pub fn validate_references(
    components: &[Component],
    index: &HashMap<String, usize>,
) -> Result<()> {
    for component in components {
        for dep in &component.dependencies {
            if !index.contains_key(dep) {
                return Err(registry_error::dependency_not_found(dep, &component.id));
            }
        }
    }
    Ok(())
}

/// Validate that nothing depends on a standalone component
///
/// A standalone component that declares dependencies of its own is only logged.
///
/// # Errors
///
/// Returns `SetupError::StandaloneViolation` if another component depends on a
/// standalone one.
pub fn validate_standalone(components: &[Component]) -> Result<()> {
    let standalone: HashSet<&str> = components
        .iter()
        .filter(|c| c.standalone)
        .map(|c| c.id.as_str())
        .collect();

    for component in components {
        if component.standalone && !component.dependencies.is_empty() {
            tracing::warn!(
                component = %component.id,
                dependencies = ?component.dependencies,
                "standalone component declares dependencies"
            );
        }
        if let Some(dep) = component
            .dependencies
            .iter()
            .find(|dep| standalone.contains(dep.as_str()))
        {
            return Err(registry_error::standalone_violation(
                dep,
                format!("must not be a dependency of '{}'", component.id),
            ));
        }
    }
    Ok(())
}

/// DFS state shared across the traversal
struct CycleCheck<'a> {
    components: &'a [Component],
    index: &'a HashMap<String, usize>,
    /// BLACK nodes
    done: HashSet<&'a str>,
    /// GRAY nodes, in path order
    path: Vec<&'a str>,
}

impl<'a> CycleCheck<'a> {
    fn visit(&mut self, id: &'a str) -> Result<()> {
        if let Some(start) = self.path.iter().position(|&p| p == id) {
            let mut chain: Vec<String> = self.path[start..]
                .iter()
                .map(|s| (*s).to_string())
                .collect();
            chain.push(id.to_string());
            return Err(registry_error::circular(&chain));
        }

        if self.done.contains(id) {
            return Ok(());
        }

        self.path.push(id);

        let components = self.components;
        if let Some(&position) = self.index.get(id) {
            for dep in &components[position].dependencies {
                self.visit(dep)?;
            }
        }

        self.path.pop();
        self.done.insert(id);

        Ok(())
    }
}

/// Check that the dependency graph is acyclic
///
/// # Errors
///
/// Returns `SetupError::CircularDependency` naming the chain that closes the cycle,
/// e.g. `a -> b -> a`.
pub fn check_acyclic(components: &[Component], index: &HashMap<String, usize>) -> Result<()> {
    let mut check = CycleCheck {
        components,
        index,
        done: HashSet::with_capacity(components.len()),
        path: Vec::new(),
    };

    for component in components {
        check.visit(&component.id)?;
    }
    Ok(())
}

/// Validate that `order` lists every component exactly once, after its dependencies
///
/// # Errors
///
/// Returns `SetupError::InvalidExecutionOrder` describing the first violation.
pub fn validate_execution_order(
    components: &[Component],
    index: &HashMap<String, usize>,
    order: &[String],
) -> Result<()> {
    let mut positions: HashMap<&str, usize> = HashMap::with_capacity(order.len());
    for (position, id) in order.iter().enumerate() {
        if !index.contains_key(id) {
            return Err(registry_error::invalid_order(format!(
                "'{id}' is not a known component"
            )));
        }
        if positions.insert(id.as_str(), position).is_some() {
            return Err(registry_error::invalid_order(format!(
                "'{id}' appears more than once"
            )));
        }
    }

    for component in components {
        let Some(&position) = positions.get(component.id.as_str()) else {
            return Err(registry_error::invalid_order(format!(
                "'{}' is missing",
                component.id
            )));
        };
        for dep in &component.dependencies {
            if positions.get(dep.as_str()).is_some_and(|&dep_pos| dep_pos > position) {
                return Err(registry_error::invalid_order(format!(
                    "'{}' runs before its dependency '{dep}'",
                    component.id
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::SetupError;
    use crate::registry::test_support::{component, ids};

    fn index_of(components: &[Component]) -> HashMap<String, usize> {
        components
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect()
    }

    #[test]
    fn test_validate_references_valid() {
        let components = vec![component("a", &[]), component("b", &["a"])];
        assert!(validate_references(&components, &index_of(&components)).is_ok());
    }

    #[test]
    fn test_validate_references_missing() {
        let components = vec![component("a", &["missing"])];
        let err = validate_references(&components, &index_of(&components))
            .expect_err("missing dependency should fail");

        if let SetupError::DependencyNotFound { name, dependent } = err {
            assert_eq!(name, "missing");
            assert_eq!(dependent, "a");
        } else {
            panic!("Expected DependencyNotFound error");
        }
    }

    #[test]
    fn test_acyclic_accepts_dag() {
        // Diamond: d -> (b, c) -> a
        let components = vec![
            component("a", &[]),
            component("b", &["a"]),
            component("c", &["a"]),
            component("d", &["b", "c"]),
        ];
        assert!(check_acyclic(&components, &index_of(&components)).is_ok());
    }

    #[test]
    fn test_acyclic_rejects_self_loop() {
        let components = vec![component("x", &["x"])];
        let err = check_acyclic(&components, &index_of(&components))
            .expect_err("self loop should fail");
        assert!(matches!(err, SetupError::CircularDependency { ref chain } if chain == "x -> x"));
    }

    #[test]
    fn test_acyclic_rejects_transitive_cycle() {
        let components = vec![
            component("a", &["c"]),
            component("b", &["a"]),
            component("c", &["b"]),
        ];
        let err = check_acyclic(&components, &index_of(&components))
            .expect_err("cycle should fail");

        if let SetupError::CircularDependency { chain } = err {
            assert_eq!(chain, "a -> c -> b -> a");
        } else {
            panic!("Expected CircularDependency error");
        }
    }

    #[test]
    fn test_cycle_reported_only_from_cycle_members() {
        // "entry" leads into the cycle but is not part of it
        let components = vec![
            component("entry", &["p"]),
            component("p", &["q"]),
            component("q", &["p"]),
        ];
        let err = check_acyclic(&components, &index_of(&components))
            .expect_err("cycle should fail");
        assert!(matches!(err, SetupError::CircularDependency { ref chain } if chain == "p -> q -> p"));
    }

    #[test]
    fn test_execution_order_valid() {
        let components = vec![component("a", &[]), component("b", &["a"])];
        let order = ids(&["a", "b"]);
        assert!(validate_execution_order(&components, &index_of(&components), &order).is_ok());
    }

    #[test]
    fn test_execution_order_dependency_after_dependent() {
        let components = vec![component("a", &[]), component("b", &["a"])];
        let order = ids(&["b", "a"]);
        let err = validate_execution_order(&components, &index_of(&components), &order)
            .expect_err("reversed order should fail");
        assert!(err.to_string().contains("'b' runs before its dependency 'a'"));
    }

    #[test]
    fn test_execution_order_missing_and_duplicate() {
        let components = vec![component("a", &[]), component("b", &[])];
        let index = index_of(&components);

        let missing = validate_execution_order(&components, &index, &ids(&["a"]))
            .expect_err("missing id should fail");
        assert!(missing.to_string().contains("'b' is missing"));

        let duplicate = validate_execution_order(&components, &index, &ids(&["a", "a", "b"]))
            .expect_err("duplicate id should fail");
        assert!(duplicate.to_string().contains("more than once"));

        let unknown = validate_execution_order(&components, &index, &ids(&["a", "b", "z"]))
            .expect_err("unknown id should fail");
        assert!(unknown.to_string().contains("'z' is not a known component"));
    }

    #[test]
    fn test_standalone_with_dependencies_allowed() {
        let mut removal = component("removal", &["a"]);
        removal.standalone = true;
        let components = vec![component("a", &[]), removal];
        assert!(validate_standalone(&components).is_ok());
    }

    #[test]
    fn test_standalone_as_dependency_rejected() {
        let mut removal = component("removal", &[]);
        removal.standalone = true;
        let components = vec![removal, component("b", &["removal"])];
        let err = validate_standalone(&components).expect_err("dependent should fail");
        assert!(err.to_string().contains("must not be a dependency of 'b'"));
    }
}
