//! Execution order sorting
//!
//! Orders any subset of component ids by their position in the registry's
//! canonical execution order. Because the canonical order is validated to be a
//! topological order, sorting a dependency closure yields a plan where every
//! component runs after all of its dependencies.
//!
//! Ids missing from the canonical order sort last, in lexicographic order. A
//! validated registry never produces such ids; the fallback only keeps the
//! function total.

use std::collections::{BTreeSet, HashMap};

/// Sort `ids` by canonical execution order
///
/// # Example
///
/// ```text
/// canonical: [termux-prep, prerequisites, cli-tools, repo-cloning]
/// ids:       {repo-cloning, termux-prep, cli-tools, prerequisites}
/// result:    [termux-prep, prerequisites, cli-tools, repo-cloning]
/// ```
pub fn order(canonical: &[String], ids: &BTreeSet<String>) -> Vec<String> {
    let positions: HashMap<&str, usize> = canonical
        .iter()
        .enumerate()
        .map(|(position, id)| (id.as_str(), position))
        .collect();

    // BTreeSet iteration is lexicographic and sort_by_key is stable, so unknown
    // ids keep that order after every known id.
    let mut sorted: Vec<String> = ids.iter().cloned().collect();
    sorted.sort_by_key(|id| positions.get(id.as_str()).copied().unwrap_or(usize::MAX));
    sorted
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use crate::resolver::close_over;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    fn canonical(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_order_builtin_subset() {
        let registry = Registry::builtin().expect("builtin registry");
        let sorted = order(
            registry.canonical_order(),
            &set(&["repo-cloning", "termux-prep", "cli-tools", "prerequisites"]),
        );
        assert_eq!(
            sorted,
            vec!["termux-prep", "prerequisites", "cli-tools", "repo-cloning"]
        );
    }

    #[test]
    fn test_unknown_ids_sort_last_lexicographically() {
        let sorted = order(&canonical(&["b", "a"]), &set(&["zeta", "a", "alpha", "b"]));
        assert_eq!(sorted, vec!["b", "a", "alpha", "zeta"]);
    }

    #[test]
    fn test_order_is_deterministic() {
        let canonical = canonical(&["c", "b", "a", "d"]);
        let ids = set(&["a", "d", "c"]);
        assert_eq!(order(&canonical, &ids), order(&canonical, &ids.clone()));
    }

    #[test]
    fn test_empty_input() {
        assert!(order(&canonical(&["a"]), &BTreeSet::new()).is_empty());
    }

    /// For every subset of the built-in registry, the sorted closure respects both the
    /// canonical order and every dependency edge.
    #[test]
    fn test_plan_properties_over_all_subsets() {
        let registry = Registry::builtin().expect("builtin registry");
        let all = registry.canonical_order().to_vec();
        let position = |id: &str| all.iter().position(|c| c == id).expect("known id");

        for mask in 0u32..(1 << all.len()) {
            let selection: BTreeSet<String> = all
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, id)| id.clone())
                .collect();

            let closure = close_over(&registry, &selection).expect("closure").closure;
            let plan = order(registry.canonical_order(), &closure);

            for pair in plan.windows(2) {
                assert!(position(pair[0].as_str()) < position(pair[1].as_str()));
            }

            for (index, id) in plan.iter().enumerate() {
                for dep in &registry.find(id).expect("known id").dependencies {
                    let dep_index = plan.iter().position(|p| p == dep).expect("dep in plan");
                    assert!(dep_index < index, "{dep} must run before {id}");
                }
            }
        }
    }
}
