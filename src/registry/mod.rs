//! Component registry
//!
//! The registry is the read-only catalogue of installable components. It is built once
//! at startup, either from the built-in catalogue or from a YAML registry file, and every
//! integrity check runs during construction:
//!
//! - component ids are unique
//! - every dependency refers to a known component
//! - nothing depends on a standalone component
//! - the dependency graph is acyclic
//! - the canonical execution order is a topological order of the graph
//!
//! A `Registry` value therefore never exists in a partially valid state.

mod catalog;
mod file;
pub mod validation;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SetupError, registry as registry_error, selection};

/// An independently installable unit with declared prerequisites
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Unique identity used on the command line and in dependency lists
    pub id: String,

    /// Human-readable name
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub estimated_time: String,

    /// Action file name, resolved against the scripts directory
    pub script: String,

    /// Components that must run first, in declaration order
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Always part of the selection, cannot be deselected
    #[serde(default)]
    pub required: bool,

    /// Orthogonal operation (e.g. full removal) with no dependencies or dependents
    #[serde(default)]
    pub standalone: bool,

    /// Usually pulled in as a dependency rather than chosen directly
    #[serde(default)]
    pub auto_select: bool,
}

impl Component {
    /// Single-line label used in selection menus and plans
    pub fn label(&self) -> String {
        let mut label = self.name.clone();
        if !self.description.is_empty() {
            label.push_str(" - ");
            label.push_str(&self.description);
        }
        if !self.estimated_time.is_empty() {
            label.push_str(&format!(" ({})", self.estimated_time));
        }
        label
    }
}

/// Validated, indexed catalogue of components
#[derive(Debug, Clone)]
pub struct Registry {
    components: Vec<Component>,
    index: HashMap<String, usize>,
    order: Vec<String>,
}

impl Registry {
    /// Build a registry, running every integrity check
    ///
    /// # Errors
    ///
    /// Returns a configuration error if ids repeat, a dependency is unknown, something
    /// depends on a standalone component, the graph has a cycle, or `order` is not a
    /// topological order covering every component exactly once.
    pub fn new(components: Vec<Component>, order: Vec<String>) -> Result<Self> {
        let mut index = HashMap::with_capacity(components.len());
        for (position, component) in components.iter().enumerate() {
            if index.insert(component.id.clone(), position).is_some() {
                return Err(registry_error::duplicate(&component.id));
            }
        }

        validation::validate_references(&components, &index)?;
        validation::validate_standalone(&components)?;
        validation::check_acyclic(&components, &index)?;
        validation::validate_execution_order(&components, &index, &order)?;

        tracing::debug!(components = components.len(), "registry validated");

        Ok(Self {
            components,
            index,
            order,
        })
    }

    /// Build a registry whose canonical order is the declaration order
    ///
    /// # Errors
    ///
    /// Same as [`Registry::new`].
    pub fn from_declaration_order(components: Vec<Component>) -> Result<Self> {
        let order = components.iter().map(|c| c.id.clone()).collect();
        Self::new(components, order)
    }

    /// All components in declaration order
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Look up a component by id
    ///
    /// # Errors
    ///
    /// Returns `SetupError::UnknownComponent` if no component has this id.
    pub fn find(&self, id: &str) -> Result<&Component> {
        self.get(id)
            .ok_or_else(|| selection::unknown_component(id))
    }

    /// Look up a component by id, if present
    pub fn get(&self, id: &str) -> Option<&Component> {
        self.index.get(id).map(|&position| &self.components[position])
    }

    /// Whether a component with this id exists
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// The canonical execution order over all ids
    pub fn canonical_order(&self) -> &[String] {
        &self.order
    }

    /// Ids of components that are always part of the selection
    pub fn required_ids(&self) -> impl Iterator<Item = &str> {
        self.components
            .iter()
            .filter(|c| c.required)
            .map(|c| c.id.as_str())
    }

    /// Check that every id in `ids` is a known component
    ///
    /// # Errors
    ///
    /// Returns `SetupError::UnknownComponent` for the first unknown id.
    pub fn ensure_known<'a, I>(&self, ids: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a String>,
    {
        for id in ids {
            if !self.contains(id) {
                return Err(SetupError::UnknownComponent { id: id.clone() });
            }
        }
        Ok(())
    }
}
