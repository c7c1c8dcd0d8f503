//! Registry file (YAML) loading
//!
//! A registry file replaces the built-in catalogue:
//!
//! ```yaml
//! components:
//!   - id: termux-prep
//!     name: Termux Preparation
//!     script: prepare-termux.sh
//!   - id: prerequisites
//!     name: Prerequisites
//!     script: install-prereqs.sh
//!     dependencies: [termux-prep]
//! order: [termux-prep, prerequisites]   # optional, defaults to declaration order
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Component, Registry};
use crate::error::{Result, config};

/// On-disk shape of a registry file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryFile {
    #[serde(default)]
    pub components: Vec<Component>,

    /// Canonical execution order; declaration order when omitted
    #[serde(default)]
    pub order: Option<Vec<String>>,
}

impl RegistryFile {
    /// Parse registry YAML from a string
    ///
    /// # Errors
    ///
    /// Returns `SetupError::ConfigParseFailed` if the YAML is malformed.
    pub fn from_yaml(content: &str, origin: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| config::parse_failed(origin, e.to_string()))
    }

    /// Validate into a registry
    ///
    /// # Errors
    ///
    /// Returns any registry integrity error.
    pub fn into_registry(self) -> Result<Registry> {
        match self.order {
            Some(order) => Registry::new(self.components, order),
            None => Registry::from_declaration_order(self.components),
        }
    }
}

impl Registry {
    /// Load and validate a registry file
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file cannot be read or parsed, or if the
    /// components fail any integrity check.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| config::read_failed(path.display().to_string(), e.to_string()))?;

        tracing::debug!(path = %path.display(), "loading registry file");

        RegistryFile::from_yaml(&content, &path.display().to_string())?.into_registry()
    }
}
