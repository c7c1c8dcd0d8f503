//! Persisted CLI-suite results
//!
//! ```json
//! {
//!   "native": ["claude-code"],
//!   "proot": ["codex"],
//!   "curl": ["droid"],
//!   "failed": []
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, action as action_error};

pub const RESULTS_FILE_NAME: &str = ".cli-install-results.json";

/// Where a tool ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Native,
    Proot,
    Curl,
}

/// Tool names grouped by install outcome
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallResults {
    pub native: Vec<String>,
    pub proot: Vec<String>,
    pub curl: Vec<String>,
    pub failed: Vec<String>,
}

impl InstallResults {
    pub fn record(&mut self, name: &str, placement: Option<Placement>) {
        let list = match placement {
            Some(Placement::Native) => &mut self.native,
            Some(Placement::Proot) => &mut self.proot,
            Some(Placement::Curl) => &mut self.curl,
            None => &mut self.failed,
        };
        list.push(name.to_string());
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Write the results as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns `SetupError::IoError` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| {
            action_error::io_error(format!("Failed to write {}: {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "saved cli-suite results");
        Ok(())
    }
}

/// Default artifact location: next to the scripts directory
pub fn default_path(scripts_dir: &Path) -> PathBuf {
    scripts_dir
        .parent()
        .unwrap_or(scripts_dir)
        .join(RESULTS_FILE_NAME)
}
