//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::registry::Registry;

/// Load the registry from `path`, or the built-in catalogue when no file is given
pub fn load_registry(path: Option<&Path>) -> Result<Registry> {
    match path {
        Some(path) => Registry::from_file(path),
        None => Registry::builtin(),
    }
}

/// Resolve the scripts directory
///
/// An explicit path (flag or `TERMUX_SETUP_SCRIPTS_DIR`) wins. Otherwise a `scripts/`
/// directory beside the executable, then `~/.termux-setup/scripts`.
pub fn resolve_scripts_dir(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }

    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("scripts")))
        .filter(|dir| dir.is_dir());

    beside_exe
        .or_else(|| dirs::home_dir().map(|home| home.join(".termux-setup").join("scripts")))
        .unwrap_or_else(|| PathBuf::from("scripts"))
}
