//! List command implementation

use std::path::PathBuf;

use crate::cli::ListArgs;
use crate::error::Result;
use crate::ui::display;

use super::helpers;

/// Run the list command
pub fn run(registry_path: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let registry = helpers::load_registry(registry_path.as_deref())?;
    display::component_list(&registry, args.detailed);
    Ok(())
}
