//! CLI-suite command implementation

use std::path::PathBuf;

use crate::cli::SuiteArgs;
use crate::error::{Result, run as run_error};
use crate::progress::{ProgressReporter, SilentProgress, SpinnerProgress};
use crate::suite::{self, SuiteInstaller, SystemRunner, TOOLS, results};

use super::helpers;

const SHIM_SCRIPT: &str = "generate-shims.js";

/// Run the cli-suite command
pub fn run(scripts_dir: Option<PathBuf>, verbose: bool, args: SuiteArgs) -> Result<()> {
    let scripts_dir = helpers::resolve_scripts_dir(scripts_dir);
    let results_path = args
        .results
        .unwrap_or_else(|| results::default_path(&scripts_dir));

    let progress: Box<dyn ProgressReporter> = if args.dry_run || verbose {
        Box::new(SilentProgress)
    } else {
        Box::new(SpinnerProgress::new())
    };

    let mut installer = SuiteInstaller::new(SystemRunner, progress, args.dry_run)
        .with_shim_script(Some(scripts_dir.join(SHIM_SCRIPT)));
    let results = installer.install_all(TOOLS)?;

    if args.dry_run {
        suite::print_summary(&results, None);
        return Ok(());
    }

    results.save(&results_path)?;
    suite::print_summary(&results, Some(&results_path));

    if results.has_failures() {
        return Err(run_error::tools_failed(results.failed));
    }
    Ok(())
}
