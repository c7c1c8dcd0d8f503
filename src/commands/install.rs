//! Install command implementation

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::cli::InstallArgs;
use crate::error::{Result, run as run_error};
use crate::executor::{ExecutionMode, Executor, ScriptAction};
use crate::orchestrator::{Orchestrator, RunReport, RunSummary};
use crate::prompt::TerminalPrompter;
use crate::registry::Registry;
use crate::ui::display;

use super::helpers;

/// Run the install command
pub fn run(
    registry_path: Option<PathBuf>,
    scripts_dir: Option<PathBuf>,
    verbose: bool,
    args: InstallArgs,
) -> Result<()> {
    let registry = helpers::load_registry(registry_path.as_deref())?;
    let scripts_dir = helpers::resolve_scripts_dir(scripts_dir);

    let mode = ExecutionMode {
        preview: args.dry_run,
        verbose,
        assume_yes: args.yes,
    };
    tracing::debug!(scripts_dir = %scripts_dir.display(), ?mode, "install");

    display::banner(&mode);

    let preset = preset_selection(&registry, &args);
    let executor = Executor::new(ScriptAction::new(scripts_dir), mode);
    let prompter = TerminalPrompter::new(args.on_failure.decision());

    match Orchestrator::new(&registry, executor, prompter).run(preset)? {
        RunReport::NothingSelected | RunReport::Cancelled => Ok(()),
        RunReport::Finished(summary) => exit_status(&summary),
    }
}

/// Selection given on the command line; `None` means ask interactively
fn preset_selection(registry: &Registry, args: &InstallArgs) -> Option<BTreeSet<String>> {
    if args.all {
        return Some(
            registry
                .components()
                .iter()
                .filter(|c| !c.standalone)
                .map(|c| c.id.clone())
                .collect(),
        );
    }
    if args.components.is_empty() {
        return None;
    }
    Some(args.components.iter().cloned().collect())
}

/// Turn the run summary into the command result
fn exit_status(summary: &RunSummary) -> Result<()> {
    if let Some(run) = summary.aborted_at() {
        return Err(run_error::aborted(&run.name));
    }
    let failed = summary.failed_names();
    if !failed.is_empty() {
        return Err(run_error::components_failed(failed));
    }
    Ok(())
}
