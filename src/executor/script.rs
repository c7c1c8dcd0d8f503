//! Script-backed component actions
//!
//! Each component names a script inside the scripts directory. JavaScript files
//! run with `node`, everything else with `bash`. The run flags are passed on so
//! the script can honour them too:
//!
//! ```text
//! bash "<scripts_dir>/install-prereqs.sh" --verbose --yes
//! ```

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use super::{Action, ActionOutcome, ExecutionMode};
use crate::error::{Result, action as action_error};
use crate::registry::Component;

/// Runs component scripts from a directory
#[derive(Debug, Clone)]
pub struct ScriptAction {
    scripts_dir: PathBuf,
}

impl ScriptAction {
    pub fn new(scripts_dir: impl Into<PathBuf>) -> Self {
        Self {
            scripts_dir: scripts_dir.into(),
        }
    }

    /// Location of the component's script
    pub fn script_path(&self, component: &Component) -> PathBuf {
        self.scripts_dir.join(&component.script)
    }

    fn interpreter(script: &str) -> &'static str {
        if Path::new(script)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("js"))
        {
            "node"
        } else {
            "bash"
        }
    }

    fn pass_through_flags(mode: &ExecutionMode) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if mode.preview {
            flags.push("--dry-run");
        }
        if mode.verbose {
            flags.push("--verbose");
        }
        if mode.assume_yes {
            flags.push("--yes");
        }
        flags
    }
}

impl Action for ScriptAction {
    fn describe(&self, component: &Component, mode: &ExecutionMode) -> String {
        let mut command = format!(
            "{} \"{}\"",
            Self::interpreter(&component.script),
            self.script_path(component).display()
        );
        for flag in Self::pass_through_flags(mode) {
            command.push(' ');
            command.push_str(flag);
        }
        command
    }

    fn run(&mut self, component: &Component, mode: &ExecutionMode) -> Result<ActionOutcome> {
        let path = self.script_path(component);
        if !path.is_file() {
            return Err(action_error::not_found(
                &component.id,
                path.display().to_string(),
            ));
        }

        let interpreter = Self::interpreter(&component.script);
        let status = Command::new(interpreter)
            .arg(&path)
            .args(Self::pass_through_flags(mode))
            .current_dir(&self.scripts_dir)
            .status()
            .map_err(|e| {
                action_error::spawn_failed(&component.id, self.describe(component, mode), e.to_string())
            })?;

        if status.success() {
            Ok(ActionOutcome::Success)
        } else {
            Ok(ActionOutcome::Failure {
                diagnostic: describe_status(status),
            })
        }
    }
}

/// Short diagnostic for a failed exit status
fn describe_status(status: ExitStatus) -> String {
    if let Some(code) = status.code() {
        return format!("exited with status {code}");
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return format!("terminated by signal {signal}");
        }
    }

    "terminated abnormally".to_string()
}
