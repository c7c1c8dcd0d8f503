//! Shell access for the CLI-suite installer

use std::process::{Command, Stdio};

use crate::error::{Result, action as action_error};

/// Proot distribution used as the fallback environment
pub const PROOT_DISTRO: &str = "ubuntu";

/// Runs install commands and probes for installed binaries
pub trait CommandRunner {
    /// Run a shell command with inherited stdio; `Ok(false)` on a non-zero exit
    fn run(&mut self, command: &str) -> Result<bool>;

    /// Whether `binary` is on the native PATH
    fn exists(&mut self, binary: &str) -> bool;

    /// Whether `binary` is on the PATH inside the proot container
    fn exists_in_proot(&mut self, binary: &str) -> bool;
}

/// Wrap a command so it runs inside the proot container
pub fn in_proot(command: &str) -> String {
    format!("proot-distro login {PROOT_DISTRO} -- {command}")
}

/// Runner backed by the host system
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &str) -> Result<bool> {
        tracing::debug!(%command, "running");
        let status = Command::new("sh")
            .arg("-c")
            .arg(command)
            .status()
            .map_err(|e| action_error::io_error(format!("Failed to run '{command}': {e}")))?;
        Ok(status.success())
    }

    fn exists(&mut self, binary: &str) -> bool {
        which::which(binary).is_ok()
    }

    fn exists_in_proot(&mut self, binary: &str) -> bool {
        Command::new("proot-distro")
            .args(["login", PROOT_DISTRO, "--", "sh", "-c"])
            .arg(format!("command -v {binary}"))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|status| status.success())
    }
}
