//! CLI-suite installer
//!
//! Installs a fixed list of developer CLIs. npm tools go through a fallback chain:
//!
//! 1. already on the native PATH: **native**
//! 2. already inside the proot container: **proot**
//! 3. `npm install -g` natively, then verify: **native**
//! 4. make sure npm exists in the container, install there, verify: **proot**
//! 5. otherwise: **failed**
//!
//! Tools that are not published on npm use their curl installer and are either
//! already present, installed and verified, or failed.

pub mod results;
pub mod runner;

use std::path::PathBuf;

pub use results::{InstallResults, Placement};
pub use runner::{CommandRunner, SystemRunner};

use runner::in_proot;

use crate::error::Result;
use crate::progress::ProgressReporter;
use crate::ui::{failure, notice, rule, success};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallMethod {
    Npm,
    Curl,
}

/// One CLI tool and how to install it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    pub name: &'static str,
    pub description: &'static str,
    pub install: &'static str,
    /// Binary whose presence proves the tool is installed
    pub binary: &'static str,
    pub method: InstallMethod,
    /// Environment variable the tool needs at runtime
    pub api_key_var: Option<&'static str>,
}

pub const TOOLS: &[Tool] = &[
    Tool {
        name: "claude-code",
        description: "Anthropic Claude Code - Agentic coding assistant",
        install: "npm install -g @anthropic-ai/claude-code",
        binary: "claude",
        method: InstallMethod::Npm,
        api_key_var: Some("ANTHROPIC_API_KEY"),
    },
    Tool {
        name: "gemini-cli",
        description: "Google Gemini CLI - Terminal AI assistant",
        install: "npm install -g @google/gemini-cli",
        binary: "gemini",
        method: InstallMethod::Npm,
        api_key_var: Some("GOOGLE_API_KEY"),
    },
    Tool {
        name: "codex",
        description: "OpenAI Codex - AI coding agent",
        install: "npm install -g @openai/codex",
        binary: "codex",
        method: InstallMethod::Npm,
        api_key_var: Some("OPENAI_API_KEY"),
    },
    Tool {
        name: "opencode",
        description: "OpenCode AI - Open source coding agent",
        install: "npm install -g opencode-ai",
        binary: "opencode",
        method: InstallMethod::Npm,
        api_key_var: Some("OPENAI_API_KEY"),
    },
    Tool {
        name: "droid",
        description: "Factory Droid - AI development agent",
        install: "curl -fsSL https://static.factory.ai/droid/install.sh | sh",
        binary: "droid",
        method: InstallMethod::Curl,
        api_key_var: Some("FACTORY_API_KEY"),
    },
];

const PROOT_NODE_SETUP: [&str; 2] = ["apt-get update", "apt-get install -y nodejs npm"];

/// Installs tools through a [`CommandRunner`]
pub struct SuiteInstaller<R> {
    runner: R,
    progress: Box<dyn ProgressReporter>,
    dry_run: bool,
    /// Shim generator run for every tool that lands in proot
    shim_script: Option<PathBuf>,
}

impl<R: CommandRunner> SuiteInstaller<R> {
    pub fn new(runner: R, progress: Box<dyn ProgressReporter>, dry_run: bool) -> Self {
        Self {
            runner,
            progress,
            dry_run,
            shim_script: None,
        }
    }

    pub fn with_shim_script(mut self, script: Option<PathBuf>) -> Self {
        self.shim_script = script;
        self
    }

    /// Install every tool in order
    ///
    /// # Errors
    ///
    /// Returns an environment error if the shell itself cannot be started. A tool that
    /// fails to install is recorded in [`InstallResults::failed`].
    pub fn install_all(&mut self, tools: &[Tool]) -> Result<InstallResults> {
        println!("{}", rule());
        println!("CLI Suite Installation");
        println!("{}", rule());

        let mut results = InstallResults::default();
        for (position, tool) in tools.iter().enumerate() {
            println!("\nProcessing: {}", tool.name);
            if let Some(var) = tool.api_key_var {
                println!(
                    "{}",
                    notice().apply_to(format!("⚠  This tool requires the {var} environment variable"))
                );
            }

            if self.dry_run {
                self.preview(tool);
                continue;
            }

            self.progress.checking(tool.name, position + 1, tools.len());
            let placement = match tool.method {
                InstallMethod::Npm => self.install_npm(tool)?,
                InstallMethod::Curl => self.install_curl(tool)?,
            };
            self.progress.clear();

            if placement.is_none() {
                println!(
                    "{}",
                    failure().apply_to(format!("✗ All installation methods failed for '{}'.", tool.name))
                );
            }
            tracing::info!(tool = tool.name, ?placement, "tool processed");
            results.record(tool.name, placement);
        }

        Ok(results)
    }

    fn preview(&self, tool: &Tool) {
        let line = |command: &str| {
            println!("{}", notice().apply_to(format!("[DRY-RUN] Would execute: {command}")));
        };
        line(tool.install);
        if tool.method == InstallMethod::Npm {
            line(&format!("{} (fallback)", in_proot(tool.install)));
        }
    }

    fn install_npm(&mut self, tool: &Tool) -> Result<Option<Placement>> {
        if self.runner.exists(tool.binary) {
            self.progress.clear();
            println!("{}", success().apply_to(format!("✓ '{}' is already installed natively.", tool.name)));
            return Ok(Some(Placement::Native));
        }
        if self.runner.exists_in_proot(tool.binary) {
            self.progress.clear();
            println!("{}", success().apply_to(format!("✓ '{}' is already installed in proot.", tool.name)));
            return Ok(Some(Placement::Proot));
        }
        self.progress.clear();

        println!("Attempting native installation of '{}'...", tool.name);
        if self.runner.run(tool.install)? && self.runner.exists(tool.binary) {
            println!("{}", success().apply_to(format!("✓ Installed '{}' natively.", tool.name)));
            return Ok(Some(Placement::Native));
        }

        println!(
            "{}",
            notice().apply_to(format!("Falling back to proot installation for '{}'...", tool.name))
        );
        if !self.ensure_proot_npm()? {
            println!("{}", failure().apply_to("✗ Failed to install npm in proot."));
            return Ok(None);
        }
        if self.runner.run(&in_proot(tool.install))? && self.runner.exists_in_proot(tool.binary) {
            println!("{}", success().apply_to(format!("✓ Installed '{}' in proot.", tool.name)));
            self.generate_shim(tool)?;
            return Ok(Some(Placement::Proot));
        }

        Ok(None)
    }

    fn install_curl(&mut self, tool: &Tool) -> Result<Option<Placement>> {
        let present = self.runner.exists(tool.binary);
        self.progress.clear();
        if present {
            println!("{}", success().apply_to(format!("✓ '{}' is already installed.", tool.name)));
            return Ok(Some(Placement::Curl));
        }

        println!("Installing '{}' via curl...", tool.name);
        if self.runner.run(tool.install)? && self.runner.exists(tool.binary) {
            println!("{}", success().apply_to(format!("✓ Installed '{}'.", tool.name)));
            return Ok(Some(Placement::Curl));
        }
        Ok(None)
    }

    fn ensure_proot_npm(&mut self) -> Result<bool> {
        if self.runner.exists_in_proot("npm") {
            return Ok(true);
        }
        println!("Installing Node.js and npm in the proot container...");
        for step in PROOT_NODE_SETUP {
            if !self.runner.run(&in_proot(step))? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn generate_shim(&mut self, tool: &Tool) -> Result<()> {
        let Some(script) = self.shim_script.as_ref().filter(|s| s.is_file()) else {
            return Ok(());
        };
        let command = format!("node \"{}\" \"{}\"", script.display(), tool.name);
        if !self.runner.run(&command)? {
            tracing::warn!(tool = tool.name, "shim generation failed");
        }
        Ok(())
    }

    #[cfg(test)]
    fn runner(&self) -> &R {
        &self.runner
    }
}

/// Print the per-placement totals
pub fn print_summary(results: &InstallResults, saved_to: Option<&std::path::Path>) {
    println!("\n{}", rule());
    println!("Installation Summary");
    println!("{}", rule());

    let groups = [
        ("Native installations", &results.native),
        ("Proot installations", &results.proot),
        ("Curl installations", &results.curl),
    ];
    for (label, names) in groups {
        println!("{label}: {}", names.len());
        if !names.is_empty() {
            println!("  - {}", names.join(", "));
        }
    }

    let failed = format!("Failed installations: {}", results.failed.len());
    if results.has_failures() {
        println!("{}", failure().apply_to(failed));
        println!("  - {}", results.failed.join(", "));
    } else {
        println!("{failed}");
    }

    if let Some(path) = saved_to {
        println!("\nResults saved to: {}", path.display());
    }
}
