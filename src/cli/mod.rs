//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - list: List command arguments
//! - suite: CLI-suite command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod list;
pub mod suite;

pub use completions::CompletionsArgs;
pub use install::{FailurePolicy, InstallArgs};
pub use list::ListArgs;
pub use suite::SuiteArgs;

/// termux-setup - component installer for Termux development environments
///
/// Select components, resolve their dependencies and run them in order.
#[derive(Parser, Debug)]
#[command(
    name = "termux-setup",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Dependency-aware component installer for Termux development environments",
    long_about = "termux-setup installs the pieces of a Termux development environment \
                  (prerequisites, proot container, CLI tools, GitHub setup, shell config). \
                  Selected components are expanded to include their dependencies and run \
                  in a fixed order, with retry, skip or abort on failure.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  termux-setup install                     \x1b[90m# Pick components interactively\x1b[0m\n   \
                  termux-setup install cli-tools --dry-run \x1b[90m# Show the plan without running it\x1b[0m\n   \
                  termux-setup install --all --yes         \x1b[90m# Install everything, no prompts\x1b[0m\n   \
                  termux-setup list --detailed             \x1b[90m# Show components and dependencies\x1b[0m\n   \
                  termux-setup cli-suite                   \x1b[90m# Install the developer CLI tools\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output (echo each command, debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Directory containing the component scripts
    #[arg(long, global = true, value_name = "DIR", env = "TERMUX_SETUP_SCRIPTS_DIR")]
    pub scripts_dir: Option<PathBuf>,

    /// Registry file to use instead of the built-in component catalogue
    #[arg(long, global = true, value_name = "FILE", env = "TERMUX_SETUP_REGISTRY")]
    pub registry: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install components and their dependencies
    Install(InstallArgs),

    /// List available components
    List(ListArgs),

    /// Install the developer CLI tool suite
    #[command(name = "cli-suite")]
    CliSuite(SuiteArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
