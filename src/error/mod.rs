//! Error types and handling for termux-setup
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`registry`]: Component registry integrity errors
//! - [`config`]: Registry file errors
//! - [`selection`]: Usage errors around selection and prompting
//! - [`action`]: Environment errors raised while locating or spawning actions
//! - [`run`]: Run outcomes that end the process with a non-zero status

pub mod action;
pub mod config;
pub mod registry;
pub mod run;
pub mod selection;

#[cfg(test)]
mod tests;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for termux-setup operations
#[derive(Error, Diagnostic, Debug)]
pub enum SetupError {
    // Registry errors
    #[error("Component '{id}' is defined more than once")]
    #[diagnostic(
        code(termux_setup::registry::duplicate),
        help("Every component id must be unique within the registry")
    )]
    DuplicateComponent { id: String },

    #[error("Dependency '{name}' (from component '{dependent}') not found")]
    #[diagnostic(
        code(termux_setup::registry::dependency_not_found),
        help("Declare the dependency as a component or remove it from the dependency list")
    )]
    DependencyNotFound { name: String, dependent: String },

    #[error("Circular dependency detected: {chain}")]
    #[diagnostic(
        code(termux_setup::registry::circular),
        help("Remove the circular dependency from the component definitions")
    )]
    CircularDependency { chain: String },

    #[error("Invalid execution order: {message}")]
    #[diagnostic(
        code(termux_setup::registry::invalid_order),
        help("The execution order must list every component once, after all of its dependencies")
    )]
    InvalidExecutionOrder { message: String },

    #[error("Standalone component '{id}' {message}")]
    #[diagnostic(code(termux_setup::registry::standalone))]
    StandaloneViolation { id: String, message: String },

    // Configuration file errors
    #[error("Failed to read registry file: {path}")]
    #[diagnostic(code(termux_setup::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse registry file: {path}: {reason}")]
    #[diagnostic(code(termux_setup::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // Selection errors
    #[error("Unknown component: {id}")]
    #[diagnostic(
        code(termux_setup::selection::unknown),
        help("Run 'termux-setup list' to see the available components")
    )]
    UnknownComponent { id: String },

    #[error("Interactive prompts are not supported in this environment")]
    #[diagnostic(
        code(termux_setup::selection::not_interactive),
        help(
            "Pass component ids on the command line together with --yes and --on-failure to run without a terminal"
        )
    )]
    NotInteractive,

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(termux_setup::selection::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    #[error("Prompt failed: {message}")]
    #[diagnostic(code(termux_setup::selection::prompt_failed))]
    PromptFailed { message: String },

    // Action errors
    #[error("Action for component '{component}' not found at {path}")]
    #[diagnostic(
        code(termux_setup::action::not_found),
        help("Check --scripts-dir (or TERMUX_SETUP_SCRIPTS_DIR) points at the installer scripts")
    )]
    ActionNotFound { component: String, path: String },

    #[error("Failed to start '{command}' for component '{component}': {reason}")]
    #[diagnostic(
        code(termux_setup::action::spawn_failed),
        help("Make sure the interpreter (bash or node) is installed and on PATH")
    )]
    ActionSpawnFailed {
        component: String,
        command: String,
        reason: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(termux_setup::fs::io_error))]
    IoError { message: String },

    // Run outcomes
    #[error("Installation aborted at '{component}'")]
    #[diagnostic(code(termux_setup::run::aborted))]
    Aborted { component: String },

    #[error("{} component(s) failed: {}", .names.len(), .names.join(", "))]
    #[diagnostic(
        code(termux_setup::run::components_failed),
        help("Re-run 'termux-setup install' with the failed components to try again")
    )]
    ComponentsFailed { names: Vec<String> },

    #[error("{} tool(s) failed to install: {}", .names.len(), .names.join(", "))]
    #[diagnostic(code(termux_setup::run::tools_failed))]
    ToolsFailed { names: Vec<String> },
}

impl From<std::io::Error> for SetupError {
    fn from(err: std::io::Error) -> Self {
        SetupError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SetupError {
    fn from(err: serde_yaml::Error) -> Self {
        SetupError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SetupError {
    fn from(err: serde_json::Error) -> Self {
        SetupError::IoError {
            message: format!("JSON serialization failed: {err}"),
        }
    }
}

impl From<inquire::InquireError> for SetupError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::NotTTY => SetupError::NotInteractive,
            other => selection::prompt_failed(other.to_string()),
        }
    }
}

impl SetupError {
    /// Whether the error means a misconfigured registry rather than a runtime condition
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SetupError::DuplicateComponent { .. }
                | SetupError::DependencyNotFound { .. }
                | SetupError::CircularDependency { .. }
                | SetupError::InvalidExecutionOrder { .. }
                | SetupError::StandaloneViolation { .. }
                | SetupError::ConfigReadFailed { .. }
                | SetupError::ConfigParseFailed { .. }
        )
    }

    /// Whether the error comes from the host environment rather than from the action itself
    pub fn is_environment(&self) -> bool {
        matches!(
            self,
            SetupError::ActionNotFound { .. }
                | SetupError::ActionSpawnFailed { .. }
                | SetupError::IoError { .. }
        )
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SetupError>;
