use clap::{Parser, ValueEnum};

use crate::prompt::Decision;

/// What to do when a component fails
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Ask for retry, skip or abort (needs a terminal)
    #[default]
    Ask,
    /// Skip the failed component and continue
    Skip,
    /// Stop the installation
    Abort,
}

impl FailurePolicy {
    /// The decision to apply without prompting, if any
    pub fn decision(self) -> Option<Decision> {
        match self {
            FailurePolicy::Ask => None,
            FailurePolicy::Skip => Some(Decision::Skip),
            FailurePolicy::Abort => Some(Decision::Abort),
        }
    }
}

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Pick components interactively:\n    termux-setup install\n\n\
                   Install components and their dependencies:\n    termux-setup install cli-tools github-setup\n\n\
                   Preview the plan:\n    termux-setup install repo-cloning --dry-run\n\n\
                   Unattended install of everything:\n    termux-setup install --all --yes --on-failure skip")]
pub struct InstallArgs {
    /// Component ids to install. If not provided, an interactive menu is shown
    #[arg(value_name = "ID", conflicts_with = "all")]
    pub components: Vec<String>,

    /// Select every non-standalone component
    #[arg(long)]
    pub all: bool,

    /// Show what would be installed without actually installing
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Recovery decision for failed components
    #[arg(long, value_enum, default_value_t = FailurePolicy::Ask)]
    pub on_failure: FailurePolicy,
}
