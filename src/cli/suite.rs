use clap::Parser;
use std::path::PathBuf;

/// Arguments for the cli-suite command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install the CLI tools:\n    termux-setup cli-suite\n\n\
                  Show the install commands only:\n    termux-setup cli-suite --dry-run\n\n\
                  Write results to a custom file:\n    termux-setup cli-suite --results ~/cli-results.json")]
pub struct SuiteArgs {
    /// Show what would be installed without actually installing
    #[arg(long)]
    pub dry_run: bool,

    /// Results file (defaults to .cli-install-results.json next to the scripts directory)
    #[arg(long, value_name = "FILE")]
    pub results: Option<PathBuf>,
}
