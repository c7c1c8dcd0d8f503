use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all components:\n    termux-setup list\n\n\
                  Show descriptions, scripts and dependencies:\n    termux-setup list --detailed\n\n\
                  List components from a custom registry:\n    termux-setup list --registry ./registry.yaml")]
pub struct ListArgs {
    /// Show detailed output
    #[arg(long)]
    pub detailed: bool,
}
