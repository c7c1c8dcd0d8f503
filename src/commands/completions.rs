//! Shell completions command

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::{Result, selection};

/// Print completions for the requested shell to stdout
///
/// # Errors
///
/// Returns `SetupError::UnknownShell` for a shell clap_complete cannot target.
pub fn run(args: CompletionsArgs) -> Result<()> {
    let shell = parse_shell(&args.shell)?;
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "termux-setup", &mut std::io::stdout().lock());
    Ok(())
}

/// Shell names are matched case-insensitively; `pwsh` is accepted for PowerShell
fn parse_shell(name: &str) -> Result<Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "elvish" => Ok(Shell::Elvish),
        "fish" => Ok(Shell::Fish),
        "powershell" | "pwsh" => Ok(Shell::PowerShell),
        "zsh" => Ok(Shell::Zsh),
        _ => Err(selection::unknown_shell(name)),
    }
}
