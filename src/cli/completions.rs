use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    termux-setup completions --shell bash > $PREFIX/share/bash-completion/completions/termux-setup\n\n\
                  Generate zsh completions:\n    termux-setup completions --shell zsh > ~/.zfunc/_termux-setup\n\n\
                  Generate fish completions:\n    termux-setup completions --shell fish > ~/.config/fish/completions/termux-setup.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long, short = 's')]
    pub shell: String,
}
