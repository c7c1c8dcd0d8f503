//! termux-setup - component installer for Termux development environments
//!
//! Selects installable components, expands the selection to its dependency closure,
//! orders it and runs each component's script in turn, with interactive recovery
//! when a component fails.

use clap::Parser;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod executor;
mod orchestrator;
mod progress;
mod prompt;
mod registry;
mod resolver;
mod suite;
mod ui;

use cli::{Cli, Commands};

/// Environment variable holding a `tracing` filter directive
const LOG_ENV: &str = "TERMUX_SETUP_LOG";

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Install(args) => {
            commands::install::run(cli.registry, cli.scripts_dir, cli.verbose, args)
        }
        Commands::List(args) => commands::list::run(cli.registry, args),
        Commands::CliSuite(args) => commands::suite::run(cli.scripts_dir, cli.verbose, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, configuration = e.is_configuration(), "command failed");
        eprintln!("Error: {}", e);
        if let Some(help) = miette::Diagnostic::help(&e) {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
