//! Display functions for components, plans and run summaries

use std::collections::BTreeSet;

use console::Style;

use super::{failure, heading, notice, rule, success};
use crate::error::SetupError;
use crate::executor::ExecutionMode;
use crate::orchestrator::{ComponentState, RunOutcome, RunSummary};
use crate::registry::{Component, Registry};
use crate::resolver::ExecutionPlan;

/// Opening banner, with the active run modes
pub fn banner(mode: &ExecutionMode) {
    println!("╔{}╗", "═".repeat(62));
    println!("║{:^62}║", "Termux Dev Tools - Component Installer");
    println!("╚{}╝", "═".repeat(62));

    if mode.preview {
        println!("{}", notice().apply_to("DRY-RUN MODE: No changes will be made"));
    }
    if mode.verbose {
        println!("{}", heading().apply_to("VERBOSE MODE: Detailed logging enabled"));
    }
    println!();
}

pub fn nothing_selected() {
    println!("{}", notice().apply_to("No components selected."));
}

pub fn cancelled() {
    println!("{}", notice().apply_to("Installation cancelled."));
}

/// Disclose dependencies that were added to the selection
pub fn auto_added(registry: &Registry, ids: &BTreeSet<String>) {
    if ids.is_empty() {
        return;
    }

    println!("\n{}", notice().apply_to("Dependencies auto-selected:"));
    for id in ids {
        println!("   - {}", display_name(registry, id));
    }
}

/// Numbered execution plan
pub fn plan(registry: &Registry, plan: &ExecutionPlan) {
    println!("\n{}", heading().apply_to("Installation Plan:"));
    for (position, id) in plan.steps.iter().enumerate() {
        match registry.get(id) {
            Some(component) if !component.estimated_time.is_empty() => {
                println!(
                    "{}. {} {}",
                    position + 1,
                    component.name,
                    Style::new().dim().apply_to(format!("({})", component.estimated_time))
                );
            }
            _ => println!("{}. {}", position + 1, display_name(registry, id)),
        }
    }
}

pub fn execution_started() {
    println!("\n{}", rule());
    println!("Starting installation...");
    println!("{}", rule());
}

pub fn verbose_command(command: &str) {
    println!("{}", heading().apply_to(format!("[VERBOSE] Executing: {command}")));
}

pub fn preview_command(command: &str) {
    println!("{}", notice().apply_to(format!("[DRY-RUN] Would execute: {command}")));
}

pub fn component_started(component: &Component) {
    println!("\n{}", success().bold().apply_to(format!("➤ {}", component.name)));
}

pub fn component_succeeded(component: &Component) {
    println!("{}", success().apply_to(format!("✓ {} completed", component.name)));
}

pub fn component_failed(component: &Component, diagnostic: &str) {
    println!(
        "{} {}",
        failure().apply_to(format!("✗ {} failed:", component.name)),
        diagnostic
    );
}

/// An executor error, shown apart from ordinary action failures
pub fn environment_error(component: &Component, error: &SetupError) {
    println!(
        "{} {}",
        failure()
            .bold()
            .apply_to(format!("✗ {} could not run (environment error):", component.name)),
        error
    );
}

pub fn retrying(component: &Component, attempt: u32) {
    println!(
        "{}",
        notice().apply_to(format!("Retrying {} (attempt {attempt})...", component.name))
    );
}

pub fn aborted(component: &Component) {
    println!(
        "{}",
        failure().apply_to(format!("Installation aborted at {}.", component.name))
    );
}

/// The recovery prompt failed, so the run stops here
pub fn recovery_failed(component: &Component, reason: &str) {
    println!(
        "{}",
        failure().apply_to(format!(
            "Installation aborted at {}: no recovery decision ({reason}).",
            component.name
        ))
    );
}

/// Final run summary
pub fn summary(summary: &RunSummary) {
    println!("\n{}", rule());
    println!("Installation Summary");
    println!("{}", rule());

    if summary.preview {
        println!("{}", notice().apply_to(format!("• Previewed: {}", summary.previewed())));
    } else {
        println!("{}", success().apply_to(format!("✓ Successful: {}", summary.succeeded())));
    }
    if summary.failed() > 0 {
        println!("{}", failure().apply_to(format!("✗ Failed: {}", summary.failed())));
    }
    if summary.skipped() > 0 {
        println!("{}", notice().apply_to(format!("↷ Skipped: {}", summary.skipped())));
    }

    let retried: Vec<String> = summary
        .runs
        .iter()
        .filter(|run| run.attempts() > 1)
        .map(|run| format!("{} ({} attempts)", run.name, run.attempts()))
        .collect();
    if !retried.is_empty() {
        println!("  Retried: {}", retried.join(", "));
    }

    let failures = summary.failures();
    if !failures.is_empty() {
        println!("\n{}", Style::new().bold().apply_to("Failures:"));
        for (run, reason) in failures {
            let marker = match run.state() {
                ComponentState::Skipped(_) => " (skipped)",
                _ => "",
            };
            println!("  - {}{marker}: {reason}", run.name);
        }
    }

    let not_attempted = summary.not_attempted();
    if !not_attempted.is_empty() {
        println!("\n{}", Style::new().bold().apply_to("Not attempted:"));
        for run in not_attempted {
            println!("  - {}", run.name);
        }
    }

    if summary.preview {
        println!(
            "\n{}",
            notice().apply_to("DRY-RUN MODE: No actual changes were made.")
        );
    }

    match summary.outcome {
        RunOutcome::Aborted => match &summary.interrupted {
            Some(reason) => println!(
                "\n{}",
                failure().apply_to(format!("Installation aborted: recovery prompt failed ({reason})."))
            ),
            None => println!("\n{}", failure().apply_to("Installation aborted.")),
        },
        RunOutcome::Completed if summary.is_success() => println!("\nInstallation complete!"),
        RunOutcome::Completed => {
            println!("\n{}", notice().apply_to("Installation finished with failures."));
        }
    }
}

/// Registry listing for `list`
pub fn component_list(registry: &Registry, detailed: bool) {
    println!("{}", heading().apply_to("Available components:"));

    for id in registry.canonical_order() {
        let Some(component) = registry.get(id) else {
            continue;
        };

        let mut flags = Vec::new();
        if component.required {
            flags.push("required");
        }
        if component.standalone {
            flags.push("standalone");
        }
        if component.auto_select {
            flags.push("auto-select");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };

        println!(
            "  {} {}{}",
            Style::new().bold().yellow().apply_to(&component.id),
            component.name,
            Style::new().dim().apply_to(flags)
        );

        if !detailed {
            continue;
        }

        if !component.description.is_empty() {
            println!("    {} {}", Style::new().bold().apply_to("Description:"), component.description);
        }
        if !component.estimated_time.is_empty() {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Estimated time:"),
                component.estimated_time
            );
        }
        println!("    {} {}", Style::new().bold().apply_to("Script:"), component.script);
        if component.dependencies.is_empty() {
            println!(
                "    {}: {}",
                Style::new().bold().apply_to("Dependencies"),
                Style::new().dim().apply_to("None")
            );
        } else {
            println!("    {}", Style::new().bold().apply_to("Dependencies:"));
            for dep in &component.dependencies {
                println!("      - {}", Style::new().cyan().apply_to(dep));
            }
        }
    }
}

fn display_name(registry: &Registry, id: &str) -> String {
    registry
        .get(id)
        .map_or_else(|| id.to_string(), |c| c.name.clone())
}
