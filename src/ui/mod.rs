//! Terminal presentation
//!
//! Everything the user sees on stdout goes through [`display`]; diagnostics and
//! log events go to stderr through `tracing`.

pub mod display;

use console::Style;

/// Horizontal rule used around the run phases
pub(crate) fn rule() -> String {
    "=".repeat(60)
}

pub(crate) fn heading() -> Style {
    Style::new().bold().blue()
}

pub(crate) fn success() -> Style {
    Style::new().green()
}

pub(crate) fn failure() -> Style {
    Style::new().red()
}

pub(crate) fn notice() -> Style {
    Style::new().yellow()
}
