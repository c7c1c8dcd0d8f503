//! Interactive prompts using inquire

use std::collections::BTreeSet;

use inquire::{Confirm, MultiSelect, Select};

use super::{Decision, Prompter};
use crate::error::{Result, selection};
use crate::registry::Component;

/// Prompts on the controlling terminal
///
/// A `failure_policy` answers every recovery question without asking, which lets
/// `--on-failure skip|abort` runs work without a terminal.
#[derive(Debug, Clone, Default)]
pub struct TerminalPrompter {
    failure_policy: Option<Decision>,
}

impl TerminalPrompter {
    pub fn new(failure_policy: Option<Decision>) -> Self {
        Self { failure_policy }
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, candidates: &[Component]) -> Result<BTreeSet<String>> {
        if candidates.is_empty() {
            return Ok(BTreeSet::new());
        }
        require_terminal()?;

        // Labels stay single-line; multi-line items break inquire's list layout
        let items: Vec<String> = candidates
            .iter()
            .map(|c| {
                if c.required {
                    format!("{} [required]", c.label())
                } else {
                    c.label()
                }
            })
            .collect();
        let defaults: Vec<usize> = candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| c.required)
            .map(|(i, _)| i)
            .collect();

        println!();

        let Some(chosen) = MultiSelect::new("Select components to install", items)
            .with_default(&defaults)
            .with_page_size(15)
            .with_help_message("  ↑↓ navigate  space select  enter confirm  type to filter  esc cancel")
            .raw_prompt_skippable()?
        else {
            return Ok(BTreeSet::new());
        };

        Ok(chosen
            .into_iter()
            .filter_map(|option| candidates.get(option.index))
            .map(|c| c.id.clone())
            .collect())
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        require_terminal()?;
        Ok(Confirm::new(prompt)
            .with_default(true)
            .with_help_message("Press Enter to confirm, or 'n' to cancel")
            .prompt()?)
    }

    fn choose(&mut self, prompt: &str, options: &[Decision]) -> Result<Decision> {
        if let Some(decision) = self.failure_policy.filter(|d| options.contains(d)) {
            println!("{prompt} {decision}");
            return Ok(decision);
        }

        Ok(Select::new(prompt, options.to_vec()).prompt()?)
    }

    fn ensure_can_choose(&self) -> Result<()> {
        if self.failure_policy.is_some() {
            return Ok(());
        }
        require_terminal()
    }
}

fn require_terminal() -> Result<()> {
    if console::Term::stdout().is_term() {
        Ok(())
    } else {
        Err(selection::not_interactive())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_policy_answers_without_terminal() {
        let mut prompter = TerminalPrompter::new(Some(Decision::Skip));
        let decision = prompter
            .choose("A failed. What would you like to do?", &Decision::ALL)
            .expect("policy answers");
        assert_eq!(decision, Decision::Skip);
    }

    #[test]
    fn test_failure_policy_needs_no_terminal() {
        let prompter = TerminalPrompter::new(Some(Decision::Abort));
        assert!(prompter.ensure_can_choose().is_ok());
    }

    #[test]
    fn test_empty_candidates_select_nothing() {
        let mut prompter = TerminalPrompter::default();
        assert!(prompter.select(&[]).expect("no prompt needed").is_empty());
    }
}
