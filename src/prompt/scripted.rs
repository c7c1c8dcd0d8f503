use std::collections::{BTreeSet, VecDeque};

use super::{Decision, Prompter};
use crate::error::{Result, selection};
use crate::registry::Component;

/// Replays canned answers and records what was asked
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    pub selection: BTreeSet<String>,
    pub confirm_answer: Option<bool>,
    pub decisions: VecDeque<Decision>,
    pub no_terminal: bool,

    pub select_calls: usize,
    pub confirm_calls: usize,
    pub choose_prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn selecting(ids: &[&str]) -> Self {
        Self {
            selection: ids.iter().map(|id| (*id).to_string()).collect(),
            confirm_answer: Some(true),
            ..Self::default()
        }
    }

    pub fn with_decisions(mut self, decisions: &[Decision]) -> Self {
        self.decisions = decisions.iter().copied().collect();
        self
    }

    pub fn without_terminal(mut self) -> Self {
        self.no_terminal = true;
        self
    }

    pub fn declining(mut self) -> Self {
        self.confirm_answer = Some(false);
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, _candidates: &[Component]) -> Result<BTreeSet<String>> {
        self.select_calls += 1;
        Ok(self.selection.clone())
    }

    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        self.confirm_calls += 1;
        self.confirm_answer
            .ok_or_else(|| selection::prompt_failed("no scripted confirmation"))
    }

    fn choose(&mut self, prompt: &str, _options: &[Decision]) -> Result<Decision> {
        self.choose_prompts.push(prompt.to_string());
        self.decisions
            .pop_front()
            .ok_or_else(|| selection::prompt_failed("no scripted decision left"))
    }

    fn ensure_can_choose(&self) -> Result<()> {
        if self.no_terminal {
            Err(selection::not_interactive())
        } else {
            Ok(())
        }
    }
}
