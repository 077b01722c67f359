//! User input and interaction handling.

use dialoguer::Confirm;

use crate::error::{Error, Result};

/// Trait for asking the user yes/no questions.
pub trait Prompter {
    /// Asks for confirmation, returning `true` without asking when `skip`
    /// is set.
    fn confirm(&self, skip: bool, message: String) -> Result<bool>;
}

/// Interactive prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, skip: bool, message: String) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}
