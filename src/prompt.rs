use std::fmt;

use anyhow::Result;
use inquire::error::InquireResult;
use inquire::{Confirm, InquireError, Select};

use crate::config::InstallMode;

/// The questions the install flow can ask. `Ok(None)` means the user cancelled.
pub trait Prompter {
    fn select_location(
        &mut self,
        message: &str,
        options: &[InstallMode],
    ) -> Result<Option<InstallMode>>;

    fn confirm(&mut self, message: &str) -> Result<Option<bool>>;
}

/// Prompts on the controlling terminal.
pub struct TerminalPrompter;

struct LocationChoice(InstallMode);

impl fmt::Display for LocationChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  ({})", self.0.label(), self.0.hint())
    }
}

impl Prompter for TerminalPrompter {
    fn select_location(
        &mut self,
        message: &str,
        options: &[InstallMode],
    ) -> Result<Option<InstallMode>> {
        let choices: Vec<LocationChoice> =
            options.iter().copied().map(LocationChoice).collect();
        let answer = cancellable(Select::new(message, choices).prompt())?;
        Ok(answer.map(|choice| choice.0))
    }

    fn confirm(&mut self, message: &str) -> Result<Option<bool>> {
        cancellable(Confirm::new(message).with_default(false).prompt())
    }
}

/// Esc and Ctrl-C are answers, not failures.
fn cancellable<T>(result: InquireResult<T>) -> Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
