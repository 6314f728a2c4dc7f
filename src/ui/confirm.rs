//! Confirmation prompts for destructive operations

use dialoguer::Confirm;

use crate::error::{Result, SanntiError};

/// Ask the user to confirm a destructive action
///
/// `--yes` skips the prompt. In batch mode there is nobody to ask, so the
/// action is refused unless `--yes` was given.
pub fn confirm_action(prompt: &str, assume_yes: bool, batch: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    if batch {
        return Err(SanntiError::MissingParameter(format!(
            "{} Refusing in batch mode without --yes",
            prompt
        )));
    }

    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| SanntiError::Config(format!("failed to read confirmation: {}", e)))
}
