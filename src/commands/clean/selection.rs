//! Interactive target selection for the clean command.
//!
//! Wraps the inquire prompts behind functions that distinguish "the user
//! dismissed the prompt" (a graceful cancellation, `Ok(None)`) from a real
//! prompt failure (`Err`, fatal). The selection prompt is seeded from the
//! registry's default flags.

use crate::error::{Result, SweepError};
use crate::registry::{CleanupTarget, SafetyTier};
use inquire::error::InquireError;
use inquire::{Confirm, MultiSelect};
use std::fmt;

/// One row of the selection prompt, mapping back to a registry index.
pub struct TargetChoice {
    index: usize,
    label: String,
}

impl fmt::Display for TargetChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Present the multi-select prompt and return the chosen targets.
///
/// `Ok(None)` means the user dismissed the prompt (Esc or Ctrl-C); the
/// caller treats that as a cancelled run, not an error.
pub fn select_targets(targets: &[CleanupTarget]) -> Result<Option<Vec<&CleanupTarget>>> {
    let choices: Vec<TargetChoice> = targets
        .iter()
        .enumerate()
        .map(|(index, target)| TargetChoice {
            index,
            label: format_choice(target),
        })
        .collect();

    let defaults = default_indices(targets);

    let picked = MultiSelect::new("Select items to clean:", choices)
        .with_default(&defaults)
        .with_help_message("↑↓ to navigate, space to toggle, → all, ← none, enter to confirm")
        .prompt();

    match picked {
        Ok(picked) => Ok(Some(
            picked.into_iter().map(|c| &targets[c.index]).collect(),
        )),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(SweepError::Prompt(e.to_string())),
    }
}

/// Ask a yes/no question. `Ok(None)` means the prompt was dismissed.
pub fn confirm(message: &str, default: bool) -> Result<Option<bool>> {
    match Confirm::new(message).with_default(default).prompt() {
        Ok(answer) => Ok(Some(answer)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(SweepError::Prompt(e.to_string())),
    }
}

/// Format one target for the selection list.
pub fn format_choice(target: &CleanupTarget) -> String {
    format!(
        "{} {} (typically {})",
        safety_glyph(target.safety),
        target.name,
        target.typical_size
    )
}

/// Indices of targets that start out checked.
pub fn default_indices(targets: &[CleanupTarget]) -> Vec<usize> {
    targets
        .iter()
        .enumerate()
        .filter(|(_, t)| t.default_selected)
        .map(|(i, _)| i)
        .collect()
}

fn safety_glyph(tier: SafetyTier) -> &'static str {
    match tier {
        SafetyTier::Safe => "🟢",
        SafetyTier::Caution => "🟡",
        SafetyTier::Advanced => "🟠",
    }
}
