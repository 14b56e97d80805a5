//! Implementation of the `xcsweep clean` command.
//!
//! The interactive flow, end to end:
//! - Header panel with available disk space
//! - Optional details table
//! - Multi-select seeded with the safe defaults, then a confirmation gate
//! - Sequential cleanup with a progress bar
//! - Results table, new available space, optional empty-trash step
//!
//! Dismissing any prompt cancels the run gracefully (exit code 0). Every
//! selected target produces exactly one result row; a per-target failure
//! never aborts the run.

mod display;
mod selection;


pub(crate) use display::details_table;

use crate::cli::CleanArgs;
use crate::error::Result;
use crate::orchestrator::{self, CancelToken};
use crate::proc;
use crate::registry::{self, CleanupTarget};
use std::io::Write;
use std::time::Duration;

/// Wall-clock bound for the empty-trash script.
const TRASH_TIMEOUT: Duration = Duration::from_secs(30);

/// Execute the `xcsweep clean` command.
pub fn cmd_clean(args: CleanArgs) -> Result<()> {
    let targets = registry::builtin();
    registry::validate(&targets)?;

    let mut out = std::io::stdout().lock();
    display::print_header(&mut out)?;

    if !args.all {
        match selection::confirm(
            "Would you like to see detailed information about all categories?",
            false,
        )? {
            Some(true) => display::print_details(&mut out, &targets)?,
            Some(false) => {}
            None => return cancelled(&mut out),
        }
    }

    let selected: Vec<&CleanupTarget> = if args.all {
        targets.iter().collect()
    } else {
        match selection::select_targets(&targets)? {
            Some(selected) => selected,
            None => return cancelled(&mut out),
        }
    };

    if selected.is_empty() {
        writeln!(out, "No categories selected. Exiting.")?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "Selected {} categories for cleanup", selected.len())?;
    writeln!(out)?;

    if !args.yes {
        let question = format!(
            "Delete cache files from {} categories? (Your projects and source code will NOT be affected)",
            selected.len()
        );
        match selection::confirm(&question, false)? {
            Some(true) => {}
            Some(false) | None => return cancelled(&mut out),
        }
    }

    let cancel = CancelToken::new();
    let mut progress = display::ProgressRenderer::new(selected.len() as u64);
    let result = orchestrator::run(&selected, args.strict_commands, &mut progress, &cancel);
    progress.finish();

    display::print_results(&mut out, &result, selected.len())?;
    display::print_available_space(&mut out, "New Available Space")?;

    // Trash holds anything the user deleted via Finder, not our targets;
    // emptying it is a convenience offer, interactive mode only.
    if !args.yes && !result.cancelled {
        if let Some(true) = selection::confirm("Would you like to empty the Trash?", false)? {
            empty_trash(&mut out)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "🎉 All done!")?;
    Ok(())
}

fn cancelled(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Cleanup cancelled.")?;
    Ok(())
}

/// Best-effort Finder empty-trash invocation.
fn empty_trash(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Emptying trash...")?;
    let script = r#"tell application "Finder" to empty trash"#;
    match proc::run_with_timeout(&["osascript", "-e", script], TRASH_TIMEOUT) {
        Ok(proc_out) if proc_out.is_success() => writeln!(out, "✓ Trash emptied")?,
        _ => writeln!(out, "✗ Failed to empty trash")?,
    }
    Ok(())
}
