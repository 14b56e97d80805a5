//! Deletion strategies for cleanup targets.
//!
//! Two strategies, selected by `TargetKind`: bulk-clearing a directory's
//! contents, or running a fixed external maintenance command. Both return a
//! `CleanupOutcome` and never propagate errors; a failed target is a row in
//! the report, not an abort.

use crate::measure;
use crate::paths::expand_home;
use crate::proc;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Size sentinel for command targets, which free no directly measurable space.
pub const SIZE_NA: &str = "N/A";

/// Size sentinel for no-op and failed directory cleanups.
pub const SIZE_ZERO: &str = "0B";

/// Wall-clock bound for one maintenance-command invocation.
const COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

/// The result record produced for one target after one cleanup attempt.
///
/// Immutable once produced; owned by the orchestrator's result list for the
/// duration of a single run and consumed by the report step.
#[derive(Debug, Clone)]
pub struct CleanupOutcome {
    pub target_name: String,
    pub succeeded: bool,
    pub message: String,
    pub size_freed: String,
}

impl CleanupOutcome {
    fn success(name: &str, message: impl Into<String>, size_freed: impl Into<String>) -> Self {
        CleanupOutcome {
            target_name: name.to_string(),
            succeeded: true,
            message: message.into(),
            size_freed: size_freed.into(),
        }
    }

    fn failure(name: &str, message: impl Into<String>, size_freed: impl Into<String>) -> Self {
        CleanupOutcome {
            target_name: name.to_string(),
            succeeded: false,
            message: message.into(),
            size_freed: size_freed.into(),
        }
    }
}

/// Bulk-clear a directory: remove every immediate child, keep the directory.
///
/// An absent directory is a successful no-op, so repeated runs are
/// idempotent. The reported size is the pre-deletion snapshot; a cleanup
/// interrupted by a removal error conservatively reports "0B".
pub fn clear_directory(name: &str, path: &str) -> CleanupOutcome {
    // Snapshot before deletion; once children start disappearing there is
    // nothing left to measure. A measurement error ("Error") still allows
    // the deletion to proceed and is reported as the freed size.
    let snapshot = measure::measure(path);

    if !snapshot.exists {
        return CleanupOutcome::success(name, "Directory not found", SIZE_ZERO);
    }

    match clear_dir_contents(&expand_home(path)) {
        Ok(()) => CleanupOutcome::success(name, "Cleaned successfully", snapshot.display),
        Err(e) => CleanupOutcome::failure(name, format!("Error: {}", e), SIZE_ZERO),
    }
}

/// Remove every immediate child of `dir`, preserving `dir` itself.
fn clear_dir_contents(dir: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        // file_type() does not follow symlinks, so a link to a directory is
        // unlinked rather than recursed into.
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(entry.path())?;
        } else {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}

/// Run a fixed external maintenance command.
///
/// A nonzero exit is treated as "nothing to clean" rather than a failure:
/// the one built-in command exits nonzero when no matching items exist.
/// `strict` flips that leniency off. Invocation-level failures (missing
/// binary, bad quoting, timeout) are real failures.
pub fn run_command(name: &str, command_line: &str, strict: bool) -> CleanupOutcome {
    let argv = match shell_words::split(command_line) {
        Ok(argv) => argv,
        Err(e) => return CleanupOutcome::failure(name, format!("Error: {}", e), SIZE_NA),
    };

    if argv.is_empty() {
        return CleanupOutcome::failure(name, "Error: empty command", SIZE_NA);
    }

    let argv_refs: Vec<&str> = argv.iter().map(String::as_str).collect();
    let out = match proc::run_with_timeout(&argv_refs, COMMAND_TIMEOUT) {
        Ok(out) => out,
        Err(e) => return CleanupOutcome::failure(name, format!("Error: {}", e), SIZE_NA),
    };

    if out.timed_out {
        return CleanupOutcome::failure(
            name,
            format!(
                "Error: command timed out after {}s",
                COMMAND_TIMEOUT.as_secs()
            ),
            SIZE_NA,
        );
    }

    match out.exit_code {
        Some(0) => CleanupOutcome::success(name, "Executed successfully", SIZE_NA),
        Some(code) if strict => {
            CleanupOutcome::failure(name, format!("Error: command exited with status {}", code), SIZE_NA)
        }
        Some(code) => CleanupOutcome::success(
            name,
            format!("Nothing to clean (exit status {})", code),
            SIZE_NA,
        ),
        None => CleanupOutcome::failure(name, "Error: command terminated by signal", SIZE_NA),
    }
}
