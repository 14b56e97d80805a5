//! CLI argument parsing for xcsweep.
//!
//! Uses clap derive macros for declarative argument definitions. This module
//! defines the command structure; actual implementations are in the
//! `commands` module. Running with no subcommand starts the interactive
//! cleanup flow.

use clap::{Parser, Subcommand};

/// xcsweep: free up disk space by removing Xcode cache files.
///
/// Cleans a fixed set of well-known cache and build-artifact locations
/// under the current user's home directory:
/// - Derived data, device support files, simulator caches, and more
/// - One maintenance command (removing unavailable simulators)
/// - Every run reports a per-target result; one failure never stops the rest
#[derive(Parser, Debug)]
#[command(name = "xcsweep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands for xcsweep.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive cleanup flow (the default).
    ///
    /// Shows the selection prompt seeded with the safe defaults, asks for
    /// confirmation, then cleans each selected target and reports results.
    Clean(CleanArgs),

    /// List all cleanup targets with their current sizes.
    ///
    /// Renders the details table (name, description, measured size, safety
    /// tier) without deleting anything.
    List,
}

/// Arguments for the `clean` command.
#[derive(Parser, Debug, Default)]
pub struct CleanArgs {
    /// Select every target instead of prompting.
    #[arg(long)]
    pub all: bool,

    /// Skip the confirmation prompt before deleting.
    #[arg(long)]
    pub yes: bool,

    /// Treat a nonzero exit from a maintenance command as a failure.
    ///
    /// By default a nonzero exit is reported as "nothing to clean", because
    /// the built-in simulator command exits nonzero when no matching items
    /// exist.
    #[arg(long)]
    pub strict_commands: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
