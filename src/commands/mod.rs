//! Command implementations for xcsweep.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Invocation without a subcommand runs the interactive
//! cleanup flow with default arguments.

mod clean;
mod list;

use crate::cli::{CleanArgs, Command};
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Option<Command>) -> Result<()> {
    match command {
        Some(Command::Clean(args)) => clean::cmd_clean(args),
        Some(Command::List) => list::cmd_list(),
        None => clean::cmd_clean(CleanArgs::default()),
    }
}
