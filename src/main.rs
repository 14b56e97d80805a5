//! xcsweep: interactive cleanup tool for Xcode caches and build artifacts.
//!
//! This is the main entry point for the `xcsweep` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes. A user-cancelled run is a normal completion (exit 0);
//! only unhandled internal errors exit nonzero.

mod cli;
mod commands;
pub mod error;
pub mod executor;
pub mod exit_codes;
pub mod measure;
pub mod orchestrator;
pub mod paths;
pub mod proc;
pub mod registry;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
