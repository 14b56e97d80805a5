//! Implementation of the `xcsweep list` command.
//!
//! Read-only view of the registry: renders the details table with current
//! measured sizes and exits without touching anything.

use crate::commands::clean::details_table;
use crate::error::Result;
use crate::registry;
use std::io::Write;

/// Execute the `xcsweep list` command.
pub fn cmd_list() -> Result<()> {
    let targets = registry::builtin();
    registry::validate(&targets)?;

    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", details_table(&targets))?;
    Ok(())
}
