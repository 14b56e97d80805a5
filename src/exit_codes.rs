//! Exit code constants for the xcsweep CLI.
//!
//! The tool has exactly two terminal states:
//! - 0: normal completion, including a user-cancelled run
//! - 1: unhandled internal error

/// Successful execution (also used for user-cancelled runs).
pub const SUCCESS: i32 = 0;

/// Unhandled internal error (registry validation, prompt I/O, broken stdout).
pub const INTERNAL_ERROR: i32 = 1;
