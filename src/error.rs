//! Error types for the xcsweep CLI.
//!
//! Uses thiserror for derive macros. Per-target cleanup failures are *not*
//! errors — they are reported through `CleanupOutcome` rows and never abort
//! the run. This type covers only the fatal class: registry validation,
//! prompt I/O, and terminal write failures.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for xcsweep operations.
///
/// Every variant is fatal and maps to exit code 1; anything recoverable is
/// folded into a `CleanupOutcome` instead of surfacing here.
#[derive(Error, Debug)]
pub enum SweepError {
    /// The built-in registry failed startup validation.
    #[error("invalid cleanup registry: {0}")]
    Registry(String),

    /// An interactive prompt failed for a reason other than user dismissal.
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// Writing to the terminal failed.
    #[error("terminal write failed: {0}")]
    Io(#[from] std::io::Error),
}

impl SweepError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SweepError::Registry(_) => exit_codes::INTERNAL_ERROR,
            SweepError::Prompt(_) => exit_codes::INTERNAL_ERROR,
            SweepError::Io(_) => exit_codes::INTERNAL_ERROR,
        }
    }
}

/// Result type alias for xcsweep operations.
pub type Result<T> = std::result::Result<T, SweepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_error_has_internal_exit_code() {
        let err = SweepError::Registry("duplicate target name".to_string());
        assert_eq!(err.exit_code(), exit_codes::INTERNAL_ERROR);
    }

    #[test]
    fn prompt_error_has_internal_exit_code() {
        let err = SweepError::Prompt("stdin closed".to_string());
        assert_eq!(err.exit_code(), exit_codes::INTERNAL_ERROR);
    }

    #[test]
    fn io_error_converts_and_maps() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        let err: SweepError = io.into();
        assert_eq!(err.exit_code(), exit_codes::INTERNAL_ERROR);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = SweepError::Registry("empty locator for 'Archives'".to_string());
        assert_eq!(
            err.to_string(),
            "invalid cleanup registry: empty locator for 'Archives'"
        );

        let err = SweepError::Prompt("not a terminal".to_string());
        assert_eq!(err.to_string(), "prompt failed: not a terminal");
    }
}
