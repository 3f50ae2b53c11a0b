//! Error types for boundcheck-ir
//!
//! Analysis findings (warnings, errors, unreachable code) are verdicts, not
//! errors. `CheckerError` only covers broken upstream invariants, sink
//! failures and configuration problems.

use boundcheck_storage::StorageError;
use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for boundcheck-ir operations
#[derive(Debug, Error)]
pub enum CheckerError {
    /// An operand that must already denote a program variable does not
    #[error("Precondition violation at {line}:{column}: operand {operand} {reason}")]
    PreconditionViolation {
        operand: String,
        line: u32,
        column: u32,
        reason: String,
    },

    /// Writing a record failed
    #[error("Result sink error: {0}")]
    Sink(#[from] StorageError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CheckerError {
    pub fn precondition(
        operand: impl Into<String>,
        line: u32,
        column: u32,
        reason: impl Into<String>,
    ) -> Self {
        CheckerError::PreconditionViolation {
            operand: operand.into(),
            line,
            column,
            reason: reason.into(),
        }
    }

    /// True for defects upstream of the checker (as opposed to I/O failures)
    pub fn is_internal(&self) -> bool {
        matches!(self, CheckerError::PreconditionViolation { .. })
    }
}

/// Result type alias for checker operations
pub type Result<T> = std::result::Result<T, CheckerError>;
