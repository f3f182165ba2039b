//! Error types for testx-core.
//!
//! Selection errors are user mistakes and always lead to a re-prompt. Quiz
//! and settings errors are reported by the caller, which decides whether to
//! carry on.

use thiserror::Error;

/// Errors that abort a quiz run.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Reading input or writing the prompt failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream ended while waiting for an answer.
    #[error("input closed before the quiz finished")]
    InputClosed,
}

/// Why an answer line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("enter at least one answer number")]
    Empty,

    #[error("'{0}' is not a number; enter numbers separated by spaces")]
    NotANumber(String),

    #[error("{value} is out of range; enter numbers from 1 to {max}")]
    OutOfRange { value: i64, max: usize },
}

/// Errors while reading or writing the settings record.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed settings record: {0}")]
    Malformed(#[from] serde_json::Error),
}
