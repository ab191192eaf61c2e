//! Error types for reading sessions.

use thiserror::Error;

use crate::entropy::EntropyError;
use crate::persistence::StoreError;
use crate::session::SessionStep;

/// Result type for reading operations.
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Errors surfaced to the caller of a reading session.
///
/// Interpretation failures never appear here: they are absorbed by the
/// static fallback and recorded on the result.
#[derive(Debug, Error)]
pub enum ReadingError {
    /// The question is too short once trimmed.
    #[error("question must be at least {min} characters, got {got}")]
    QuestionTooShort {
        /// Minimum trimmed length.
        min: usize,
        /// Trimmed length supplied.
        got: usize,
    },

    /// The requested action is not allowed in the current step.
    #[error("cannot {action} while in step {from}")]
    InvalidTransition {
        /// The step the session was in.
        from: SessionStep,
        /// What was attempted.
        action: &'static str,
    },

    /// Entropy could not be obtained; the session moved to `Error`.
    #[error("random source failure: {0}")]
    RandomSourceFailure(#[from] EntropyError),

    /// The session was torn down before it completed.
    #[error("reading cancelled")]
    Cancelled,

    /// Persistence precondition or store failure.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Casting or lookup error from the core.
    #[error("{0}")]
    Core(#[from] yj_core::CoreError),
}
