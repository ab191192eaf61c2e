//! Error types for the divination core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while casting lines or looking up hexagrams.
///
/// A pattern that matches no hexagram is not represented here: the table is
/// total, so a miss is a corrupted binary and [`crate::resolve`] panics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Not enough random integers were supplied for the requested cast.
    #[error("insufficient entropy: needed {needed} values, got {got}")]
    InsufficientEntropy {
        /// How many values the cast consumes.
        needed: usize,
        /// How many values were supplied.
        got: usize,
    },

    /// Line positions run from 1 (bottom) to 6 (top).
    #[error("invalid line position: {0}")]
    InvalidPosition(u8),

    /// Traditional line values are 6, 7, 8 and 9.
    #[error("invalid line value: {0}")]
    InvalidLineValue(u8),

    /// Hexagram numbers run from 1 to 64.
    #[error("unknown hexagram number: {0}")]
    UnknownHexagram(u8),

    /// Unrecognised casting method name.
    #[error("unknown casting method: {0}")]
    UnknownMethod(String),
}
