//! Error types for ID parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing or validating IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID string is empty.
    #[error("ID cannot be empty")]
    Empty,

    /// A snowflake contained a character that is not an ASCII digit.
    #[error("invalid snowflake character at byte {position} in '{input}'")]
    InvalidDigit { input: String, position: usize },

    /// A snowflake did not fit in an unsigned 64-bit integer.
    #[error("snowflake out of range: '{0}'")]
    OutOfRange(String),

    /// The ID has an invalid prefix.
    #[error("invalid ID prefix: expected '{expected}', got '{actual}'")]
    InvalidPrefix {
        expected: &'static str,
        actual: String,
    },

    /// The ID is missing the underscore separator.
    #[error("ID missing underscore separator")]
    MissingSeparator,

    /// The ULID portion of the ID is invalid.
    #[error("invalid ULID: {0}")]
    InvalidUlid(String),
}
