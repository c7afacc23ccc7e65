//! Error types for student number encoding, parsing, and validation.

use thiserror::Error;

/// Errors that can occur when encoding, parsing, or validating identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input string for `field` is empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The input has the wrong number of characters.
    #[error("invalid length: expected {expected} digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A character that is not an ASCII digit was found.
    #[error("non-digit character {found:?} at position {position}")]
    NonDigit { position: usize, found: char },

    /// The trailing check digit does not match the payload.
    #[error("check digit mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    /// A numeric component is outside its allowed range.
    #[error("{field} {value} out of range: must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// Every sequence number for a (year, program) pair has been issued.
    #[error("sequence numbers exhausted: {max_issued} already issued")]
    SequenceExhausted { max_issued: u32 },

    /// The email domain is malformed.
    #[error("invalid email domain '{domain}': {reason}")]
    InvalidDomain { domain: String, reason: &'static str },

    /// The login email does not belong to the configured domain or is malformed.
    #[error("invalid login email '{email}': {reason}")]
    InvalidEmail { email: String, reason: &'static str },

    /// The program name is not in the catalog and is not a numeric code.
    #[error("unknown program '{0}'")]
    UnknownProgram(String),
}

impl IdError {
    /// Returns true if this error indicates a check digit mismatch.
    pub fn is_checksum_error(&self) -> bool {
        matches!(self, IdError::ChecksumMismatch { .. })
    }

    /// Returns true if this error indicates the input had the wrong shape.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            IdError::Empty { .. } | IdError::InvalidLength { .. } | IdError::NonDigit { .. }
        )
    }

    pub(crate) fn out_of_range(field: &'static str, value: u32, min: u32, max: u32) -> Self {
        IdError::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }
}
