//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Request body could not be decoded as the expected JSON shape
    MalformedBody { reason: String },

    /// Date string doesn't match any accepted format
    InvalidDate {
        field: &'static str,
        expected: &'static str,
        reason: String,
    },

    /// Path id is not an integer
    InvalidId { value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedBody { reason } => write!(f, "{}", reason),
            Self::InvalidDate {
                field,
                expected,
                reason,
            } => {
                write!(f, "invalid {} format, use {}: {}", field, expected, reason)
            }
            Self::InvalidId { value } => write!(f, "invalid id '{}': must be an integer", value),
        }
    }
}

impl std::error::Error for ValidationError {}
