// payme-rs/payme/src/error.rs
//! Builder validation errors

use thiserror::Error;

use crate::types::Field;

/// Rejection of a builder input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Validating builders only accept version 1
    #[error("Only version 1 is supported")]
    UnsupportedVersion {
        /// Requested version
        version: i32,
    },

    /// IBAN does not match the IBAN pattern
    #[error("IBAN incorrect format")]
    InvalidIban,

    /// Currency not allowed for the link version
    #[error("In version {version}, only EUR as currency code is supported.")]
    UnsupportedCurrency {
        /// Version the builder was created with
        version: i32,
        /// Rejected currency code
        currency: String,
    },

    /// Value longer than its field allows
    #[error("{field} can be maximum {max} characters long")]
    TooLong {
        /// Rejected field
        field: Field,
        /// Limit in characters
        max: usize,
        /// Length of the rejected value in characters
        actual: usize,
    },
}

impl ValidationError {
    /// The length-limited field that was rejected, if any
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::TooLong { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Result of a fallible builder call
pub type Result<T> = std::result::Result<T, ValidationError>;
