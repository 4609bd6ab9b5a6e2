//! Error types for value object construction.

use thiserror::Error;

/// Errors that occur during value object construction or form validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' is too short: expected at least {min} characters, got {actual}")]
    TooShort {
        field: String,
        min: usize,
        actual: usize,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates a too-short validation error.
    pub fn too_short(field: impl Into<String>, min: usize, actual: usize) -> Self {
        ValidationError::TooShort {
            field: field.into(),
            min,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the field the error refers to.
    ///
    /// Useful for rendering field-keyed error maps in form UIs.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}
