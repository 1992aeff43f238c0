//! # Error Types
//!
//! Domain-specific error types for oilmill-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  oilmill-core errors (this file)                                       │
//! │  └── ValidationError  - Bad or missing user input                      │
//! │                                                                         │
//! │  oilmill-db errors (separate crate)                                    │
//! │  └── DbError          - Storage failures, constraint violations        │
//! │                                                                         │
//! │  server errors                                                          │
//! │  ├── LedgerError      - Validation | Storage, shown as a flash         │
//! │  └── ApiError         - Anything else, a generic 500                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// Returned by the form parsers in [`crate::validation`] before any
/// storage call is made. The `Display` text is shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Value is not in the allowed set.
    #[error("{field} must be one of: {}", allowed.join(", "))]
    NotAllowed {
        field: &'static str,
        allowed: Vec<&'static str>,
    },

    /// Value does not parse (integer id, number, date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: &'static str, reason: String },

    /// Numeric value is below zero.
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
}

impl ValidationError {
    pub(crate) fn invalid_format(field: &'static str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
