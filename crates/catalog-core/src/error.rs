//! # Error Types
//!
//! Validation error types for catalog-core.
//!
//! ## Error Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ValidationError  - per-field verdicts with user-facing messages        │
//! │                                                                         │
//! │  That is the whole taxonomy. Store operations never fail: an absent    │
//! │  id on update/delete degrades to a silent no-op, so no store error     │
//! │  type exists. The only failure mode is "form not submittable".         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant's Display IS the user-facing message - the form shows
//!    `err.to_string()` next to the offending field, verbatim

use thiserror::Error;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Input validation errors.
///
/// `field` is the capitalized display name ("Name", "Price", "Quantity")
/// because it leads the rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Text value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    /// Text value is too long.
    #[error("{field} must not exceed {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Value is not parseable as a decimal number.
    #[error("{field} must be a valid number")]
    NotANumber { field: &'static str },

    /// Value is not parseable as an integer.
    #[error("{field} must be an integer")]
    NotAnInteger { field: &'static str },

    /// Numeric value is below zero.
    #[error("{field} cannot be negative")]
    Negative { field: &'static str },

    /// Numeric value is above the allowed maximum.
    #[error("{field} cannot exceed {max}")]
    TooLarge { field: &'static str, max: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_user_facing() {
        let err = ValidationError::Required { field: "Name" };
        assert_eq!(err.to_string(), "Name is required");

        let err = ValidationError::TooShort {
            field: "Name",
            min: 3,
        };
        assert_eq!(err.to_string(), "Name must be at least 3 characters");

        let err = ValidationError::TooLong {
            field: "Name",
            max: 50,
        };
        assert_eq!(err.to_string(), "Name must not exceed 50 characters");

        let err = ValidationError::NotANumber { field: "Price" };
        assert_eq!(err.to_string(), "Price must be a valid number");

        let err = ValidationError::NotAnInteger { field: "Quantity" };
        assert_eq!(err.to_string(), "Quantity must be an integer");

        let err = ValidationError::Negative { field: "Price" };
        assert_eq!(err.to_string(), "Price cannot be negative");

        let err = ValidationError::TooLarge {
            field: "Quantity",
            max: 1000,
        };
        assert_eq!(err.to_string(), "Quantity cannot exceed 1000");
    }
}
