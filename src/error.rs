//! Error handling for the field dispatch engine
//!
//! The dispatch pipeline itself degrades instead of erroring (a malformed
//! document produces an empty or partial descriptor list, never an `Err`).
//! Typed errors exist only at the two fallible boundaries: deserializing a
//! profile document, and validating an edited value against a descriptor.

use thiserror::Error;

/// Main error type for the dispatch engine
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Structural validation errors for edited field values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Type mismatch for field '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: String,
        found: String,
    },

    #[error("Required field '{field}' is empty")]
    MissingRequired { field: String },

    #[error("Constraint violation for field '{field}': {constraint}")]
    ConstraintViolation { field: String, constraint: String },
}

/// Result type aliases for convenience
pub type DispatchResult<T> = Result<T, DispatchError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
