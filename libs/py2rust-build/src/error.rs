//! # Extraction Errors
//!
//! Error types for typed extraction.

use py2rust_value::PyValue;
use thiserror::Error;

/// Errors that can occur while extracting a typed value.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    /// The Python value has the wrong type for the requested extraction.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The value has the right type but does not fit the target.
    #[error("value out of {target} range")]
    Overflow { target: &'static str },

    /// Tuple length differs from the requested arity.
    #[error("tuple arity mismatch: expected {expected}, found {found}")]
    Arity { expected: usize, found: usize },

    /// A bytes value could not be decoded as UTF-8 text.
    #[error("bytes value is not valid utf-8")]
    InvalidUtf8,

    /// The literal front end rejected the source.
    #[error("literal error: {0}")]
    Literal(String),
}

impl BuildError {
    /// Type-mismatch error naming the actual Python type found.
    pub fn type_mismatch(expected: &'static str, found: &PyValue) -> Self {
        BuildError::TypeMismatch {
            expected,
            found: found.type_name(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
