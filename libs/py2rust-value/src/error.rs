//! # Literal Front-End Errors
//!
//! Error types raised while turning literal source text into a
//! [`PyValue`](crate::PyValue).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while parsing and lowering a Python literal.
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
pub enum LiteralError {
    /// The source is not a syntactically valid Python expression.
    #[error("syntax error: {message}")]
    Syntax { message: String },

    /// The expression is valid Python but outside the literal subset
    /// (names, calls, comprehensions, unpacking, ...).
    #[error("unsupported construct: {construct}")]
    Unsupported { construct: String },

    /// Containers nested deeper than the configured limit.
    #[error("literal nesting exceeds {limit} levels")]
    TooDeep { limit: usize },
}

impl LiteralError {
    pub(crate) fn unsupported(construct: impl Into<String>) -> Self {
        LiteralError::Unsupported {
            construct: construct.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LiteralError::unsupported("function call");
        assert!(err.to_string().contains("function call"));

        let err = LiteralError::TooDeep { limit: 64 };
        assert!(err.to_string().contains("64"));
    }
}
