//! # py2rust Build
//!
//! Typed extraction of Python values into Rust.
//!
//! ## Architecture
//!
//! ```text
//! Literal source → py2rust-value (PyValue) → py2rust-build (typed Rust)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use py2rust_build::build_str;
//!
//! let xs: Vec<i32> = build_str("[1, 8, 3]").unwrap();
//! assert_eq!(xs, vec![1, 8, 3]);
//! ```
//!
//! Extraction is explicit about failure: the wrong Python type is a
//! [`BuildError::TypeMismatch`], an out-of-range number is an
//! [`BuildError::Overflow`], and a tuple of the wrong length is an
//! [`BuildError::Arity`]. User structs participate through the mapping
//! builders in [`mapping`].

pub mod container;
pub mod error;
pub mod mapping;
pub mod scalar;

// Re-export public API
pub use error::BuildError;
pub use mapping::{DictMapper, TupleMapper};
pub use py2rust_value::{PyInstance, PyValue};

/// Conversion from a dynamic Python value into a concrete Rust type.
///
/// `eligible` is the type-level admissibility check: it answers "is this
/// the right kind of Python value", not "will conversion succeed". An
/// out-of-range int is eligible for `i32` but still fails `from_py` with
/// [`BuildError::Overflow`].
pub trait FromPy: Sized {
    /// Whether the Python type of `value` is admissible for this target.
    fn eligible(value: &PyValue) -> bool;

    /// Extracts the typed value.
    fn from_py(value: &PyValue) -> Result<Self, BuildError>;
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Extract a typed value from an already-built [`PyValue`].
///
/// ## Example
///
/// ```rust
/// use py2rust_build::{build, PyValue};
///
/// let n: i64 = build(&PyValue::int(-50)).unwrap();
/// assert_eq!(n, -50);
/// ```
pub fn build<T: FromPy>(value: &PyValue) -> Result<T, BuildError> {
    T::from_py(value)
}

/// Parse a Python literal and extract a typed value from it.
///
/// This is the main entry point when the input is source text.
///
/// ## Parameters
///
/// - `source`: Python literal source, e.g. `"{'x': 0, 'y': 2}"`
///
/// ## Returns
///
/// `Result<T, BuildError>` - the extracted value on success
///
/// ## Example
///
/// ```rust
/// use std::collections::BTreeMap;
/// use py2rust_build::build_str;
///
/// let point: BTreeMap<String, i32> = build_str("{'x': 1, 'y': 3}").unwrap();
/// assert_eq!(point["x"], 1);
/// ```
#[cfg(feature = "literal-parser")]
pub fn build_str<T: FromPy>(source: &str) -> Result<T, BuildError> {
    let value = py2rust_value::parse(source).map_err(|e| BuildError::Literal(e.to_string()))?;
    T::from_py(&value)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_primitive() {
        let n: i32 = build(&PyValue::int(5)).unwrap();
        assert_eq!(n, 5);
    }

    #[cfg(feature = "literal-parser")]
    #[test]
    fn test_build_str_container() {
        let v: Vec<i32> = build_str("[0, 8, 3]").unwrap();
        assert_eq!(v, vec![0, 8, 3]);
    }

    #[cfg(feature = "literal-parser")]
    #[test]
    fn test_build_str_surfaces_literal_errors() {
        let err = build_str::<i32>("[1, 2").unwrap_err();
        assert!(matches!(err, BuildError::Literal(_)));
    }

    #[test]
    fn test_identity_build() {
        let value = PyValue::tuple(vec![PyValue::int(1), PyValue::str("toto")]);
        let copy: PyValue = build(&value).unwrap();
        assert_eq!(copy, value);
    }
}
