//! # py2rust Value Crate
//!
//! Dynamic value model for Python data, plus the literal front end that
//! produces it. This is the input side of the pipeline: everything the
//! extraction engine consumes is a [`PyValue`].
//!
//! ## Architecture
//!
//! ```text
//! Python literal source → py2rust-value (PyValue) → py2rust-build (typed Rust)
//! ```
//!
//! ## Usage
//!
//! ### Parsing a literal
//!
//! ```rust
//! use py2rust_value::parse;
//!
//! let value = parse("{'x': 0, 'y': 2}").unwrap();
//! assert!(value.dict_get_str("x").is_some());
//! ```
//!
//! ### Building values programmatically
//!
//! ```rust
//! use py2rust_value::PyValue;
//!
//! let point = PyValue::object("Point", vec![
//!     ("x", PyValue::int(0)),
//!     ("y", PyValue::int(2)),
//! ]);
//! assert_eq!(point.type_name(), "object");
//! ```
//!
//! ## Design Principles
//!
//! - **Structural**: `PyValue` is plain data, no interpreter state
//! - **Python Faithful**: ints are arbitrary precision, sets and dicts
//!   deduplicate, `Display` renders `repr`-style output
//! - **No Evaluation**: the front end accepts the `ast.literal_eval`
//!   subset only; names and calls are rejected

pub mod error;
#[cfg(feature = "literal-parser")]
pub mod literal;
pub mod value;

// Re-exports for convenience
pub use error::LiteralError;
#[cfg(feature = "literal-parser")]
pub use literal::parse;
pub use value::{PyInstance, PyValue};
