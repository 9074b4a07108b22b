//! # Struct Mapping
//!
//! Populates user structs from Python dicts, object attributes, or tuples.
//!
//! A mapper is an ordered list of bindings from a key (or a position) to a
//! setter closure. [`DictMapper`] reads dict entries or object attributes
//! and skips absent keys, leaving the struct's `Default` value in place.
//! [`TupleMapper`] reads positional slots and requires the exact arity.
//!
//! ## Example
//!
//! ```rust
//! use py2rust_build::{DictMapper, FromPy, BuildError, PyValue};
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct Point {
//!     x: f64,
//!     y: f64,
//! }
//!
//! impl Point {
//!     fn mapper() -> DictMapper<Point> {
//!         DictMapper::new()
//!             .field("x", |p: &mut Point, v: f64| p.x = v)
//!             .field("y", |p: &mut Point, v: f64| p.y = v)
//!     }
//! }
//!
//! impl FromPy for Point {
//!     fn eligible(value: &PyValue) -> bool {
//!         Point::mapper().eligible(value)
//!     }
//!
//!     fn from_py(value: &PyValue) -> Result<Self, BuildError> {
//!         Point::mapper().build(value)
//!     }
//! }
//! ```
//!
//! Implementing [`FromPy`] in terms of a mapper makes the struct usable
//! anywhere a primitive is: inside `Vec`, as a map key, nested in another
//! mapper.

use py2rust_value::PyValue;

use crate::error::BuildError;
use crate::FromPy;

type Setter<T> = Box<dyn Fn(&mut T, &PyValue) -> Result<(), BuildError>>;

// =============================================================================
// DICT MAPPER
// =============================================================================

/// Maps named entries of a dict, or attributes of an object, onto a struct.
///
/// Missing keys are skipped: the corresponding field keeps its `Default`
/// value. Present keys with the wrong value type fail the whole build.
pub struct DictMapper<T> {
    fields: Vec<(String, Setter<T>)>,
}

impl<T: Default> DictMapper<T> {
    /// Creates an empty mapper.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Binds a dict key (or attribute name) to a setter.
    pub fn field<V, F>(mut self, key: &str, set: F) -> Self
    where
        V: FromPy,
        F: Fn(&mut T, V) + 'static,
    {
        self.fields.push((
            key.to_string(),
            Box::new(move |obj, value| {
                set(obj, V::from_py(value)?);
                Ok(())
            }),
        ));
        self
    }

    /// Whether `value` is a dict or an object.
    pub fn eligible(&self, value: &PyValue) -> bool {
        matches!(value, PyValue::Dict(_) | PyValue::Object(_))
    }

    /// Builds the struct, reading dict entries or object attributes.
    pub fn build(&self, value: &PyValue) -> Result<T, BuildError> {
        let mut obj = T::default();
        match value {
            PyValue::Dict(_) => {
                for (key, apply) in &self.fields {
                    if let Some(item) = value.dict_get_str(key) {
                        apply(&mut obj, item)?;
                    }
                }
            }
            PyValue::Object(instance) => {
                for (key, apply) in &self.fields {
                    if let Some(item) = instance.attr(key) {
                        apply(&mut obj, item)?;
                    }
                }
            }
            other => return Err(BuildError::type_mismatch("dict or object", other)),
        }
        Ok(obj)
    }
}

impl<T: Default> Default for DictMapper<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TUPLE MAPPER
// =============================================================================

/// Maps tuple positions onto a struct, in slot order.
///
/// The input tuple must have exactly as many elements as slots were bound.
pub struct TupleMapper<T> {
    slots: Vec<Setter<T>>,
}

impl<T: Default> TupleMapper<T> {
    /// Creates an empty mapper.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Binds the next tuple position to a setter.
    pub fn slot<V, F>(mut self, set: F) -> Self
    where
        V: FromPy,
        F: Fn(&mut T, V) + 'static,
    {
        self.slots.push(Box::new(move |obj, value| {
            set(obj, V::from_py(value)?);
            Ok(())
        }));
        self
    }

    /// Whether `value` is a tuple of the bound arity.
    pub fn eligible(&self, value: &PyValue) -> bool {
        matches!(value, PyValue::Tuple(items) if items.len() == self.slots.len())
    }

    /// Builds the struct from a tuple of exactly the bound arity.
    pub fn build(&self, value: &PyValue) -> Result<T, BuildError> {
        match value {
            PyValue::Tuple(items) => {
                if items.len() != self.slots.len() {
                    return Err(BuildError::Arity {
                        expected: self.slots.len(),
                        found: items.len(),
                    });
                }
                let mut obj = T::default();
                for (apply, item) in self.slots.iter().zip(items) {
                    apply(&mut obj, item)?;
                }
                Ok(obj)
            }
            other => Err(BuildError::type_mismatch("tuple", other)),
        }
    }
}

impl<T: Default> Default for TupleMapper<T> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
