//! # Python Value Model
//!
//! Represents the dynamic Python data consumed by the extraction engine:
//! primitives, containers, and class instances with named attributes.
//!
//! ## Supported Shapes
//!
//! - Primitives: `None`, `True`, `42`, `3.14`, `'text'`, `b'raw'`
//! - Containers: tuples, lists, sets, dicts (arbitrary keys)
//! - Instances: class name plus ordered named attributes

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dynamic Python value.
///
/// Ints are arbitrary precision, matching Python semantics. Sets and dicts
/// preserve insertion order and never hold two equal members/keys; the
/// constructors enforce this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PyValue {
    None,
    Bool(bool),
    Int(BigInt),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    Tuple(Vec<PyValue>),
    List(Vec<PyValue>),
    Set(Vec<PyValue>),
    Dict(Vec<(PyValue, PyValue)>),
    Object(PyInstance),
}

/// A class instance: class name plus ordered named attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PyInstance {
    class_name: String,
    attrs: Vec<(String, PyValue)>,
}

// =============================================================================
// CONSTRUCTORS
// =============================================================================

impl PyValue {
    /// Builds an `Int` from a machine integer.
    pub fn int(value: i64) -> Self {
        PyValue::Int(BigInt::from(value))
    }

    /// Builds a `Float` value.
    pub fn float(value: f64) -> Self {
        PyValue::Float(value)
    }

    /// Builds a `Str` value.
    pub fn str(value: impl Into<String>) -> Self {
        PyValue::Str(value.into())
    }

    /// Builds a `Tuple` value.
    pub fn tuple(items: Vec<PyValue>) -> Self {
        PyValue::Tuple(items)
    }

    /// Builds a `List` value.
    pub fn list(items: Vec<PyValue>) -> Self {
        PyValue::List(items)
    }

    /// Builds a `Set` value, dropping duplicates (first occurrence wins,
    /// as in a Python set literal).
    pub fn set(items: Vec<PyValue>) -> Self {
        let mut unique: Vec<PyValue> = Vec::with_capacity(items.len());
        for item in items {
            if !unique.contains(&item) {
                unique.push(item);
            }
        }
        PyValue::Set(unique)
    }

    /// Builds a `Dict` value. A repeated key keeps its first position but
    /// takes the last value, as in a Python dict literal.
    pub fn dict(pairs: Vec<(PyValue, PyValue)>) -> Self {
        let mut unique: Vec<(PyValue, PyValue)> = Vec::with_capacity(pairs.len());
        for (key, value) in pairs {
            match unique.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = value,
                None => unique.push((key, value)),
            }
        }
        PyValue::Dict(unique)
    }

    /// Builds an `Object` value from a class name and named attributes.
    pub fn object<K: Into<String>>(
        class_name: impl Into<String>,
        attrs: Vec<(K, PyValue)>,
    ) -> Self {
        PyValue::Object(PyInstance::new(
            class_name,
            attrs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }
}

impl From<bool> for PyValue {
    fn from(b: bool) -> Self {
        PyValue::Bool(b)
    }
}

impl From<i64> for PyValue {
    fn from(i: i64) -> Self {
        PyValue::int(i)
    }
}

impl From<f64> for PyValue {
    fn from(n: f64) -> Self {
        PyValue::Float(n)
    }
}

impl From<&str> for PyValue {
    fn from(s: &str) -> Self {
        PyValue::Str(s.to_string())
    }
}

impl From<String> for PyValue {
    fn from(s: String) -> Self {
        PyValue::Str(s)
    }
}

impl From<BigInt> for PyValue {
    fn from(i: BigInt) -> Self {
        PyValue::Int(i)
    }
}

// =============================================================================
// INSPECTION
// =============================================================================

impl PyValue {
    /// Python-style type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            PyValue::None => "NoneType",
            PyValue::Bool(_) => "bool",
            PyValue::Int(_) => "int",
            PyValue::Float(_) => "float",
            PyValue::Str(_) => "str",
            PyValue::Bytes(_) => "bytes",
            PyValue::Tuple(_) => "tuple",
            PyValue::List(_) => "list",
            PyValue::Set(_) => "set",
            PyValue::Dict(_) => "dict",
            PyValue::Object(_) => "object",
        }
    }

    /// Returns true if the value is "truthy" in Python.
    pub fn is_truthy(&self) -> bool {
        match self {
            PyValue::None => false,
            PyValue::Bool(b) => *b,
            PyValue::Int(i) => *i != BigInt::from(0),
            PyValue::Float(n) => *n != 0.0,
            PyValue::Str(s) => !s.is_empty(),
            PyValue::Bytes(b) => !b.is_empty(),
            PyValue::Tuple(v) | PyValue::List(v) | PyValue::Set(v) => !v.is_empty(),
            PyValue::Dict(d) => !d.is_empty(),
            PyValue::Object(_) => true,
        }
    }

    /// Looks up a dict entry by key equality. Returns `None` when the value
    /// is not a dict or the key is absent.
    pub fn dict_get(&self, key: &PyValue) -> Option<&PyValue> {
        match self {
            PyValue::Dict(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Looks up a dict entry by string key.
    pub fn dict_get_str(&self, key: &str) -> Option<&PyValue> {
        match self {
            PyValue::Dict(pairs) => pairs
                .iter()
                .find(|(k, _)| matches!(k, PyValue::Str(s) if s == key))
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Looks up an attribute on an object value.
    pub fn attr(&self, name: &str) -> Option<&PyValue> {
        match self {
            PyValue::Object(instance) => instance.attr(name),
            _ => None,
        }
    }
}

impl PyInstance {
    /// Creates an instance; a repeated attribute name keeps the last value.
    pub fn new(class_name: impl Into<String>, attrs: Vec<(String, PyValue)>) -> Self {
        let mut instance = Self {
            class_name: class_name.into(),
            attrs: Vec::with_capacity(attrs.len()),
        };
        for (name, value) in attrs {
            instance.set_attr(name, value);
        }
        instance
    }

    /// Class name of this instance.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Ordered attribute view.
    pub fn attrs(&self) -> &[(String, PyValue)] {
        &self.attrs
    }

    /// Attribute lookup by name.
    pub fn attr(&self, name: &str) -> Option<&PyValue> {
        self.attrs
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value)
    }

    /// Sets an attribute, replacing any existing value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: PyValue) {
        let name = name.into();
        match self.attrs.iter_mut().find(|(attr, _)| *attr == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }
}

// =============================================================================
// DISPLAY (Python repr)
// =============================================================================

fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        write!(f, "nan")
    } else if n.is_infinite() {
        write!(f, "{}", if n > 0.0 { "inf" } else { "-inf" })
    } else if n.abs() >= 1e16 {
        // Python switches to scientific notation from 1e16 upward
        write_float_scientific(f, n)
    } else if n == n.trunc() {
        // Python keeps the trailing ".0" on whole floats
        write!(f, "{:.1}", n)
    } else {
        write!(f, "{}", n)
    }
}

// Python prints a signed, two-digit-minimum exponent: 1e+16, not 1e16
fn write_float_scientific(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    let formatted = format!("{:e}", n);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exp: i32 = exponent.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", mantissa, sign, exp.abs())
        }
        None => write!(f, "{}", formatted),
    }
}

fn write_str(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "'")?;
    for c in s.chars() {
        match c {
            '\\' => write!(f, "\\\\")?,
            '\'' => write!(f, "\\'")?,
            '\n' => write!(f, "\\n")?,
            '\t' => write!(f, "\\t")?,
            '\r' => write!(f, "\\r")?,
            _ => write!(f, "{}", c)?,
        }
    }
    write!(f, "'")
}

fn write_bytes(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    write!(f, "b'")?;
    for b in bytes {
        match b {
            b'\\' => write!(f, "\\\\")?,
            b'\'' => write!(f, "\\'")?,
            b'\n' => write!(f, "\\n")?,
            b'\t' => write!(f, "\\t")?,
            b'\r' => write!(f, "\\r")?,
            0x20..=0x7e => write!(f, "{}", *b as char)?,
            _ => write!(f, "\\x{:02x}", b)?,
        }
    }
    write!(f, "'")
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[PyValue]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for PyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PyValue::None => write!(f, "None"),
            PyValue::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            PyValue::Int(i) => write!(f, "{}", i),
            PyValue::Float(n) => write_float(f, *n),
            PyValue::Str(s) => write_str(f, s),
            PyValue::Bytes(b) => write_bytes(f, b),
            PyValue::Tuple(items) => {
                write!(f, "(")?;
                write_items(f, items)?;
                // single-element tuples keep the trailing comma
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            PyValue::List(items) => {
                write!(f, "[")?;
                write_items(f, items)?;
                write!(f, "]")
            }
            PyValue::Set(items) => {
                if items.is_empty() {
                    write!(f, "set()")
                } else {
                    write!(f, "{{")?;
                    write_items(f, items)?;
                    write!(f, "}}")
                }
            }
            PyValue::Dict(pairs) => {
                write!(f, "{{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            PyValue::Object(instance) => write!(f, "<{} object>", instance.class_name()),
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
    fn test_type_names() {
        assert_eq!(PyValue::None.type_name(), "NoneType");
        assert_eq!(PyValue::int(1).type_name(), "int");
        assert_eq!(PyValue::Float(1.0).type_name(), "float");
        assert_eq!(PyValue::set(vec![]).type_name(), "set");
    }

    #[test]
    fn test_truthiness() {
        assert!(!PyValue::None.is_truthy());
        assert!(!PyValue::int(0).is_truthy());
        assert!(PyValue::int(-3).is_truthy());
        assert!(!PyValue::str("").is_truthy());
        assert!(PyValue::str("x").is_truthy());
        assert!(!PyValue::dict(vec![]).is_truthy());
        assert!(PyValue::object("Point", Vec::<(&str, PyValue)>::new()).is_truthy());
    }

    #[test]
    fn test_set_dedup_first_wins() {
        let set = PyValue::set(vec![PyValue::int(1), PyValue::int(8), PyValue::int(1)]);
        assert_eq!(set, PyValue::Set(vec![PyValue::int(1), PyValue::int(8)]));
    }

    #[test]
    fn test_dict_last_value_wins() {
        let dict = PyValue::dict(vec![
            (PyValue::str("x"), PyValue::int(1)),
            (PyValue::str("y"), PyValue::int(2)),
            (PyValue::str("x"), PyValue::int(9)),
        ]);
        assert_eq!(dict.dict_get_str("x"), Some(&PyValue::int(9)));
        assert_eq!(dict.dict_get_str("y"), Some(&PyValue::int(2)));
    }

    #[test]
    fn test_dict_get_by_value_key() {
        let key = PyValue::tuple(vec![PyValue::int(0), PyValue::int(0)]);
        let dict = PyValue::dict(vec![(key.clone(), PyValue::int(7))]);
        assert_eq!(dict.dict_get(&key), Some(&PyValue::int(7)));
        assert_eq!(dict.dict_get(&PyValue::int(0)), None);
    }

    #[test]
    fn test_object_attr_lookup() {
        let point = PyValue::object("Point", vec![("x", PyValue::int(5)), ("z", PyValue::int(14))]);
        assert_eq!(point.attr("x"), Some(&PyValue::int(5)));
        assert_eq!(point.attr("y"), None);
    }

    #[test]
    fn test_int_equality_is_structural() {
        assert_ne!(PyValue::int(1), PyValue::Float(1.0));
        assert_ne!(PyValue::Bool(true), PyValue::int(1));
    }

    #[test]
    fn test_repr_primitives() {
        assert_eq!(PyValue::None.to_string(), "None");
        assert_eq!(PyValue::Bool(true).to_string(), "True");
        assert_eq!(PyValue::int(-50).to_string(), "-50");
        assert_eq!(PyValue::Float(1.0).to_string(), "1.0");
        assert_eq!(PyValue::Float(1.1).to_string(), "1.1");
        assert_eq!(PyValue::str("hello").to_string(), "'hello'");
    }

    #[test]
    fn test_repr_containers() {
        let point = PyValue::dict(vec![
            (PyValue::str("x"), PyValue::int(0)),
            (PyValue::str("y"), PyValue::int(2)),
        ]);
        assert_eq!(point.to_string(), "{'x': 0, 'y': 2}");

        let single = PyValue::tuple(vec![PyValue::int(1)]);
        assert_eq!(single.to_string(), "(1,)");

        assert_eq!(PyValue::set(vec![]).to_string(), "set()");
        assert_eq!(
            PyValue::list(vec![PyValue::int(0), PyValue::int(8)]).to_string(),
            "[0, 8]"
        );
    }

    #[test]
    fn test_float_constructor() {
        assert_eq!(PyValue::float(2.5), PyValue::Float(2.5));
        assert_eq!(PyValue::float(2.5).type_name(), "float");
    }

    #[test]
    fn test_repr_large_floats_use_scientific_notation() {
        assert_eq!(PyValue::float(1e16).to_string(), "1e+16");
        assert_eq!(PyValue::float(2.5e16).to_string(), "2.5e+16");
        assert_eq!(PyValue::float(-1e100).to_string(), "-1e+100");
        // just below the threshold stays decimal
        assert_eq!(PyValue::float(9e15).to_string(), "9000000000000000.0");
    }

    #[test]
    fn test_repr_bytes() {
        assert_eq!(PyValue::Bytes(b"ab\xff".to_vec()).to_string(), "b'ab\\xff'");
    }
}
