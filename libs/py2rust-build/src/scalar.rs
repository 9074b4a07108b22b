//! # Scalar Extraction
//!
//! [`FromPy`] implementations for primitives.
//!
//! ## Conversion Rules
//!
//! - `bool` accepts only Python bools
//! - integers accept ints and bools (Python bools are ints); out-of-range
//!   values fail with `Overflow` rather than truncating
//! - floats accept floats, ints and bools; a conversion that produces an
//!   infinity from a finite input is an `Overflow`
//! - `String` accepts str, plus bytes when they decode as UTF-8
//! - `Option<T>` maps Python `None` to `Option::None`

use num_traits::ToPrimitive;
use py2rust_value::PyValue;

use crate::error::BuildError;
use crate::FromPy;

// =============================================================================
// IDENTITY
// =============================================================================

/// Identity extraction: hand the dynamic value through unchanged.
impl FromPy for PyValue {
    fn eligible(_value: &PyValue) -> bool {
        true
    }

    fn from_py(value: &PyValue) -> Result<Self, BuildError> {
        Ok(value.clone())
    }
}

// =============================================================================
// BOOL
// =============================================================================

impl FromPy for bool {
    fn eligible(value: &PyValue) -> bool {
        matches!(value, PyValue::Bool(_))
    }

    fn from_py(value: &PyValue) -> Result<Self, BuildError> {
        match value {
            PyValue::Bool(b) => Ok(*b),
            other => Err(BuildError::type_mismatch("bool", other)),
        }
    }
}

// =============================================================================
// INTEGERS
// =============================================================================

macro_rules! impl_from_py_int {
    ($($ty:ty => $to:ident),+ $(,)?) => {$(
        impl FromPy for $ty {
            fn eligible(value: &PyValue) -> bool {
                matches!(value, PyValue::Int(_) | PyValue::Bool(_))
            }

            fn from_py(value: &PyValue) -> Result<Self, BuildError> {
                match value {
                    PyValue::Bool(b) => Ok(if *b { 1 } else { 0 }),
                    PyValue::Int(i) => i.$to().ok_or(BuildError::Overflow {
                        target: stringify!($ty),
                    }),
                    other => Err(BuildError::type_mismatch("int", other)),
                }
            }
        }
    )+};
}

impl_from_py_int!(
    i8 => to_i8,
    i16 => to_i16,
    i32 => to_i32,
    i64 => to_i64,
    i128 => to_i128,
    u8 => to_u8,
    u16 => to_u16,
    u32 => to_u32,
    u64 => to_u64,
    u128 => to_u128,
    isize => to_isize,
    usize => to_usize,
);

// =============================================================================
// FLOATS
// =============================================================================

impl FromPy for f64 {
    fn eligible(value: &PyValue) -> bool {
        matches!(
            value,
            PyValue::Float(_) | PyValue::Int(_) | PyValue::Bool(_)
        )
    }

    fn from_py(value: &PyValue) -> Result<Self, BuildError> {
        match value {
            PyValue::Float(n) if n.is_infinite() => {
                Err(BuildError::Overflow { target: "f64" })
            }
            PyValue::Float(n) => Ok(*n),
            PyValue::Int(i) => {
                // num-bigint saturates to infinity when the int does not fit
                let n = i.to_f64().unwrap_or(f64::INFINITY);
                if n.is_infinite() {
                    Err(BuildError::Overflow { target: "f64" })
                } else {
                    Ok(n)
                }
            }
            PyValue::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            other => Err(BuildError::type_mismatch("float", other)),
        }
    }
}

impl FromPy for f32 {
    fn eligible(value: &PyValue) -> bool {
        f64::eligible(value)
    }

    fn from_py(value: &PyValue) -> Result<Self, BuildError> {
        let wide = f64::from_py(value)?;
        let narrow = wide as f32;
        if narrow.is_infinite() && wide.is_finite() {
            return Err(BuildError::Overflow { target: "f32" });
        }
        Ok(narrow)
    }
}

// =============================================================================
// TEXT
// =============================================================================

impl FromPy for String {
    fn eligible(value: &PyValue) -> bool {
        matches!(value, PyValue::Str(_) | PyValue::Bytes(_))
    }

    fn from_py(value: &PyValue) -> Result<Self, BuildError> {
        match value {
            PyValue::Str(s) => Ok(s.clone()),
            PyValue::Bytes(b) => {
                String::from_utf8(b.clone()).map_err(|_| BuildError::InvalidUtf8)
            }
            other => Err(BuildError::type_mismatch("str", other)),
        }
    }
}

// =============================================================================
// OPTION
// =============================================================================

impl<T: FromPy> FromPy for Option<T> {
    fn eligible(value: &PyValue) -> bool {
        matches!(value, PyValue::None) || T::eligible(value)
    }

    fn from_py(value: &PyValue) -> Result<Self, BuildError> {
        match value {
            PyValue::None => Ok(None),
            other => T::from_py(other).map(Some),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
