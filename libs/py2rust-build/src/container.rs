//! # Container Extraction
//!
//! [`FromPy`] implementations for sequences, sets, maps and fixed-arity
//! tuples. Every implementation recurses through [`FromPy`], so nesting is
//! unbounded: a vector of maps of tuples of user structs extracts with the
//! same machinery as a flat list.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::Hash;

use py2rust_value::PyValue;

use crate::error::BuildError;
use crate::FromPy;

// =============================================================================
// SEQUENCES
// =============================================================================

impl<T: FromPy> FromPy for Vec<T> {
    fn eligible(value: &PyValue) -> bool {
        matches!(value, PyValue::List(_))
    }

    fn from_py(value: &PyValue) -> Result<Self, BuildError> {
        match value {
            PyValue::List(items) => items.iter().map(T::from_py).collect(),
            other => Err(BuildError::type_mismatch("list", other)),
        }
    }
}

// =============================================================================
// SETS
// =============================================================================

impl<T: FromPy + Ord> FromPy for BTreeSet<T> {
    fn eligible(value: &PyValue) -> bool {
        matches!(value, PyValue::Set(_))
    }

    fn from_py(value: &PyValue) -> Result<Self, BuildError> {
        match value {
            PyValue::Set(items) => items.iter().map(T::from_py).collect(),
            other => Err(BuildError::type_mismatch("set", other)),
        }
    }
}

impl<T: FromPy + Eq + Hash> FromPy for HashSet<T> {
    fn eligible(value: &PyValue) -> bool {
        matches!(value, PyValue::Set(_))
    }

    fn from_py(value: &PyValue) -> Result<Self, BuildError> {
        match value {
            PyValue::Set(items) => items.iter().map(T::from_py).collect(),
            other => Err(BuildError::type_mismatch("set", other)),
        }
    }
}

// =============================================================================
// MAPS
// =============================================================================

impl<K: FromPy + Ord, V: FromPy> FromPy for BTreeMap<K, V> {
    fn eligible(value: &PyValue) -> bool {
        matches!(value, PyValue::Dict(_))
    }

    fn from_py(value: &PyValue) -> Result<Self, BuildError> {
        match value {
            PyValue::Dict(pairs) => pairs
                .iter()
                .map(|(k, v)| Ok((K::from_py(k)?, V::from_py(v)?)))
                .collect(),
            other => Err(BuildError::type_mismatch("dict", other)),
        }
    }
}

impl<K: FromPy + Eq + Hash, V: FromPy> FromPy for HashMap<K, V> {
    fn eligible(value: &PyValue) -> bool {
        matches!(value, PyValue::Dict(_))
    }

    fn from_py(value: &PyValue) -> Result<Self, BuildError> {
        match value {
            PyValue::Dict(pairs) => pairs
                .iter()
                .map(|(k, v)| Ok((K::from_py(k)?, V::from_py(v)?)))
                .collect(),
            other => Err(BuildError::type_mismatch("dict", other)),
        }
    }
}

// =============================================================================
// TUPLES
// =============================================================================

macro_rules! impl_from_py_tuple {
    ($len:literal => $($name:ident $idx:tt),+) => {
        impl<$($name: FromPy),+> FromPy for ($($name,)+) {
            fn eligible(value: &PyValue) -> bool {
                matches!(value, PyValue::Tuple(items) if items.len() == $len)
            }

            fn from_py(value: &PyValue) -> Result<Self, BuildError> {
                match value {
                    PyValue::Tuple(items) => {
                        if items.len() != $len {
                            return Err(BuildError::Arity {
                                expected: $len,
                                found: items.len(),
                            });
                        }
                        Ok(($($name::from_py(&items[$idx])?,)+))
                    }
                    other => Err(BuildError::type_mismatch("tuple", other)),
                }
            }
        }
    };
}

impl_from_py_tuple!(1 => A 0);
impl_from_py_tuple!(2 => A 0, B 1);
impl_from_py_tuple!(3 => A 0, B 1, C 2);
impl_from_py_tuple!(4 => A 0, B 1, C 2, D 3);
impl_from_py_tuple!(5 => A 0, B 1, C 2, D 3, E 4);
impl_from_py_tuple!(6 => A 0, B 1, C 2, D 3, E 4, F 5);
impl_from_py_tuple!(7 => A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_from_py_tuple!(8 => A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<PyValue> {
        values.iter().map(|&v| PyValue::int(v)).collect()
    }

    #[test]
    fn test_vec_from_list() {
        let value = PyValue::list(ints(&[1, 8, 3]));
        assert_eq!(Vec::<i32>::from_py(&value), Ok(vec![1, 8, 3]));
    }

    #[test]
    fn test_vec_rejects_mixed_elements() {
        let value = PyValue::list(vec![PyValue::int(1), PyValue::str("string")]);
        assert_eq!(
            Vec::<i32>::from_py(&value),
            Err(BuildError::TypeMismatch {
                expected: "int",
                found: "str"
            })
        );
    }

    #[test]
    fn test_set_from_set() {
        let value = PyValue::set(ints(&[1, 8, 3]));
        let expected: BTreeSet<i32> = [1, 8, 3].into_iter().collect();
        assert_eq!(BTreeSet::<i32>::from_py(&value), Ok(expected));
    }

    #[test]
    fn test_set_rejects_list() {
        let value = PyValue::list(ints(&[1, 8, 3]));
        assert!(BTreeSet::<i32>::from_py(&value).is_err());
        assert!(!BTreeSet::<i32>::eligible(&value));
    }

    #[test]
    fn test_map_from_dict() {
        let value = PyValue::dict(vec![
            (PyValue::str("x"), PyValue::int(1)),
            (PyValue::str("y"), PyValue::int(3)),
        ]);
        let map = BTreeMap::<String, i32>::from_py(&value).unwrap();
        assert_eq!(map["x"], 1);
        assert_eq!(map["y"], 3);
    }

    #[test]
    fn test_tuple_exact_arity() {
        let value = PyValue::tuple(vec![PyValue::int(1), PyValue::str("toto")]);
        assert_eq!(
            <(i32, String)>::from_py(&value),
            Ok((1, "toto".to_string()))
        );
    }

    #[test]
    fn test_tuple_arity_mismatch() {
        let small = PyValue::tuple(vec![PyValue::int(1)]);
        assert_eq!(
            <(i32, String)>::from_py(&small),
            Err(BuildError::Arity {
                expected: 2,
                found: 1
            })
        );

        let large = PyValue::tuple(vec![PyValue::int(1), PyValue::str("toto"), PyValue::int(2)]);
        assert_eq!(
            <(i32, String)>::from_py(&large),
            Err(BuildError::Arity {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_nested_containers() {
        let value = PyValue::dict(vec![(
            PyValue::str("positions"),
            PyValue::list(vec![
                PyValue::dict(vec![
                    (PyValue::str("x"), PyValue::int(5)),
                    (PyValue::str("y"), PyValue::int(10)),
                ]),
                PyValue::dict(vec![
                    (PyValue::str("x"), PyValue::int(-1)),
                    (PyValue::str("y"), PyValue::int(2)),
                ]),
            ]),
        )]);
        let map = BTreeMap::<String, Vec<BTreeMap<String, i32>>>::from_py(&value).unwrap();
        assert_eq!(map["positions"].len(), 2);
        assert_eq!(map["positions"][1]["x"], -1);
    }
}
