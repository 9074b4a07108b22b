//! # Literal Front End
//!
//! Parses one Python literal expression into a [`PyValue`], backed by
//! rustpython-parser. This is the `ast.literal_eval` subset: constants,
//! containers, and unary plus/minus on numbers. Names, calls and
//! comprehensions are rejected — nothing here evaluates code.
//!
//! ## Supported Literals
//!
//! - Constants: `None`, `True`, `42`, `3.14`, `'text'`, `b'raw'`
//! - Containers: `(1, 'a')`, `[1, 2]`, `{1, 2}`, `{'x': 1}`
//! - Signs: `-5`, `+1.5`
//!
//! ## Example
//!
//! ```rust
//! use py2rust_value::parse;
//!
//! let value = parse("[{'x': 0, 'y': 2}, {'x': 1, 'y': 3}]").unwrap();
//! assert_eq!(value.type_name(), "list");
//! ```

use std::str::FromStr;

use config::constants::MAX_LITERAL_DEPTH;
use num_bigint::BigInt;
use rustpython_parser::ast as py_ast;
use rustpython_parser::text_size::TextRange;
use rustpython_parser::Parse;

use crate::error::LiteralError;
use crate::value::PyValue;

type PyExpr = py_ast::Expr<TextRange>;
type PyConstant = py_ast::Constant;

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Parses a single Python literal expression.
///
/// ## Parameters
///
/// - `source`: literal source text, e.g. `"{'x': 0, 'y': 2}"`
///
/// ## Returns
///
/// `Result<PyValue, LiteralError>` - the lowered value on success
///
/// ## Example
///
/// ```rust
/// use py2rust_value::{parse, PyValue};
///
/// assert_eq!(parse("-50").unwrap(), PyValue::int(-50));
/// ```
pub fn parse(source: &str) -> Result<PyValue, LiteralError> {
    let suite = py_ast::Suite::parse(source, "<literal>").map_err(|err| LiteralError::Syntax {
        message: err.to_string(),
    })?;
    let stmt = match suite.as_slice() {
        [single] => single,
        [] => return Err(LiteralError::unsupported("empty input")),
        _ => return Err(LiteralError::unsupported("multiple statements")),
    };
    match stmt {
        py_ast::Stmt::Expr(expr_stmt) => lower_expr(&expr_stmt.value, 0),
        _ => Err(LiteralError::unsupported("non-expression statement")),
    }
}

// =============================================================================
// LOWERING
// =============================================================================

fn lower_expr(expr: &PyExpr, depth: usize) -> Result<PyValue, LiteralError> {
    if depth > MAX_LITERAL_DEPTH {
        return Err(LiteralError::TooDeep {
            limit: MAX_LITERAL_DEPTH,
        });
    }
    match expr {
        PyExpr::Constant(constant) => lower_constant(&constant.value),
        PyExpr::List(list) => Ok(PyValue::List(lower_items(&list.elts, depth)?)),
        PyExpr::Tuple(tuple) => Ok(PyValue::Tuple(lower_items(&tuple.elts, depth)?)),
        PyExpr::Set(set) => Ok(PyValue::set(lower_items(&set.elts, depth)?)),
        PyExpr::Dict(dict) => {
            let mut pairs = Vec::with_capacity(dict.keys.len());
            for (key, value) in dict.keys.iter().zip(&dict.values) {
                let key_expr: &PyExpr = key
                    .as_ref()
                    .ok_or_else(|| LiteralError::unsupported("dict unpacking"))?;
                pairs.push((
                    lower_expr(key_expr, depth + 1)?,
                    lower_expr(value, depth + 1)?,
                ));
            }
            Ok(PyValue::dict(pairs))
        }
        PyExpr::UnaryOp(unary) => {
            let operand = lower_expr(&unary.operand, depth + 1)?;
            match unary.op {
                py_ast::UnaryOp::USub => negate(operand),
                py_ast::UnaryOp::UAdd => match operand {
                    PyValue::Int(_) | PyValue::Float(_) => Ok(operand),
                    other => Err(LiteralError::unsupported(format!(
                        "unary plus on {}",
                        other.type_name()
                    ))),
                },
                _ => Err(LiteralError::unsupported("unary operator")),
            }
        }
        other => Err(LiteralError::unsupported(describe(other))),
    }
}

fn lower_items(items: &[PyExpr], depth: usize) -> Result<Vec<PyValue>, LiteralError> {
    items
        .iter()
        .map(|item| lower_expr(item, depth + 1))
        .collect()
}

fn lower_constant(constant: &PyConstant) -> Result<PyValue, LiteralError> {
    match constant {
        PyConstant::None => Ok(PyValue::None),
        PyConstant::Bool(value) => Ok(PyValue::Bool(*value)),
        PyConstant::Str(value) => Ok(PyValue::Str(value.clone())),
        PyConstant::Bytes(bytes) => Ok(PyValue::Bytes(bytes.clone())),
        PyConstant::Int(value) => lower_bigint(value),
        PyConstant::Float(value) => Ok(PyValue::Float(*value)),
        PyConstant::Tuple(items) => {
            let items = items
                .iter()
                .map(lower_constant)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(PyValue::Tuple(items))
        }
        PyConstant::Complex { .. } => Err(LiteralError::unsupported("complex literal")),
        PyConstant::Ellipsis => Err(LiteralError::unsupported("ellipsis")),
    }
}

// The parser's bigint type differs from num-bigint; round-trip through the
// decimal text representation.
fn lower_bigint(value: &py_ast::bigint::BigInt) -> Result<PyValue, LiteralError> {
    let text = value.to_string();
    let parsed = BigInt::from_str(&text).map_err(|_| LiteralError::Syntax {
        message: format!("malformed integer literal: {}", text),
    })?;
    Ok(PyValue::Int(parsed))
}

fn negate(value: PyValue) -> Result<PyValue, LiteralError> {
    match value {
        PyValue::Int(i) => Ok(PyValue::Int(-i)),
        PyValue::Float(n) => Ok(PyValue::Float(-n)),
        other => Err(LiteralError::unsupported(format!(
            "unary minus on {}",
            other.type_name()
        ))),
    }
}

fn describe(expr: &PyExpr) -> &'static str {
    match expr {
        PyExpr::Name(_) => "name",
        PyExpr::Call(_) => "function call",
        PyExpr::Attribute(_) => "attribute access",
        PyExpr::Subscript(_) => "subscript",
        PyExpr::BinOp(_) => "binary operator",
        PyExpr::BoolOp(_) => "boolean operator",
        PyExpr::Compare(_) => "comparison",
        PyExpr::Lambda(_) => "lambda",
        PyExpr::Starred(_) => "starred expression",
        PyExpr::ListComp(_) | PyExpr::SetComp(_) | PyExpr::DictComp(_)
        | PyExpr::GeneratorExp(_) => "comprehension",
        PyExpr::JoinedStr(_) => "f-string",
        _ => "expression",
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_constants() {
        assert_eq!(parse("None").unwrap(), PyValue::None);
        assert_eq!(parse("True").unwrap(), PyValue::Bool(true));
        assert_eq!(parse("False").unwrap(), PyValue::Bool(false));
        assert_eq!(parse("0").unwrap(), PyValue::int(0));
        assert_eq!(parse("3.14").unwrap(), PyValue::Float(3.14));
        assert_eq!(parse("'hello'").unwrap(), PyValue::str("hello"));
        assert_eq!(parse("b'raw'").unwrap(), PyValue::Bytes(b"raw".to_vec()));
    }

    #[test]
    fn test_parse_signed_numbers() {
        assert_eq!(parse("-50").unwrap(), PyValue::int(-50));
        assert_eq!(parse("- 1.5").unwrap(), PyValue::Float(-1.5));
        assert_eq!(parse("+7").unwrap(), PyValue::int(7));
        assert_eq!(parse("-0").unwrap(), PyValue::int(0));
    }

    #[test]
    fn test_parse_containers() {
        assert_eq!(
            parse("[1, 8, 3]").unwrap(),
            PyValue::list(vec![PyValue::int(1), PyValue::int(8), PyValue::int(3)])
        );
        assert_eq!(
            parse("(1, 'toto')").unwrap(),
            PyValue::tuple(vec![PyValue::int(1), PyValue::str("toto")])
        );
        assert_eq!(
            parse("{1, 8, 3}").unwrap(),
            PyValue::set(vec![PyValue::int(1), PyValue::int(8), PyValue::int(3)])
        );
        assert_eq!(
            parse("{'x': 1, 'y': 3}").unwrap(),
            PyValue::dict(vec![
                (PyValue::str("x"), PyValue::int(1)),
                (PyValue::str("y"), PyValue::int(3)),
            ])
        );
    }

    #[test]
    fn test_parse_single_element_tuple() {
        assert_eq!(
            parse("(1,)").unwrap(),
            PyValue::tuple(vec![PyValue::int(1)])
        );
    }

    #[test]
    fn test_parse_nested() {
        let value = parse("{'positions': [{'x': 5, 'y': 10}, {'x': -1, 'y': 2}]}").unwrap();
        let positions = value.dict_get_str("positions").unwrap();
        match positions {
            PyValue::List(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[1].dict_get_str("x"), Some(&PyValue::int(-1)));
            }
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_dict_key_last_wins() {
        let value = parse("{'x': 1, 'x': 9}").unwrap();
        assert_eq!(value.dict_get_str("x"), Some(&PyValue::int(9)));
    }

    #[test]
    fn test_duplicate_set_member_dropped() {
        let value = parse("{1, 1, 8}").unwrap();
        assert_eq!(value, PyValue::Set(vec![PyValue::int(1), PyValue::int(8)]));
    }

    #[test]
    fn test_big_int_preserved() {
        let source = format!("1{}", "0".repeat(40));
        match parse(&source).unwrap() {
            PyValue::Int(i) => assert_eq!(i.to_string(), source),
            other => panic!("expected int, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_names_and_calls() {
        assert!(matches!(
            parse("x"),
            Err(LiteralError::Unsupported { .. })
        ));
        assert!(matches!(
            parse("Point(0, 0)"),
            Err(LiteralError::Unsupported { .. })
        ));
        assert!(matches!(
            parse("[i for i in y]"),
            Err(LiteralError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_rejects_arithmetic() {
        assert!(matches!(
            parse("1 + 2"),
            Err(LiteralError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_syntax_error() {
        assert!(matches!(
            parse("[1, 2, 3"),
            Err(LiteralError::Syntax { .. })
        ));
    }

    #[test]
    fn test_depth_limit() {
        let depth = MAX_LITERAL_DEPTH + 8;
        let source = format!("{}1{}", "[".repeat(depth), "]".repeat(depth));
        assert!(matches!(
            parse(&source),
            Err(LiteralError::TooDeep { .. })
        ));
    }
}
