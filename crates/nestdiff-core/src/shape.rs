//! Tagged view over `serde_json::Value`.
//!
//! The differ and the path enumerators dispatch on [`Shape`] rather than on
//! the raw value so that integers and floats are always distinct kinds.

use serde_json::{Map, Number, Value};

/// Classification of a value into the kinds the algorithms care about.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    Mapping(&'a Map<String, Value>),
    Sequence(&'a [Value]),
    String(&'a str),
    /// A number without fractional part or exponent in its source form
    Integer(&'a Number),
    Float(f64),
    /// Booleans and null
    Other(&'a Value),
}

impl<'a> Shape<'a> {
    /// Classify a value
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Shape::Mapping(map),
            Value::Array(items) => Shape::Sequence(items),
            Value::String(s) => Shape::String(s),
            Value::Number(n) if n.is_i64() || n.is_u64() => Shape::Integer(n),
            // `as_f64` only fails for arbitrary-precision numbers, which the
            // workspace does not enable
            Value::Number(n) => Shape::Float(n.as_f64().unwrap_or(f64::NAN)),
            Value::Bool(_) | Value::Null => Shape::Other(value),
        }
    }

    /// True for the kinds a loose sequence comparison may treat as set members
    pub fn is_scalar(&self) -> bool {
        matches!(self, Shape::String(_) | Shape::Integer(_) | Shape::Float(_))
    }
}

/// Human-readable type name used in diff messages and errors
pub fn type_name(value: &Value) -> &'static str {
    match Shape::of(value) {
        Shape::Mapping(_) => "mapping",
        Shape::Sequence(_) => "sequence",
        Shape::String(_) => "string",
        Shape::Integer(_) => "integer",
        Shape::Float(_) => "float",
        Shape::Other(Value::Bool(_)) => "boolean",
        Shape::Other(_) => "null",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_and_float_are_distinct() {
        assert!(matches!(Shape::of(&json!(3)), Shape::Integer(_)));
        assert!(matches!(Shape::of(&json!(3.0)), Shape::Float(_)));
        assert!(matches!(Shape::of(&json!(-7)), Shape::Integer(_)));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(type_name(&json!({})), "mapping");
        assert_eq!(type_name(&json!([])), "sequence");
        assert_eq!(type_name(&json!("s")), "string");
        assert_eq!(type_name(&json!(1)), "integer");
        assert_eq!(type_name(&json!(1.5)), "float");
        assert_eq!(type_name(&json!(true)), "boolean");
        assert_eq!(type_name(&Value::Null), "null");
    }

    #[test]
    fn test_scalar_kinds() {
        assert!(Shape::of(&json!("a")).is_scalar());
        assert!(Shape::of(&json!(1)).is_scalar());
        assert!(Shape::of(&json!(1.5)).is_scalar());
        assert!(!Shape::of(&json!(true)).is_scalar());
        assert!(!Shape::of(&json!([1])).is_scalar());
        assert!(!Shape::of(&json!({"a": 1})).is_scalar());
    }
}
