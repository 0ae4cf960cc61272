//! Type identity of values.
//!
//! Native nodes report the constructor names JSON-producing runtimes use
//! (`"Object"`, `"Array"`, ...), with `null` and `undefined` reported in
//! lower case since they have no constructor. Custom nodes report
//! [`CustomValue::type_name`](crate::CustomValue::type_name).

use crate::Value;

pub const UNDEFINED: &str = "undefined";
pub const NULL: &str = "null";
pub const BOOLEAN: &str = "Boolean";
pub const NUMBER: &str = "Number";
pub const STRING: &str = "String";
pub const ARRAY: &str = "Array";
pub const OBJECT: &str = "Object";

/// Exact type name of `value`.
///
/// Distinguishes arrays from plain objects and every custom type from the
/// others.
pub fn exact_type_name(value: &Value) -> &str {
    match value {
        Value::Undefined => UNDEFINED,
        Value::Null => NULL,
        Value::Bool(_) => BOOLEAN,
        Value::Number(_) => NUMBER,
        Value::String(_) => STRING,
        Value::Array(_) => ARRAY,
        Value::Object(_) => OBJECT,
        Value::Custom(custom) => custom.type_name(),
    }
}

/// Whether `value` is a primitive that never needs reviving.
pub fn is_primitive(value: &Value) -> bool {
    matches!(
        value,
        Value::Undefined | Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
    )
}
