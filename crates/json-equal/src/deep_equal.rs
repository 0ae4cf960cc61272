use custom_json_value::Value;

/// Structural equality with numeric comparison of numbers.
///
/// - `undefined` only equals `undefined`; an object member holding
///   `undefined` is still a member.
/// - object member order is ignored, array order is not.
/// - custom values are equal when they have the same concrete type and
///   compare equal.
///
/// # Examples
///
/// ```
/// use custom_json_equal::deep_equal;
/// use custom_json_value::Value;
///
/// assert!(deep_equal(&Value::from(1), &Value::from(1.0)));
/// assert!(!deep_equal(&Value::from(1), &Value::from("1")));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => {
            if a == b {
                return true;
            }
            match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            }
        }
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            if a.len() != b.len() {
                return false;
            }
            a.iter().all(|(key, x)| b.get(key).is_some_and(|y| deep_equal(x, y)))
        }
        (Value::Custom(a), Value::Custom(b)) => a.as_ref() == b.as_ref(),
        _ => false,
    }
}
