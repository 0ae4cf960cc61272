//! JSON text encoder with a top-down per-node visitor.

use std::borrow::Cow;
use std::collections::HashSet;

use serde::Serialize;

use super::{EncodeError, Space, MAX_DEPTH};
use crate::{Key, Map, Value};

/// Per-node hook of [`JsonEncoder::encode_with`].
///
/// For every node, root first, the encoder resolves the node's native hook
/// (see [`CustomValue::to_json`](crate::CustomValue::to_json)), hands the
/// result to `visit`, and then writes whatever `visit` returned, descending
/// into its children. Returning [`Value::Undefined`] drops an object member
/// and writes `null` for an array slot.
pub trait EncodeVisitor {
    type Error: From<EncodeError>;

    fn visit<'v>(&mut self, key: Key<'_>, value: &'v Value)
        -> Result<Cow<'v, Value>, Self::Error>;
}

struct Identity;

impl EncodeVisitor for Identity {
    type Error = EncodeError;

    fn visit<'v>(
        &mut self,
        _key: Key<'_>,
        value: &'v Value,
    ) -> Result<Cow<'v, Value>, EncodeError> {
        Ok(Cow::Borrowed(value))
    }
}

/// Encoder for [`Value`] trees.
///
/// Hooks of the type names passed to [`bypass_hooks`](Self::bypass_hooks)
/// are ignored for calls made through this encoder only, so the visitor
/// receives those custom values as they are.
#[derive(Debug, Clone)]
pub struct JsonEncoder<'a> {
    gap: String,
    max_depth: usize,
    bypassed: HashSet<&'a str>,
}

impl Default for JsonEncoder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> JsonEncoder<'a> {
    pub fn new() -> Self {
        Self {
            gap: String::new(),
            max_depth: MAX_DEPTH,
            bypassed: HashSet::new(),
        }
    }

    pub fn with_space(mut self, space: &Space) -> Self {
        self.gap = space.gap();
        self
    }

    /// Lowers the nesting limit; it never goes above [`MAX_DEPTH`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH);
        self
    }

    pub fn bypass_hooks<I>(mut self, type_names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.bypassed.extend(type_names);
        self
    }

    pub fn encode(&self, value: &Value) -> Result<String, EncodeError> {
        self.encode_with(value, &mut Identity)
    }

    pub fn encode_with<V: EncodeVisitor>(
        &self,
        value: &Value,
        visitor: &mut V,
    ) -> Result<String, V::Error> {
        let mut session = Session {
            encoder: self,
            visitor,
            out: String::new(),
            indent: String::new(),
        };
        if !session.write_property(Key::Root, value, 0)? {
            return Err(EncodeError::UndefinedRoot.into());
        }
        Ok(session.out)
    }

    fn native_hook(&self, value: &Value) -> Option<Value> {
        match value {
            Value::Custom(custom) if !self.bypassed.contains(custom.type_name()) => {
                custom.to_json()
            }
            _ => None,
        }
    }
}

struct Session<'e, 'a, V> {
    encoder: &'e JsonEncoder<'a>,
    visitor: &'e mut V,
    out: String,
    indent: String,
}

impl<V: EncodeVisitor> Session<'_, '_, V> {
    /// Returns `false` when the property encodes to undefined and nothing was
    /// written.
    fn write_property(
        &mut self,
        key: Key<'_>,
        value: &Value,
        depth: usize,
    ) -> Result<bool, V::Error> {
        let hooked;
        let value = match self.encoder.native_hook(value) {
            Some(replacement) => {
                hooked = replacement;
                &hooked
            }
            None => value,
        };
        let replaced = self.visitor.visit(key, value)?;
        self.write_value(&replaced, depth)
    }

    fn write_value(&mut self, value: &Value, depth: usize) -> Result<bool, V::Error> {
        match value {
            Value::Undefined => return Ok(false),
            Value::Null => self.out.push_str("null"),
            Value::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => write_scalar(&mut self.out, n)?,
            Value::String(s) => write_scalar(&mut self.out, s.as_str())?,
            Value::Array(items) => self.write_array(items, depth)?,
            Value::Object(map) => self.write_object(map, depth)?,
            Value::Custom(custom) => match custom.to_plain() {
                Some(Value::Custom(_)) | None => {
                    return Err(EncodeError::Unserializable {
                        type_name: custom.type_name().to_owned(),
                    }
                    .into())
                }
                Some(plain) => return self.write_value(&plain, depth),
            },
        }
        Ok(true)
    }

    fn write_array(&mut self, items: &[Value], depth: usize) -> Result<(), V::Error> {
        self.enter(depth)?;
        if items.is_empty() {
            self.out.push_str("[]");
            return Ok(());
        }
        self.out.push('[');
        let outer = self.indent.len();
        self.indent.push_str(&self.encoder.gap);
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                self.out.push(',');
            }
            self.newline();
            if !self.write_property(Key::Index(index), item, depth + 1)? {
                self.out.push_str("null");
            }
        }
        self.indent.truncate(outer);
        self.newline();
        self.out.push(']');
        Ok(())
    }

    fn write_object(&mut self, map: &Map, depth: usize) -> Result<(), V::Error> {
        self.enter(depth)?;
        self.out.push('{');
        let outer = self.indent.len();
        self.indent.push_str(&self.encoder.gap);
        let mut written = false;
        for (key, item) in map {
            let rollback = self.out.len();
            if written {
                self.out.push(',');
            }
            self.newline();
            write_scalar(&mut self.out, key.as_str())?;
            self.out.push(':');
            if !self.encoder.gap.is_empty() {
                self.out.push(' ');
            }
            if self.write_property(Key::Field(key), item, depth + 1)? {
                written = true;
            } else {
                self.out.truncate(rollback);
            }
        }
        self.indent.truncate(outer);
        if written {
            self.newline();
        }
        self.out.push('}');
        Ok(())
    }

    fn enter(&self, depth: usize) -> Result<(), V::Error> {
        if depth >= self.encoder.max_depth {
            return Err(EncodeError::DepthLimitExceeded(self.encoder.max_depth).into());
        }
        Ok(())
    }

    fn newline(&mut self) {
        if !self.encoder.gap.is_empty() {
            self.out.push('\n');
            self.out.push_str(&self.indent);
        }
    }
}

/// Numbers, strings and member names are written by `serde_json`.
fn write_scalar<T: Serialize + ?Sized>(out: &mut String, scalar: &T) -> Result<(), EncodeError> {
    out.push_str(&serde_json::to_string(scalar)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CustomValue;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    struct Stamp(i64);

    impl CustomValue for Stamp {
        fn type_name(&self) -> &str {
            "Stamp"
        }

        fn to_json(&self) -> Option<Value> {
            Some(Value::from(format!("t{}", self.0)))
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Opaque;

    impl CustomValue for Opaque {
        fn type_name(&self) -> &str {
            "Opaque"
        }

        fn to_plain(&self) -> Option<Value> {
            None
        }
    }

    fn enc(value: serde_json::Value) -> String {
        JsonEncoder::new().encode(&Value::from(value)).unwrap()
    }

    #[test]
    fn compact_output_matches_serde_json() {
        let src = json!({"a": [1, -2, "x\n\"y\""], "b": {"c": null, "d": true}, "e": []});
        assert_eq!(enc(src.clone()), serde_json::to_string(&src).unwrap());
    }

    #[test]
    fn escapes_control_characters() {
        assert_eq!(enc(json!("\u{1}\u{8}\u{c}\u{1f}")), r#""\u0001\b\f\u001f""#);
        assert_eq!(enc(json!("a/b\u{7f}é")), "\"a/b\u{7f}é\"");
    }

    #[test]
    fn numbers_match_serde_json() {
        let sources = [
            json!(1.5),
            json!(100.0),
            json!(-0.0),
            json!(1e21),
            json!(1.5e-7),
            json!(u64::MAX),
        ];
        for src in sources {
            assert_eq!(enc(src.clone()), serde_json::to_string(&src).unwrap());
        }
        assert_eq!(enc(json!(100.0)), "100.0");
    }

    #[test]
    fn escaped_member_names() {
        assert_eq!(enc(json!({"a\"b\n": 1})), r#"{"a\"b\n":1}"#);
    }

    #[test]
    fn pretty_output() {
        let value = Value::from(json!({"a": [1, 2], "b": {}, "c": []}));
        let text = JsonEncoder::new()
            .with_space(&Space::Indent(2))
            .encode(&value)
            .unwrap();
        assert_eq!(text, "{\n  \"a\": [\n    1,\n    2\n  ],\n  \"b\": {},\n  \"c\": []\n}");
    }

    #[test]
    fn undefined_members_are_dropped_and_array_slots_become_null() {
        let mut map = Map::new();
        map.insert("a".into(), Value::Undefined);
        map.insert("b".into(), Value::Array(vec![Value::Undefined, Value::from(1)]));
        map.insert("c".into(), Value::Undefined);
        let text = JsonEncoder::new().encode(&Value::Object(map)).unwrap();
        assert_eq!(text, r#"{"b":[null,1]}"#);
    }

    #[test]
    fn object_with_only_undefined_members_is_empty_even_when_pretty() {
        let mut map = Map::new();
        map.insert("a".into(), Value::Undefined);
        let text = JsonEncoder::new()
            .with_space(&Space::Indent(4))
            .encode(&Value::Object(map))
            .unwrap();
        assert_eq!(text, "{}");
    }

    #[test]
    fn undefined_root_is_an_error() {
        assert!(matches!(
            JsonEncoder::new().encode(&Value::Undefined),
            Err(EncodeError::UndefinedRoot)
        ));
    }

    #[test]
    fn native_hook_runs_unless_bypassed() {
        let value = Value::Array(vec![Value::custom(Stamp(3))]);
        assert_eq!(JsonEncoder::new().encode(&value).unwrap(), r#"["t3"]"#);
        let bypassing = JsonEncoder::new().bypass_hooks(["Stamp"]);
        assert_eq!(bypassing.encode(&value).unwrap(), "[{}]");
    }

    #[test]
    fn custom_without_plain_form_fails() {
        assert!(matches!(
            JsonEncoder::new().encode(&Value::custom(Opaque)),
            Err(EncodeError::Unserializable { type_name }) if type_name == "Opaque"
        ));
    }

    #[test]
    fn depth_limit() {
        let mut value = Value::from(1);
        for _ in 0..10 {
            value = Value::Array(vec![value]);
        }
        let shallow = JsonEncoder::new().with_max_depth(5);
        assert!(matches!(shallow.encode(&value), Err(EncodeError::DepthLimitExceeded(5))));
        assert!(JsonEncoder::new().encode(&value).is_ok());
        let raised = JsonEncoder::new().with_max_depth(MAX_DEPTH * 4);
        assert_eq!(raised.max_depth, MAX_DEPTH);
    }

    struct Doubler;

    impl EncodeVisitor for Doubler {
        type Error = EncodeError;

        fn visit<'v>(
            &mut self,
            _key: Key<'_>,
            value: &'v Value,
        ) -> Result<Cow<'v, Value>, EncodeError> {
            Ok(match value.as_i64() {
                Some(n) => Cow::Owned(Value::from(n * 2)),
                None => Cow::Borrowed(value),
            })
        }
    }

    #[test]
    fn visitor_replaces_nodes() {
        let value = Value::from(json!({"a": 1, "b": [2, "s"]}));
        let text = JsonEncoder::new().encode_with(&value, &mut Doubler).unwrap();
        assert_eq!(text, r#"{"a":2,"b":[4,"s"]}"#);
    }

    struct KeyLog(Vec<String>);

    impl EncodeVisitor for KeyLog {
        type Error = EncodeError;

        fn visit<'v>(
            &mut self,
            key: Key<'_>,
            value: &'v Value,
        ) -> Result<Cow<'v, Value>, EncodeError> {
            self.0.push(key.to_string());
            Ok(Cow::Borrowed(value))
        }
    }

    #[test]
    fn visitor_sees_parents_before_children() {
        let value = Value::from(json!({"a": {"b": 1}, "c": [true]}));
        let mut log = KeyLog(Vec::new());
        JsonEncoder::new().encode_with(&value, &mut log).unwrap();
        assert_eq!(log.0, vec!["", "a", "b", "c", "0"]);
    }
}
