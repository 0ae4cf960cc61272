//! Helpers around plain JSON text.
//!
//! Every helper has a `_with` form taking a codec visitor, which sees each
//! node the way it would in [`JsonDecoder::decode_with`] or
//! [`JsonEncoder::encode_with`]. Nested texts are decoded or encoded
//! separately, so the visitor meets their tops as roots.

use std::borrow::Cow;

use custom_json_value::codec::{DecodeVisitor, EncodeVisitor, JsonDecoder, JsonEncoder, Space};
use custom_json_value::{Key, Map, Value};

use crate::{Error, Result};

/// Visitor that leaves every node alone.
struct Plain;

impl DecodeVisitor for Plain {
    type Error = Error;

    fn visit(&mut self, _key: Key<'_>, value: Value) -> Result<Value> {
        Ok(value)
    }
}

impl EncodeVisitor for Plain {
    type Error = Error;

    fn visit<'v>(&mut self, _key: Key<'_>, value: &'v Value) -> Result<Cow<'v, Value>> {
        Ok(Cow::Borrowed(value))
    }
}

/// Outcome of [`safely_parse`].
#[derive(Debug, Clone, PartialEq)]
pub struct SafeParse {
    pub parsed: bool,
    /// The decoded value, or the input text as a string when decoding failed.
    pub result: Value,
}

/// Decodes `text` without failing.
pub fn safely_parse(text: &str) -> SafeParse {
    safely_parse_with(text, &mut Plain)
}

/// Like [`safely_parse`]; a visitor error counts as a failed parse.
pub fn safely_parse_with<V: DecodeVisitor>(text: &str, visitor: &mut V) -> SafeParse {
    match JsonDecoder::new().decode_with(text, visitor) {
        Ok(result) => SafeParse {
            parsed: true,
            result,
        },
        Err(_) => SafeParse {
            parsed: false,
            result: Value::from(text),
        },
    }
}

pub fn is_json_string(text: &str) -> bool {
    JsonDecoder::new().decode(text).is_ok()
}

/// The decoded value of `text`, or `text` itself when it is not JSON.
pub fn correct_parse(text: &str) -> Value {
    correct_parse_with(text, &mut Plain)
}

pub fn correct_parse_with<V: DecodeVisitor>(text: &str, visitor: &mut V) -> Value {
    safely_parse_with(text, visitor).result
}

/// Encodes `value` after replacing every nested object or array member with
/// its own deep JSON text, so only the top level is structured.
pub fn deep_stringify(value: &Value, space: &Space) -> Result<String> {
    deep_stringify_with(value, space, &mut Plain)
}

/// [`deep_stringify`] with a replacer applied to every encode, the nested
/// ones included.
pub fn deep_stringify_with<V: EncodeVisitor>(
    value: &Value,
    space: &Space,
    visitor: &mut V,
) -> Result<String, V::Error> {
    let encoder = JsonEncoder::new().with_space(space);
    let shallow = match value {
        Value::Object(members) => {
            let mut out = Map::with_capacity(members.len());
            for (name, member) in members {
                out.insert(name.clone(), stringify_member(member, space, visitor)?);
            }
            Value::Object(out)
        }
        Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(stringify_member(item, space, visitor)?);
            }
            Value::Array(out)
        }
        _ => return encoder.encode_with(value, visitor),
    };
    encoder.encode_with(&shallow, visitor)
}

fn stringify_member<V: EncodeVisitor>(
    member: &Value,
    space: &Space,
    visitor: &mut V,
) -> Result<Value, V::Error> {
    Ok(match member {
        Value::Object(_) | Value::Array(_) => {
            Value::String(deep_stringify_with(member, space, visitor)?)
        }
        other => other.clone(),
    })
}

/// Inverse of [`deep_stringify`]: string members that hold JSON objects or
/// arrays are decoded recursively. Other strings are left as they are.
pub fn deep_parse(text: &str) -> Value {
    deep_parse_with(text, &mut Plain)
}

/// [`deep_parse`] with a reviver applied to every decode, the nested ones
/// included. A nested text the visitor fails on stays a string.
pub fn deep_parse_with<V: DecodeVisitor>(text: &str, visitor: &mut V) -> Value {
    let top = correct_parse_with(text, visitor);
    expand(top, visitor)
}

fn expand<V: DecodeVisitor>(value: Value, visitor: &mut V) -> Value {
    match value {
        Value::Object(members) => Value::Object(
            members
                .into_iter()
                .map(|(name, member)| (name, expand_member(member, visitor)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| expand_member(item, visitor))
                .collect(),
        ),
        other => other,
    }
}

fn expand_member<V: DecodeVisitor>(member: Value, visitor: &mut V) -> Value {
    if let Value::String(text) = &member {
        if let Ok(nested @ (Value::Object(_) | Value::Array(_))) =
            JsonDecoder::new().decode_with(text, visitor)
        {
            return expand(nested, visitor);
        }
    }
    member
}
