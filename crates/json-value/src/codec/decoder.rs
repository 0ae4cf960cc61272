//! JSON text decoder with a bottom-up per-node visitor.

use super::DecodeError;
use crate::{Key, Map, Value};

/// Per-node hook of [`JsonDecoder::decode_with`].
///
/// Called for every node after all of its children were visited, the root
/// last. The returned value replaces the node; [`Value::Undefined`] removes
/// an object member and stays in place for an array slot.
pub trait DecodeVisitor {
    type Error: From<DecodeError>;

    fn visit(&mut self, key: Key<'_>, value: Value) -> Result<Value, Self::Error>;
}

struct Identity;

impl DecodeVisitor for Identity {
    type Error = DecodeError;

    fn visit(&mut self, _key: Key<'_>, value: Value) -> Result<Value, DecodeError> {
        Ok(value)
    }
}

/// Decoder producing [`Value`] trees.
///
/// Syntax is delegated to `serde_json`, which also bounds nesting depth at
/// [`MAX_DEPTH`](super::MAX_DEPTH).
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, text: &str) -> Result<Value, DecodeError> {
        self.decode_with(text, &mut Identity)
    }

    pub fn decode_with<V: DecodeVisitor>(
        &self,
        text: &str,
        visitor: &mut V,
    ) -> Result<Value, V::Error> {
        let raw: serde_json::Value = serde_json::from_str(text).map_err(DecodeError::from)?;
        revive(Key::Root, raw, visitor)
    }
}

fn revive<V: DecodeVisitor>(
    key: Key<'_>,
    raw: serde_json::Value,
    visitor: &mut V,
) -> Result<Value, V::Error> {
    let value = match raw {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                out.push(revive(Key::Index(index), item, visitor)?);
            }
            Value::Array(out)
        }
        serde_json::Value::Object(members) => {
            let mut out = Map::with_capacity(members.len());
            for (name, item) in members {
                let revived = revive(Key::Field(&name), item, visitor)?;
                if !revived.is_undefined() {
                    out.insert(name, revived);
                }
            }
            Value::Object(out)
        }
    };
    visitor.visit(key, value)
}
