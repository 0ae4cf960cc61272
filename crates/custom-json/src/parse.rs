//! Parse engine: JSON text back to values, reviving envelopes bottom-up.

use custom_json_type_reviver::{
    flat_parse_type_revivers, merge_type_revivers, FlatTypeRevivers, ParseArgs, Reviver,
    TypeReviverMap, TypeRevivers,
};
use custom_json_value::codec::{DecodeVisitor, JsonDecoder};
use custom_json_value::{is_primitive, Key, Map, Value};
use tracing::{debug, trace};

use crate::mark::MarkKeys;
use crate::{Error, LostReviver, ParseOptions, Result};

/// Parse engine holding a preset registry that applies to every call.
#[derive(Debug, Clone, Default)]
pub struct CustomJsonParse {
    preset: TypeReviverMap,
}

impl CustomJsonParse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preset(preset: TypeReviverMap) -> Self {
        Self { preset }
    }

    pub fn preset(&self) -> &TypeReviverMap {
        &self.preset
    }

    pub fn preset_mut(&mut self) -> &mut TypeReviverMap {
        &mut self.preset
    }

    pub fn set_preset(&mut self, preset: TypeReviverMap) {
        self.preset = preset;
    }

    /// Decodes `text` and replaces every envelope with the output of the
    /// parse reviver registered for its type. Nested envelopes are revived
    /// before the envelope that contains them.
    ///
    /// Envelopes whose type has no parse reviver are handled according to
    /// [`ParseOptions::lost_reviver`].
    pub fn parse(
        &self,
        text: &str,
        revivers: Option<&TypeRevivers>,
        options: &ParseOptions,
    ) -> Result<Value> {
        let flat = flat_parse_type_revivers(&merge_type_revivers(&self.preset, revivers));
        let decoder = JsonDecoder::new();
        if flat.is_empty() && options.lost_reviver == LostReviver::Original {
            debug!("no revivers registered, decoding plain JSON");
            return Ok(decoder.decode(text)?);
        }

        let keys = MarkKeys::new(options.mark());
        debug!(
            revivers = flat.lookup.len(),
            mark = %keys.mark,
            lost_reviver = %options.lost_reviver,
            "parse with revivers"
        );
        let mut walk = ParseWalk {
            flat: &flat,
            keys: &keys,
            lost_reviver: options.lost_reviver,
            call_count: 0,
        };
        decoder.decode_with(text, &mut walk)
    }
}

struct ParseWalk<'a> {
    flat: &'a FlatTypeRevivers,
    keys: &'a MarkKeys,
    lost_reviver: LostReviver,
    call_count: usize,
}

impl ParseWalk<'_> {
    fn lost(&self, mut envelope: Map) -> Value {
        match self.lost_reviver {
            LostReviver::Original => Value::Object(envelope),
            LostReviver::Parse => self.keys.take_payload(&mut envelope),
            LostReviver::Ignore => Value::Undefined,
        }
    }
}

impl DecodeVisitor for ParseWalk<'_> {
    type Error = Error;

    fn visit(&mut self, key: Key<'_>, value: Value) -> Result<Value> {
        self.call_count += 1;
        if is_primitive(&value) {
            return Ok(value);
        }
        let object = match value {
            Value::Object(object) => object,
            other => return Ok(other),
        };
        let Some(type_name) = self.keys.envelope_type(&object) else {
            return Ok(Value::Object(object));
        };
        let Some(reviver) = self.flat.get(type_name).and_then(Reviver::parse_fn) else {
            debug!(%key, type_name, policy = %self.lost_reviver, "no reviver for envelope");
            return Ok(self.lost(object));
        };

        let (type_name, payload) = self.keys.open(object);
        trace!(%key, type_name = %type_name, "reviving envelope");
        reviver(ParseArgs {
            key,
            value: payload,
            type_name: &type_name,
            call_count: self.call_count,
        })
        .map_err(|source| Error::reviver(&type_name, source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lengths() -> TypeRevivers {
        TypeRevivers::from(TypeReviverMap::new().with(
            "Len",
            Reviver::parse(|args| Ok(Value::from(args.value.as_str().map_or(0, str::len)))),
        ))
    }

    #[test]
    fn revives_registered_envelopes() {
        let text = r#"{"a":{"$":1,"$Type":"Len","$Value":"abcd"},"b":2}"#;
        let options = ParseOptions::new().with_mark("$");
        let value = CustomJsonParse::new().parse(text, Some(&lengths()), &options).unwrap();
        assert_eq!(value, Value::from(json!({"a": 4, "b": 2})));
    }

    #[test]
    fn falsy_mark_is_not_an_envelope() {
        let text = r#"{"$":0,"$Type":"Len","$Value":"abcd"}"#;
        let options = ParseOptions::new().with_mark("$");
        let value = CustomJsonParse::new().parse(text, Some(&lengths()), &options).unwrap();
        assert_eq!(value, Value::from(json!({"$": 0, "$Type": "Len", "$Value": "abcd"})));
    }

    #[test]
    fn reviver_error_names_the_type() {
        let failing = TypeRevivers::from(
            TypeReviverMap::new().with("T", Reviver::parse(|_| Err("bad payload".into()))),
        );
        let text = r#"{"m":1,"mType":"T","mValue":null}"#;
        let err = CustomJsonParse::new()
            .parse(text, Some(&failing), &ParseOptions::new().with_mark("m"))
            .unwrap_err();
        assert_eq!(err.to_string(), "reviver for `T` failed: bad payload");
    }

    #[test]
    fn syntax_errors_surface() {
        let err = CustomJsonParse::new()
            .parse("[1,", Some(&lengths()), &ParseOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
