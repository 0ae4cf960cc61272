//! Envelope keys derived from the configured mark.
//!
//! An envelope is an object `{<mark>: true, <mark>Type: <type name>,
//! <mark>Value: <payload>}`, written in that member order.

use custom_json_value::{Key, Map, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MarkKeys {
    pub mark: String,
    pub mark_type: String,
    pub mark_value: String,
}

impl MarkKeys {
    pub fn new(mark: &str) -> Self {
        Self {
            mark: mark.to_owned(),
            mark_type: format!("{mark}Type"),
            mark_value: format!("{mark}Value"),
        }
    }

    /// True for the three envelope member names.
    pub fn is_reserved(&self, key: Key<'_>) -> bool {
        key.matches(&self.mark) || key.matches(&self.mark_type) || key.matches(&self.mark_value)
    }

    pub fn wrap(&self, type_name: &str, payload: Value) -> Value {
        let mut envelope = Map::with_capacity(3);
        envelope.insert(self.mark.clone(), Value::Bool(true));
        envelope.insert(self.mark_type.clone(), Value::from(type_name));
        envelope.insert(self.mark_value.clone(), payload);
        Value::Object(envelope)
    }

    /// Type name of `object` if it is an envelope: the mark member is truthy
    /// and the type member is a non-empty string.
    pub fn envelope_type<'m>(&self, object: &'m Map) -> Option<&'m str> {
        if !object.get(&self.mark).is_some_and(Value::is_truthy) {
            return None;
        }
        object
            .get(&self.mark_type)
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Consumes an envelope, returning its type name and payload. A missing
    /// payload member yields undefined.
    pub fn open(&self, mut object: Map) -> (String, Value) {
        let type_name = match object.swap_remove(&self.mark_type) {
            Some(Value::String(name)) => name,
            _ => String::new(),
        };
        (type_name, self.take_payload(&mut object))
    }

    pub fn take_payload(&self, object: &mut Map) -> Value {
        object.swap_remove(&self.mark_value).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(json: serde_json::Value) -> Map {
        match Value::from(json) {
            Value::Object(map) => map,
            other => panic!("not an object: {other:?}"),
        }
    }

    #[test]
    fn wrap_writes_members_in_order() {
        let keys = MarkKeys::new("$");
        let envelope = keys.wrap("Date", Value::from("x"));
        let names: Vec<&String> = envelope.as_object().unwrap().keys().collect();
        assert_eq!(names, vec!["$", "$Type", "$Value"]);
        assert_eq!(envelope, Value::from(json!({"$": true, "$Type": "Date", "$Value": "x"})));
    }

    #[test]
    fn reserved_keys() {
        let keys = MarkKeys::new("m");
        assert!(keys.is_reserved(Key::Field("m")));
        assert!(keys.is_reserved(Key::Field("mType")));
        assert!(keys.is_reserved(Key::Field("mValue")));
        assert!(!keys.is_reserved(Key::Field("mark")));
        assert!(!keys.is_reserved(Key::Root));
        assert!(MarkKeys::new("0").is_reserved(Key::Index(0)));
    }

    #[test]
    fn envelope_detection() {
        let keys = MarkKeys::new("m");
        assert_eq!(keys.envelope_type(&object(json!({"m": 1, "mType": "T"}))), Some("T"));
        assert_eq!(keys.envelope_type(&object(json!({"m": 0, "mType": "T"}))), None);
        assert_eq!(keys.envelope_type(&object(json!({"m": 1, "mType": ""}))), None);
        assert_eq!(keys.envelope_type(&object(json!({"mType": "T"}))), None);
        assert_eq!(keys.envelope_type(&object(json!({"m": true, "mType": 3}))), None);
    }

    #[test]
    fn open_takes_type_and_payload() {
        let keys = MarkKeys::new("m");
        let (name, payload) = keys.open(object(json!({"m": 1, "mType": "T", "mValue": [1]})));
        assert_eq!(name, "T");
        assert_eq!(payload, Value::from(json!([1])));
        let (_, missing) = keys.open(object(json!({"m": 1, "mType": "T"})));
        assert!(missing.is_undefined());
    }
}
