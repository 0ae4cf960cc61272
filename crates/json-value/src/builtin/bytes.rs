use crate::{CustomValue, Map, Value};

/// Owned byte buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bytes(pub Vec<u8>);

impl CustomValue for Bytes {
    fn type_name(&self) -> &str {
        super::BYTES
    }

    /// Index-keyed object, one member per byte.
    fn to_plain(&self) -> Option<Value> {
        let map: Map = self
            .0
            .iter()
            .enumerate()
            .map(|(index, byte)| (index.to_string(), Value::from(*byte)))
            .collect();
        Some(Value::Object(map))
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(bytes: Vec<u8>) -> Self {
        Bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode;

    #[test]
    fn plain_form_is_index_keyed() {
        let text = encode(&Value::custom(Bytes(vec![7, 255]))).unwrap();
        assert_eq!(text, r#"{"0":7,"1":255}"#);
    }
}
