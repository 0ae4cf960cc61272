use crate::CustomValue;

/// Integer wider than the JSON number range can carry exactly.
///
/// Has no plain JSON form: encoding one without a reviver fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BigInt(pub i128);

impl CustomValue for BigInt {
    fn type_name(&self) -> &str {
        super::BIGINT
    }

    fn to_plain(&self) -> Option<crate::Value> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{encode, EncodeError};
    use crate::Value;

    #[test]
    fn plain_encode_fails() {
        assert!(matches!(
            encode(&Value::custom(BigInt(i128::MAX))),
            Err(EncodeError::Unserializable { type_name }) if type_name == "BigInt"
        ));
    }
}
