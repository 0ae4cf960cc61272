//! Revivers for the built-in rich types.
//!
//! | type name    | payload                        |
//! |--------------|--------------------------------|
//! | `Date`       | ISO-8601 UTC string            |
//! | `Uint8Array` | standard base64 string         |
//! | `BigInt`     | decimal string                 |
//! | `Map`        | array of `[key, value]` arrays |
//! | `Set`        | array of members               |
//!
//! A stringify reviver that meets a value of a different Rust type under
//! the same type name leaves the node alone.

use std::num::ParseIntError;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use custom_json_type_reviver::{ParseArgs, Revived, Reviver, StringifyArgs, TypeReviverMap};
use custom_json_value::builtin::{
    self, format_iso, parse_iso, BigInt, Bytes, Date, OrderedMap, OrderedSet,
};
use custom_json_value::Value;
use thiserror::Error;

/// Failure to rebuild a built-in value from its payload.
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("{type_name} payload must be {expected}")]
    UnexpectedPayload {
        type_name: &'static str,
        expected: &'static str,
    },
    #[error("invalid date: {0}")]
    Date(#[from] chrono::ParseError),
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("invalid big integer: {0}")]
    BigInt(#[from] ParseIntError),
}

fn unexpected(type_name: &'static str, expected: &'static str) -> PresetError {
    PresetError::UnexpectedPayload {
        type_name,
        expected,
    }
}

/// Registry with a reviver pair for every built-in type.
pub fn default_type_revivers() -> TypeReviverMap {
    TypeReviverMap::new()
        .with(builtin::DATE, date_reviver())
        .with(builtin::BYTES, bytes_reviver())
        .with(builtin::BIGINT, bigint_reviver())
        .with(builtin::MAP, map_reviver())
        .with(builtin::SET, set_reviver())
}

pub fn date_reviver() -> Reviver {
    Reviver::pair(
        |args: StringifyArgs<'_>| {
            Ok(match args.value.downcast_ref::<Date>() {
                Some(date) => Revived::new(Value::from(format_iso(date))),
                None => Revived::skipped(),
            })
        },
        |args: ParseArgs<'_>| {
            let text = args
                .value
                .as_str()
                .ok_or_else(|| unexpected(builtin::DATE, "a string"))?;
            let date = parse_iso(text).map_err(PresetError::from)?;
            Ok(Value::custom(date))
        },
    )
}

pub fn bytes_reviver() -> Reviver {
    Reviver::pair(
        |args: StringifyArgs<'_>| {
            Ok(match args.value.downcast_ref::<Bytes>() {
                Some(bytes) => Revived::new(Value::from(STANDARD.encode(&bytes.0))),
                None => Revived::skipped(),
            })
        },
        |args: ParseArgs<'_>| {
            let text = args
                .value
                .as_str()
                .ok_or_else(|| unexpected(builtin::BYTES, "a base64 string"))?;
            let bytes = STANDARD.decode(text).map_err(PresetError::from)?;
            Ok(Value::custom(Bytes(bytes)))
        },
    )
}

pub fn bigint_reviver() -> Reviver {
    Reviver::pair(
        |args: StringifyArgs<'_>| {
            Ok(match args.value.downcast_ref::<BigInt>() {
                Some(int) => Revived::new(Value::from(int.0.to_string())),
                None => Revived::skipped(),
            })
        },
        |args: ParseArgs<'_>| {
            let text = args
                .value
                .as_str()
                .ok_or_else(|| unexpected(builtin::BIGINT, "a decimal string"))?;
            let int = text.parse::<i128>().map_err(PresetError::from)?;
            Ok(Value::custom(BigInt(int)))
        },
    )
}

pub fn map_reviver() -> Reviver {
    Reviver::pair(
        |args: StringifyArgs<'_>| {
            Ok(match args.value.downcast_ref::<OrderedMap>() {
                Some(map) => {
                    let entries = map
                        .0
                        .iter()
                        .map(|(key, value)| Value::Array(vec![key.clone(), value.clone()]))
                        .collect();
                    Revived::new(Value::Array(entries))
                }
                None => Revived::skipped(),
            })
        },
        |args: ParseArgs<'_>| {
            let Value::Array(entries) = args.value else {
                return Err(unexpected(builtin::MAP, "an array of entries").into());
            };
            let mut map = OrderedMap::default();
            for entry in entries {
                match entry {
                    Value::Array(pair) if pair.len() == 2 => {
                        let mut pair = pair.into_iter();
                        if let (Some(key), Some(value)) = (pair.next(), pair.next()) {
                            map.insert(key, value);
                        }
                    }
                    _ => {
                        let expected = "an array of [key, value] entries";
                        return Err(unexpected(builtin::MAP, expected).into());
                    }
                }
            }
            Ok(Value::custom(map))
        },
    )
}

pub fn set_reviver() -> Reviver {
    Reviver::pair(
        |args: StringifyArgs<'_>| {
            Ok(match args.value.downcast_ref::<OrderedSet>() {
                Some(set) => Revived::new(Value::Array(set.0.clone())),
                None => Revived::skipped(),
            })
        },
        |args: ParseArgs<'_>| {
            let Value::Array(members) = args.value else {
                return Err(unexpected(builtin::SET, "an array").into());
            };
            let mut set = OrderedSet::default();
            for member in members {
                set.insert(member);
            }
            Ok(Value::custom(set))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use custom_json_value::Key;

    fn stringify_payload(reviver: &Reviver, value: &Value) -> Revived {
        let f = reviver.stringify_fn().unwrap();
        f(StringifyArgs {
            key: Key::Root,
            value,
            type_name: "test",
            call_count: 1,
            flags: Default::default(),
            mark: "$",
            skip_root: false,
        })
        .unwrap()
    }

    fn parse_payload(reviver: &Reviver, payload: Value) -> Result<Value, String> {
        let f = reviver.parse_fn().unwrap();
        f(ParseArgs {
            key: Key::Root,
            value: payload,
            type_name: "test",
            call_count: 1,
        })
        .map_err(|err| err.to_string())
    }

    #[test]
    fn registers_all_builtin_types() {
        let revivers = default_type_revivers();
        let names: Vec<&str> = revivers.type_names().collect();
        assert_eq!(names, vec!["Date", "Uint8Array", "BigInt", "Map", "Set"]);
    }

    #[test]
    fn bytes_use_base64() {
        let revived = stringify_payload(&bytes_reviver(), &Value::custom(Bytes(b"hi!".to_vec())));
        assert_eq!(revived.payload, Value::from("aGkh"));
        let back = parse_payload(&bytes_reviver(), Value::from("aGkh")).unwrap();
        assert_eq!(back.downcast_ref::<Bytes>(), Some(&Bytes(b"hi!".to_vec())));
    }

    #[test]
    fn bigint_beyond_f64_precision() {
        let big = BigInt(i128::from(u64::MAX) * 3);
        let revived = stringify_payload(&bigint_reviver(), &Value::custom(big));
        assert_eq!(revived.payload, Value::from("55340232221128654845"));
        let back = parse_payload(&bigint_reviver(), revived.payload).unwrap();
        assert_eq!(back.downcast_ref::<BigInt>(), Some(&big));
    }

    #[test]
    fn foreign_value_under_builtin_name_is_skipped() {
        let revived = stringify_payload(&date_reviver(), &Value::from("not a date"));
        assert_eq!(revived.skip, Some(true));
    }

    #[test]
    fn malformed_payloads_fail() {
        assert_eq!(
            parse_payload(&date_reviver(), Value::from(3)).unwrap_err(),
            "Date payload must be a string"
        );
        assert!(parse_payload(&date_reviver(), Value::from("yesterday"))
            .unwrap_err()
            .starts_with("invalid date"));
        assert!(parse_payload(&bigint_reviver(), Value::from("1.5"))
            .unwrap_err()
            .starts_with("invalid big integer"));
        assert!(parse_payload(&map_reviver(), Value::Array(vec![Value::from(1)])).is_err());
    }

    #[test]
    fn set_parse_drops_duplicates() {
        let payload = Value::Array(vec![Value::from(1), Value::from(2), Value::from(1)]);
        let back = parse_payload(&set_reviver(), payload).unwrap();
        assert_eq!(back.downcast_ref::<OrderedSet>().map(OrderedSet::len), Some(2));
    }
}
