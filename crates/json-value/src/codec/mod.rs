//! Visitor-driven JSON encoder/decoder over [`Value`](crate::Value).

mod decoder;
mod encoder;
mod error;
mod space;

pub use decoder::{DecodeVisitor, JsonDecoder};
pub use encoder::{EncodeVisitor, JsonEncoder};
pub use error::{DecodeError, EncodeError};
pub use space::Space;

use crate::Value;

/// Deepest nesting of arrays and objects the codec handles. `serde_json`
/// refuses to decode a 128th level, so the encoder stops at the same depth.
pub const MAX_DEPTH: usize = 127;

/// Plain encode: native hooks active, no visitor, compact output.
pub fn encode(value: &Value) -> Result<String, EncodeError> {
    JsonEncoder::new().encode(value)
}

/// Plain decode with no visitor.
pub fn decode(text: &str) -> Result<Value, DecodeError> {
    JsonDecoder::new().decode(text)
}
