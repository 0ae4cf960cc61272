//! Codec error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    /// Nesting went past the encoder's depth limit, so the text could not be
    /// decoded again.
    #[error("maximum nesting depth of {0} exceeded")]
    DepthLimitExceeded(usize),
    #[error("value of type `{type_name}` has no JSON representation")]
    Unserializable { type_name: String },
    #[error("root value encodes to undefined")]
    UndefinedRoot,
    #[error("failed to serialize JSON text: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
}
