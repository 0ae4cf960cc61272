//! Error type of the stringify and parse engines.

use custom_json_type_reviver::BoxError;
use custom_json_value::codec::{DecodeError, EncodeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("reviver for `{type_name}` failed: {source}")]
    Reviver {
        type_name: String,
        #[source]
        source: BoxError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub(crate) fn reviver(type_name: &str, source: BoxError) -> Self {
        Error::Reviver {
            type_name: type_name.to_owned(),
            source,
        }
    }
}
