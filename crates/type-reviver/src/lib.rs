//! custom-json-type-reviver - revivers and the registries that hold them.
//!
//! A [`Reviver`] converts values of one type to and from their serializable
//! payload. Revivers are registered under type names in a
//! [`TypeReviverMap`] or supplied per call as a [`TypeRevivers`] source;
//! [`merge_type_revivers`] and [`flat_parse_type_revivers`] turn a preset
//! plus a call-site source into the lookup table the engines dispatch on.

mod flatten;
mod registry;
mod reviver;

pub use flatten::{
    flat_parse_type_revivers, merge_type_revivers, to_type_reviver_array, FlatTypeRevivers,
};
pub use registry::{TypeKey, TypeReviverArray, TypeReviverMap, TypeRevivers};
pub use reviver::{
    BoxError, MarkFlags, ParseArgs, ParseFn, Revived, Reviver, StringifyArgs, StringifyFn,
};

/// Registry entry consulted when a value's own type has no reviver.
pub const DEFAULT_TYPE_NAME: &str = "default";
