//! Custom values for common rich types.
//!
//! Each type mirrors how its runtime counterpart behaves under a plain JSON
//! encoder, so that registering a reviver for it is what makes it survive a
//! round trip.

mod bigint;
mod bytes;
mod collections;
mod date;

pub use bigint::BigInt;
pub use bytes::Bytes;
pub use collections::{OrderedMap, OrderedSet};
pub use date::{format_iso, parse_iso, Date};

pub const DATE: &str = "Date";
pub const BYTES: &str = "Uint8Array";
pub const BIGINT: &str = "BigInt";
pub const MAP: &str = "Map";
pub const SET: &str = "Set";
