//! custom-json-value - dynamic value model for type-aware JSON.
//!
//! [`Value`] is the JSON data model extended with `Undefined` and with
//! [`Value::Custom`] nodes that carry arbitrary Rust values behind the
//! [`CustomValue`] trait. The [`codec`] module encodes and decodes this model
//! with per-node visitor hooks, and [`identity`] resolves the exact type name
//! of any node.

pub mod builtin;
pub mod codec;
pub mod identity;

mod custom;
mod key;
mod value;

pub use custom::{CustomValue, DynCustom};
pub use identity::{exact_type_name, is_primitive};
pub use key::Key;
pub use value::{Map, Value};
