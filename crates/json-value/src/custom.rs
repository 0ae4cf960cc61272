//! [`CustomValue`] - arbitrary Rust values living inside a [`Value`] tree.

use std::any::Any;
use std::fmt;

use crate::{Map, Value};

/// Object-safe clone/equality/downcast plumbing for [`CustomValue`].
///
/// Implemented automatically for every `CustomValue` that is also
/// `Clone + PartialEq`; there is no reason to implement it by hand.
pub trait DynCustom {
    fn clone_box(&self) -> Box<dyn CustomValue>;
    fn eq_dyn(&self, other: &dyn CustomValue) -> bool;
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T> DynCustom for T
where
    T: CustomValue + Clone + PartialEq,
{
    fn clone_box(&self) -> Box<dyn CustomValue> {
        Box::new(self.clone())
    }

    fn eq_dyn(&self, other: &dyn CustomValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A value with its own runtime type identity.
///
/// The encoder treats custom values like class instances:
///
/// - [`to_json`](CustomValue::to_json) is the type's native serialize hook.
///   When it returns `Some`, the hooked value replaces the instance before any
///   visitor sees it, unless the encoder was told to bypass the hook for this
///   type name.
/// - [`to_plain`](CustomValue::to_plain) is the structural form written when
///   nothing else claims the instance. `None` means the type has no JSON
///   representation and encoding fails.
///
/// # Examples
///
/// ```
/// use custom_json_value::{CustomValue, Value};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Point(i64, i64);
///
/// impl CustomValue for Point {
///     fn type_name(&self) -> &str {
///         "Point"
///     }
/// }
///
/// let value = Value::custom(Point(1, 2));
/// assert_eq!(value.downcast_ref::<Point>(), Some(&Point(1, 2)));
/// ```
pub trait CustomValue: DynCustom + fmt::Debug + Send + Sync + 'static {
    /// Exact type name used to select a reviver.
    fn type_name(&self) -> &str;

    /// Native serialize hook.
    fn to_json(&self) -> Option<Value> {
        None
    }

    /// Structural form; an instance without fields encodes as `{}`.
    fn to_plain(&self) -> Option<Value> {
        Some(Value::Object(Map::new()))
    }
}

impl Clone for Box<dyn CustomValue> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl PartialEq for dyn CustomValue {
    fn eq(&self, other: &Self) -> bool {
        self.eq_dyn(other)
    }
}
