//! custom-json-equal - deep equality for [`Value`](custom_json_value::Value)
//! trees.
//!
//! Unlike `PartialEq`, numbers compare by numeric value, so `1` and `1.0`
//! are equal whichever side of a text round trip wrote them.

mod deep_equal;

pub use deep_equal::deep_equal;
