//! Type-aware JSON.
//!
//! Values of any registered type survive a stringify and parse round trip:
//! a per-type [`Reviver`] turns the value into a JSON payload, the engine
//! wraps that payload in an envelope naming the type, and on parse the
//! reviver for that name rebuilds the value.
//!
//! ```
//! use custom_json::builtin::Date;
//! use custom_json::{parse, stringify, ParseOptions, StringifyOptions, Value};
//!
//! let date: Date = "2024-05-01T12:00:00.000Z".parse().unwrap();
//! let value: Value = [("at".to_owned(), Value::custom(date))].into_iter().collect();
//!
//! let text = stringify(&value, None, &StringifyOptions::default()).unwrap();
//! let back = parse(&text, None, &ParseOptions::default()).unwrap();
//! assert_eq!(back.get("at").and_then(Value::downcast_ref::<Date>), Some(&date));
//! ```

use std::sync::LazyLock;

mod deep_copy;
mod error;
mod mark;
mod options;
mod parse;
pub mod presets;
mod stringify;
pub mod tools;

pub use custom_json_type_reviver::{
    BoxError, MarkFlags, ParseArgs, Revived, Reviver, StringifyArgs, TypeKey, TypeReviverArray,
    TypeReviverMap, TypeRevivers, DEFAULT_TYPE_NAME,
};
pub use custom_json_value::codec::Space;
pub use custom_json_value::{builtin, CustomValue, Key, Map, Value};
pub use deep_copy::{create_deep_copy_by_json, DeepCopyByJson, DeepCopyRevivers};
pub use error::{Error, Result};
pub use options::{LostReviver, ParseOptions, StringifyOptions, DEFAULT_MARK};
pub use parse::CustomJsonParse;
pub use stringify::CustomJsonStringify;

/// A stringify engine and a parse engine built from the same preset.
#[derive(Debug, Clone, Default)]
pub struct CustomJson {
    pub stringify: CustomJsonStringify,
    pub parse: CustomJsonParse,
}

impl CustomJson {
    pub fn stringify(
        &self,
        value: &Value,
        revivers: Option<&TypeRevivers>,
        options: &StringifyOptions,
    ) -> Result<String> {
        self.stringify.stringify(value, revivers, options)
    }

    pub fn parse(
        &self,
        text: &str,
        revivers: Option<&TypeRevivers>,
        options: &ParseOptions,
    ) -> Result<Value> {
        self.parse.parse(text, revivers, options)
    }
}

/// Independent engine pair sharing `preset`.
pub fn create_custom_json(preset: Option<TypeReviverMap>) -> CustomJson {
    let preset = preset.unwrap_or_default();
    CustomJson {
        stringify: CustomJsonStringify::with_preset(preset.clone()),
        parse: CustomJsonParse::with_preset(preset),
    }
}

static DEFAULT_CUSTOM_JSON: LazyLock<CustomJson> =
    LazyLock::new(|| create_custom_json(Some(presets::default_type_revivers())));

static DEFAULT_DEEP_COPY: LazyLock<DeepCopyByJson> =
    LazyLock::new(|| create_deep_copy_by_json(Some(presets::default_type_revivers())));

/// Engine pair preset with [`presets::default_type_revivers`].
pub fn default_custom_json() -> &'static CustomJson {
    &DEFAULT_CUSTOM_JSON
}

/// Stringifies with the default preset.
pub fn stringify(
    value: &Value,
    revivers: Option<&TypeRevivers>,
    options: &StringifyOptions,
) -> Result<String> {
    DEFAULT_CUSTOM_JSON.stringify(value, revivers, options)
}

/// Parses with the default preset.
pub fn parse(text: &str, revivers: Option<&TypeRevivers>, options: &ParseOptions) -> Result<Value> {
    DEFAULT_CUSTOM_JSON.parse(text, revivers, options)
}

/// Deep copies with the default preset.
pub fn deep_copy(value: &Value, revivers: Option<&DeepCopyRevivers>) -> Result<Value> {
    DEFAULT_DEEP_COPY.deep_copy(value, revivers)
}
