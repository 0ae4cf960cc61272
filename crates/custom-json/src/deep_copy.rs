//! Deep copy through a stringify and parse round trip.

use custom_json_type_reviver::{merge_type_revivers, TypeReviverMap, TypeRevivers};
use custom_json_value::{is_primitive, Value};
use tracing::trace;

use crate::{CustomJsonParse, CustomJsonStringify, ParseOptions, Result, StringifyOptions};

/// Call-site revivers of a deep copy.
#[derive(Debug, Clone)]
pub enum DeepCopyRevivers {
    /// The same source for both directions.
    Both(TypeRevivers),
    /// One source per direction.
    Split {
        stringify: Option<TypeRevivers>,
        parse: Option<TypeRevivers>,
    },
}

impl From<TypeRevivers> for DeepCopyRevivers {
    fn from(revivers: TypeRevivers) -> Self {
        DeepCopyRevivers::Both(revivers)
    }
}

impl From<TypeReviverMap> for DeepCopyRevivers {
    fn from(map: TypeReviverMap) -> Self {
        DeepCopyRevivers::Both(TypeRevivers::Map(map))
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeepCopyByJson {
    preset: TypeReviverMap,
    stringify: CustomJsonStringify,
    parse: CustomJsonParse,
}

impl DeepCopyByJson {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preset(preset: TypeReviverMap) -> Self {
        Self {
            preset,
            ..Self::default()
        }
    }

    pub fn preset(&self) -> &TypeReviverMap {
        &self.preset
    }

    pub fn preset_mut(&mut self) -> &mut TypeReviverMap {
        &mut self.preset
    }

    pub fn set_preset(&mut self, preset: TypeReviverMap) {
        self.preset = preset;
    }

    /// Copies `value` by stringifying and parsing it with the preset plus
    /// `revivers`. Primitives are cloned directly.
    pub fn deep_copy(
        &self,
        value: &Value,
        revivers: Option<&DeepCopyRevivers>,
    ) -> Result<Value> {
        if is_primitive(value) {
            return Ok(value.clone());
        }
        let (stringify_src, parse_src) = match revivers {
            None => (None, None),
            Some(DeepCopyRevivers::Both(src)) => (Some(src), Some(src)),
            Some(DeepCopyRevivers::Split { stringify, parse }) => {
                (stringify.as_ref(), parse.as_ref())
            }
        };
        let stringify_revivers =
            TypeRevivers::Array(merge_type_revivers(&self.preset, stringify_src));
        let parse_revivers = TypeRevivers::Array(merge_type_revivers(&self.preset, parse_src));

        let text = self
            .stringify
            .stringify(value, Some(&stringify_revivers), &StringifyOptions::default())?;
        trace!(len = text.len(), "deep copy intermediate text");
        self.parse.parse(&text, Some(&parse_revivers), &ParseOptions::default())
    }
}

/// Deep copier with its own preset registry.
pub fn create_deep_copy_by_json(preset: Option<TypeReviverMap>) -> DeepCopyByJson {
    DeepCopyByJson::with_preset(preset.unwrap_or_default())
}
