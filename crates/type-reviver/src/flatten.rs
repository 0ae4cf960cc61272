//! Normalization of reviver sources into one lookup table.

use std::collections::HashMap;

use crate::{Reviver, TypeKey, TypeReviverArray, TypeReviverMap, TypeRevivers, DEFAULT_TYPE_NAME};

/// Flattened registry used by one engine call.
#[derive(Debug, Clone, Default)]
pub struct FlatTypeRevivers {
    /// Type name to reviver; the last pair naming a type wins.
    pub lookup: HashMap<String, Reviver>,
    /// Distinct type names that own a reviver, in first-seen order. The
    /// reserved `"default"` entry owns no type.
    pub owner_types: Vec<String>,
}

impl FlatTypeRevivers {
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    pub fn get(&self, type_name: &str) -> Option<&Reviver> {
        self.lookup.get(type_name)
    }

    pub fn default_reviver(&self) -> Option<&Reviver> {
        self.lookup.get(DEFAULT_TYPE_NAME)
    }
}

/// Pairs of a source in registration order.
pub fn to_type_reviver_array(source: &TypeRevivers) -> TypeReviverArray {
    match source {
        TypeRevivers::Map(map) => map_pairs(map),
        TypeRevivers::Array(pairs) => pairs.clone(),
    }
}

/// Preset pairs followed by call-site pairs, so call-site entries win once
/// flattened.
pub fn merge_type_revivers(
    preset: &TypeReviverMap,
    source: Option<&TypeRevivers>,
) -> TypeReviverArray {
    let mut merged = map_pairs(preset);
    if let Some(source) = source {
        merged.extend(to_type_reviver_array(source));
    }
    merged
}

pub fn flat_parse_type_revivers(pairs: &[(TypeKey, Reviver)]) -> FlatTypeRevivers {
    let mut flat = FlatTypeRevivers::default();
    for (key, reviver) in pairs {
        for name in key.names() {
            let first_seen = flat.lookup.insert(name.clone(), reviver.clone()).is_none();
            if first_seen && name != DEFAULT_TYPE_NAME {
                flat.owner_types.push(name.clone());
            }
        }
    }
    flat
}

fn map_pairs(map: &TypeReviverMap) -> TypeReviverArray {
    map.iter()
        .map(|(name, reviver)| (TypeKey::from(name), reviver.clone()))
        .collect()
}
