//! Type-name keyed reviver registries.

use indexmap::IndexMap;

use crate::Reviver;

/// One type name, or several sharing a reviver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKey {
    One(String),
    Many(Vec<String>),
}

impl TypeKey {
    pub fn names(&self) -> &[String] {
        match self {
            TypeKey::One(name) => std::slice::from_ref(name),
            TypeKey::Many(names) => names,
        }
    }
}

impl From<&str> for TypeKey {
    fn from(name: &str) -> Self {
        TypeKey::One(name.to_owned())
    }
}

impl From<String> for TypeKey {
    fn from(name: String) -> Self {
        TypeKey::One(name)
    }
}

impl<const N: usize> From<[&str; N]> for TypeKey {
    fn from(names: [&str; N]) -> Self {
        TypeKey::Many(names.iter().map(|name| (*name).to_owned()).collect())
    }
}

impl From<Vec<String>> for TypeKey {
    fn from(names: Vec<String>) -> Self {
        TypeKey::Many(names)
    }
}

/// Ordered `(type key, reviver)` pairs; later pairs override earlier ones.
pub type TypeReviverArray = Vec<(TypeKey, Reviver)>;

/// Map from type name to reviver. Inserting an existing name replaces its
/// reviver.
#[derive(Debug, Clone, Default)]
pub struct TypeReviverMap {
    entries: IndexMap<String, Reviver>,
}

impl TypeReviverMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `reviver` under every name of `key`.
    pub fn insert(&mut self, key: impl Into<TypeKey>, reviver: Reviver) {
        match key.into() {
            TypeKey::One(name) => {
                self.entries.insert(name, reviver);
            }
            TypeKey::Many(names) => {
                for name in names {
                    self.entries.insert(name, reviver.clone());
                }
            }
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<TypeKey>, reviver: Reviver) -> Self {
        self.insert(key, reviver);
        self
    }

    pub fn get(&self, type_name: &str) -> Option<&Reviver> {
        self.entries.get(type_name)
    }

    pub fn remove(&mut self, type_name: &str) -> Option<Reviver> {
        self.entries.shift_remove(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Reviver)> {
        self.entries.iter().map(|(name, reviver)| (name.as_str(), reviver))
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<TypeKey>> FromIterator<(K, Reviver)> for TypeReviverMap {
    fn from_iter<I: IntoIterator<Item = (K, Reviver)>>(iter: I) -> Self {
        let mut map = TypeReviverMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<TypeKey>> Extend<(K, Reviver)> for TypeReviverMap {
    fn extend<I: IntoIterator<Item = (K, Reviver)>>(&mut self, iter: I) {
        for (key, reviver) in iter {
            self.insert(key, reviver);
        }
    }
}

/// A per-call source of revivers.
#[derive(Debug, Clone)]
pub enum TypeRevivers {
    Map(TypeReviverMap),
    Array(TypeReviverArray),
}

impl TypeRevivers {
    pub fn is_empty(&self) -> bool {
        match self {
            TypeRevivers::Map(map) => map.is_empty(),
            TypeRevivers::Array(pairs) => pairs.is_empty(),
        }
    }
}

impl From<TypeReviverMap> for TypeRevivers {
    fn from(map: TypeReviverMap) -> Self {
        TypeRevivers::Map(map)
    }
}

impl From<TypeReviverArray> for TypeRevivers {
    fn from(pairs: TypeReviverArray) -> Self {
        TypeRevivers::Array(pairs)
    }
}
