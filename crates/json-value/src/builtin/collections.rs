use crate::{CustomValue, Value};

/// Insertion-ordered map whose keys may be any value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderedMap(pub Vec<(Value, Value)>);

impl OrderedMap {
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.0
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value)
    }

    /// Replaces the value of an existing key in place, appends otherwise.
    pub fn insert(&mut self, key: Value, value: Value) {
        match self.0.iter_mut().find(|(candidate, _)| *candidate == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl CustomValue for OrderedMap {
    fn type_name(&self) -> &str {
        super::MAP
    }
}

/// Insertion-ordered set of values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderedSet(pub Vec<Value>);

impl OrderedSet {
    pub fn contains(&self, value: &Value) -> bool {
        self.0.contains(value)
    }

    /// Returns `false` if the value was already present.
    pub fn insert(&mut self, value: Value) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.0.push(value);
        true
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl CustomValue for OrderedSet {
    fn type_name(&self) -> &str {
        super::SET
    }
}
