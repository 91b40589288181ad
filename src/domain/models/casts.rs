use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::value_objects::ClassRef;

/// Per-model mapping of attribute name to value object class reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct ValueObjectCasts {
    entries: BTreeMap<String, ClassRef>,
}

impl ValueObjectCasts {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cast, builder style
    pub fn with(mut self, attribute: impl Into<String>, reference: impl Into<ClassRef>) -> Self {
        self.insert(attribute, reference);
        self
    }

    /// Add or replace the cast for an attribute
    pub fn insert(&mut self, attribute: impl Into<String>, reference: impl Into<ClassRef>) {
        self.entries.insert(attribute.into(), reference.into());
    }

    pub fn get(&self, attribute: &str) -> Option<&ClassRef> {
        self.entries.get(attribute)
    }

    pub fn contains(&self, attribute: &str) -> bool {
        self.entries.contains_key(attribute)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ClassRef)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<BTreeMap<String, String>> for ValueObjectCasts {
    fn from(raw: BTreeMap<String, String>) -> Self {
        raw.into_iter().collect()
    }
}

impl From<ValueObjectCasts> for BTreeMap<String, String> {
    fn from(casts: ValueObjectCasts) -> Self {
        casts
            .entries
            .into_iter()
            .map(|(attribute, reference)| (attribute, reference.to_string()))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for ValueObjectCasts
where
    K: Into<String>,
    V: Into<ClassRef>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut casts = Self::new();
        for (attribute, reference) in iter {
            casts.insert(attribute, reference);
        }
        casts
    }
}
