use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::{
    adapters::outbound::registry::ClassRegistry,
    domain::{
        models::{ModelDefinition, ValueObjectCasts},
        value_objects::Scalar,
    },
    ports::{codec::ClassTable, host::HostModel},
};

/// A host model that keeps its raw attributes in memory
///
/// It relies on the default host behavior of [`HostModel`]: missing
/// attributes read as null, scalars are stored as given, and value objects on
/// uncast attributes are rejected.
#[derive(Debug, Clone)]
pub struct InMemoryModel {
    class: String,
    attributes: BTreeMap<String, Scalar>,
    value_objects: ValueObjectCasts,
    enums: BTreeSet<String>,
    registry: Arc<ClassRegistry>,
}

impl InMemoryModel {
    /// Create an empty model of the given class
    pub fn new(class: impl Into<String>, registry: Arc<ClassRegistry>) -> Self {
        Self {
            class: class.into(),
            attributes: BTreeMap::new(),
            value_objects: ValueObjectCasts::default(),
            enums: BTreeSet::new(),
            registry,
        }
    }

    /// Create an empty model from a definition
    pub fn from_definition(definition: &ModelDefinition, registry: Arc<ClassRegistry>) -> Self {
        Self {
            class: definition.class.clone(),
            attributes: BTreeMap::new(),
            value_objects: definition.value_objects.clone(),
            enums: definition.enums.clone(),
            registry,
        }
    }

    /// Replace the value object casts
    pub fn with_value_objects(mut self, value_objects: ValueObjectCasts) -> Self {
        self.value_objects = value_objects;
        self
    }

    /// Flag an attribute as enum-like
    pub fn with_enum(mut self, attribute: impl Into<String>) -> Self {
        self.enums.insert(attribute.into());
        self
    }

    /// Load stored scalars as-is, bypassing any casting
    pub fn with_raw_attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Scalar>,
    {
        self.attributes
            .extend(attributes.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// All raw stored attributes
    pub fn raw_attributes(&self) -> &BTreeMap<String, Scalar> {
        &self.attributes
    }

    pub fn registry(&self) -> &Arc<ClassRegistry> {
        &self.registry
    }
}

impl HostModel for InMemoryModel {
    fn class_name(&self) -> &str {
        &self.class
    }

    fn raw_attribute(&self, key: &str) -> Option<&Scalar> {
        self.attributes.get(key)
    }

    fn set_raw_attribute(&mut self, key: &str, value: Scalar) {
        self.attributes.insert(key.to_string(), value);
    }

    fn value_objects(&self) -> &ValueObjectCasts {
        &self.value_objects
    }

    fn class_table(&self) -> &dyn ClassTable {
        &*self.registry
    }

    fn is_enum_attribute(&self, key: &str) -> bool {
        self.enums.contains(key)
    }
}
