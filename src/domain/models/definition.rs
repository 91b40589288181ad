use bon::Builder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::models::ValueObjectCasts;

/// Describes one model class: its name and how its attributes are cast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct ModelDefinition {
    /// Fully-qualified model class name
    #[builder(into)]
    pub class: String,

    /// Attributes cast to value objects
    #[serde(default)]
    #[builder(default)]
    pub value_objects: ValueObjectCasts,

    /// Attributes flagged as enum-like
    #[serde(default)]
    #[builder(default)]
    pub enums: BTreeSet<String>,
}
