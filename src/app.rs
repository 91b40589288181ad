use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::{
    adapters::outbound::{ClassRegistry, InMemoryModel},
    domain::{
        models::ModelDefinition,
        value_objects::{normalize_class, Scalar},
    },
};

/// Environment variable naming a JSON file of model definitions
pub const MODELS_ENV_VAR: &str = "VALUE_OBJECT_MODELS";

/// Builds in-memory models from their definitions, sharing one class registry
#[derive(Debug, Clone)]
pub struct ModelFactory {
    registry: Arc<ClassRegistry>,
    definitions: HashMap<String, ModelDefinition>,
}

impl ModelFactory {
    /// Create a factory with no model definitions
    pub fn new(registry: ClassRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            definitions: HashMap::new(),
        }
    }

    /// Add a model definition, replacing one with the same class
    pub fn with_definition(mut self, definition: ModelDefinition) -> Self {
        let class = normalize_class(&definition.class).to_string();
        self.definitions.insert(class, definition);
        self
    }

    /// Load definitions from a JSON array
    pub fn from_json_str(json: &str, registry: ClassRegistry) -> Result<Self, FactoryError> {
        let definitions: Vec<ModelDefinition> = serde_json::from_str(json)?;
        let count = definitions.len();

        let factory = definitions
            .into_iter()
            .fold(Self::new(registry), Self::with_definition);

        info!(models = count, "loaded model definitions");
        Ok(factory)
    }

    /// Load definitions from a JSON file
    pub fn from_file(path: impl AsRef<Path>, registry: ClassRegistry) -> Result<Self, FactoryError> {
        let path = path.as_ref();
        info!(path = %path.display(), "reading model definitions");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json, registry)
    }

    /// Load definitions from the file named by `VALUE_OBJECT_MODELS`
    pub fn from_env(registry: ClassRegistry) -> Result<Self, FactoryError> {
        let path = std::env::var(MODELS_ENV_VAR).map_err(|_| FactoryError::Configuration {
            message: format!("{} environment variable required", MODELS_ENV_VAR),
        })?;
        Self::from_file(path, registry)
    }

    pub fn definition(&self, class: &str) -> Option<&ModelDefinition> {
        self.definitions.get(normalize_class(class))
    }

    pub fn registry(&self) -> &Arc<ClassRegistry> {
        &self.registry
    }

    /// Create an empty model of a defined class
    pub fn make(&self, class: &str) -> Result<InMemoryModel, FactoryError> {
        let definition = self
            .definition(class)
            .ok_or_else(|| FactoryError::UnknownModel {
                class: class.to_string(),
            })?;

        Ok(InMemoryModel::from_definition(
            definition,
            self.registry.clone(),
        ))
    }

    /// Create a model of a defined class from stored scalars
    ///
    /// The scalars are loaded as they are, without casting, like a row read
    /// back from storage.
    pub fn hydrate<I, K, V>(&self, class: &str, attributes: I) -> Result<InMemoryModel, FactoryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Scalar>,
    {
        Ok(self.make(class)?.with_raw_attributes(attributes))
    }
}

/// Errors raised while setting up the model factory
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Unknown model class: {class}")]
    UnknownModel { class: String },

    #[error("Failed to parse model definitions: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read model definitions: {0}")]
    Io(#[from] std::io::Error),
}
