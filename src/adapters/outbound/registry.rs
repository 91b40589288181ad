use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{
    domain::{
        errors::{CastError, CastResult},
        value_objects::{normalize_class, ValueObject},
    },
    ports::codec::{AttributeCodec, ClassTable, ValueObjectCodec},
};

/// A resolver method: returns the name of a value object class
pub type ResolverFn = Arc<dyn Fn() -> anyhow::Result<String> + Send + Sync>;

/// In-memory table of value object classes and resolver methods
///
/// Class names are stored without leading namespace separators, so
/// `\App\Money` and `App\Money` find the same entry. Registering a name twice
/// keeps the last registration.
#[derive(Clone, Default)]
pub struct ClassRegistry {
    codecs: HashMap<String, Arc<dyn AttributeCodec>>,
    resolvers: HashMap<(String, String), ResolverFn>,
}

impl ClassRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a value object type under a class name
    pub fn register<T: ValueObject>(self, class: impl Into<String>) -> Self {
        let class = class.into();
        let codec = ValueObjectCodec::<T>::new(normalize_class(&class));
        self.register_codec(Arc::new(codec))
    }

    /// Register a hand-written codec under its own class name
    pub fn register_codec(mut self, codec: Arc<dyn AttributeCodec>) -> Self {
        let class = normalize_class(codec.class_name()).to_string();
        self.codecs.insert(class, codec);
        self
    }

    /// Register a resolver method that always succeeds
    pub fn resolver<F, S>(self, class: impl Into<String>, method: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> S + Send + Sync + 'static,
        S: Into<String>,
    {
        self.try_resolver(class, method, move || Ok(f().into()))
    }

    /// Register a resolver method that may fail
    pub fn try_resolver<F>(
        mut self,
        class: impl Into<String>,
        method: impl Into<String>,
        f: F,
    ) -> Self
    where
        F: Fn() -> anyhow::Result<String> + Send + Sync + 'static,
    {
        let class = normalize_class(&class.into()).to_string();
        self.resolvers.insert((class, method.into()), Arc::new(f));
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.codecs.contains_key(normalize_class(class))
    }

    pub fn has_resolver(&self, class: &str, method: &str) -> bool {
        self.resolvers
            .contains_key(&(normalize_class(class).to_string(), method.to_string()))
    }

    /// Registered value object class names, sorted
    pub fn classes(&self) -> Vec<&str> {
        let mut classes: Vec<&str> = self.codecs.keys().map(String::as_str).collect();
        classes.sort_unstable();
        classes
    }
}

impl ClassTable for ClassRegistry {
    fn codec(&self, class: &str) -> CastResult<Arc<dyn AttributeCodec>> {
        let name = normalize_class(class);
        match self.codecs.get(name) {
            Some(codec) => Ok(codec.clone()),
            None => {
                warn!(class = name, "value object class not registered");
                Err(CastError::UnknownClass {
                    class: name.to_string(),
                })
            }
        }
    }

    fn resolve(&self, class: &str, method: &str) -> CastResult<String> {
        let name = normalize_class(class);
        let resolver = self
            .resolvers
            .get(&(name.to_string(), method.to_string()))
            .ok_or_else(|| {
                warn!(class = name, method, "resolver method not registered");
                CastError::UnknownResolver {
                    class: name.to_string(),
                    method: method.to_string(),
                }
            })?;

        let resolved = resolver().map_err(|e| CastError::ResolverFailed {
            class: name.to_string(),
            method: method.to_string(),
            source: e.into(),
        })?;

        debug!(class = name, method, resolved = %resolved, "resolved value object class");
        Ok(resolved)
    }
}

impl std::fmt::Debug for ClassRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut resolvers: Vec<String> = self
            .resolvers
            .keys()
            .map(|(class, method)| format!("{}@{}", class, method))
            .collect();
        resolvers.sort_unstable();

        f.debug_struct("ClassRegistry")
            .field("classes", &self.classes())
            .field("resolvers", &resolvers)
            .finish()
    }
}
