use std::marker::PhantomData;
use std::sync::Arc;

use crate::domain::{
    errors::{CastError, CastResult},
    value_objects::{AttributeValue, Scalar, ValueObject},
};

/// Converts one attribute between its stored scalar and its value object
pub trait AttributeCodec: std::fmt::Debug + Send + Sync {
    /// Fully-qualified class name the codec is registered under
    fn class_name(&self) -> &str;

    /// Build the value object from the stored scalar (read path)
    fn decode(&self, raw: Scalar) -> CastResult<AttributeValue>;

    /// Reduce an incoming value to the scalar to store (write path)
    fn encode(&self, value: AttributeValue) -> CastResult<Scalar>;
}

/// Lookup table of value object classes and class resolvers
pub trait ClassTable: Send + Sync {
    /// The codec registered for a value object class
    fn codec(&self, class: &str) -> CastResult<Arc<dyn AttributeCodec>>;

    /// Call resolver `method` on `class`, returning a value object class name
    fn resolve(&self, class: &str, method: &str) -> CastResult<String>;
}

/// Codec backed by a [`ValueObject`] implementation
pub struct ValueObjectCodec<T> {
    class_name: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T: ValueObject> ValueObjectCodec<T> {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            _marker: PhantomData,
        }
    }

    fn invalid(&self, source: crate::domain::errors::ValidationError) -> CastError {
        CastError::InvalidValue {
            class: self.class_name.clone(),
            source,
        }
    }
}

impl<T: ValueObject> AttributeCodec for ValueObjectCodec<T> {
    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn decode(&self, raw: Scalar) -> CastResult<AttributeValue> {
        T::create(raw)
            .map(AttributeValue::object)
            .map_err(|e| self.invalid(e))
    }

    fn encode(&self, value: AttributeValue) -> CastResult<Scalar> {
        let instance = match value {
            AttributeValue::Scalar(raw) => T::new(raw).map_err(|e| self.invalid(e))?,
            other => other.downcast::<T>().map_err(|other| CastError::ClassMismatch {
                expected: self.class_name.clone(),
                actual: other.describe(),
            })?,
        };

        Ok(instance.value())
    }
}

impl<T> std::fmt::Debug for ValueObjectCodec<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueObjectCodec")
            .field("class_name", &self.class_name)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}
