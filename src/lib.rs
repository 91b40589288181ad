pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - value objects, configuration and errors
pub use domain::{
    AnyValueObject,
    AttributeValue,
    // Errors
    CastError,
    CastResult,
    ClassRef,
    // Models
    ModelDefinition,
    Scalar,
    ValidationError,
    // Value objects
    ValueObject,
    ValueObjectCasts,
};

// Port types - host model and codec interfaces
pub use ports::{AttributeCodec, ClassTable, HostModel, ValueObjectCodec};

// Service - the attribute caster
pub use services::CastsValueObjects;

// Factory and configuration
pub use app::{FactoryError, MODELS_ENV_VAR, ModelFactory};

// Adapter types - in-memory implementations
pub use adapters::outbound::{ClassRegistry, InMemoryModel, ResolverFn};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        AttributeValue, CastError, CastResult, CastsValueObjects, ClassRegistry, HostModel,
        InMemoryModel, ModelDefinition, ModelFactory, Scalar, ValidationError, ValueObject,
        ValueObjectCasts,
    };
}
