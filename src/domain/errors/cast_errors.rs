use thiserror::Error as ThisError;

use crate::domain::errors::ValidationError;

/// Errors raised while casting attributes to and from value objects
#[derive(ThisError, Debug)]
pub enum CastError {
    #[error("Attribute '{attribute}' is not cast to a value object")]
    AttributeNotCast { attribute: String },

    #[error("Value object class not registered: {class}")]
    UnknownClass { class: String },

    #[error("Resolver method not found: {class}@{method}")]
    UnknownResolver { class: String, method: String },

    #[error("Resolver {class}@{method} failed: {source}")]
    ResolverFailed {
        class: String,
        method: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid value for {class}: {source}")]
    InvalidValue {
        class: String,
        #[source]
        source: ValidationError,
    },

    #[error("Expected an instance of {expected}, got {actual}")]
    ClassMismatch { expected: String, actual: String },

    #[error("Attribute '{attribute}' cannot store value object {class} without a cast")]
    NotAScalar { attribute: String, class: String },
}

/// Result type for cast operations
pub type CastResult<T> = Result<T, CastError>;
