mod class_ref;
mod scalar;
mod value_object;

pub use class_ref::*;
pub use scalar::Scalar;
pub use value_object::{AnyValueObject, AttributeValue, ValueObject};
