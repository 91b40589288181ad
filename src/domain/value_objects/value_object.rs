use std::any::Any;
use std::fmt;

use crate::domain::errors::ValidationError;
use crate::domain::value_objects::Scalar;

/// Contract for an immutable domain type wrapping a single scalar attribute
///
/// `new` is the constructor used when a raw scalar is written to the model.
/// `create` is the factory used when the stored scalar is read back. It
/// defaults to `new`.
pub trait ValueObject: fmt::Debug + Send + Sync + Sized + 'static {
    /// Build the value object from a raw scalar
    fn new(value: Scalar) -> Result<Self, ValidationError>;

    /// Factory used on the read path
    fn create(value: Scalar) -> Result<Self, ValidationError> {
        Self::new(value)
    }

    /// The underlying scalar
    fn value(&self) -> Scalar;
}

/// Type-erased view of a value object
pub trait AnyValueObject: fmt::Debug + Send + Sync {
    /// The underlying scalar
    fn scalar(&self) -> Scalar;

    /// Rust type name of the concrete value object
    fn type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync>;
}

impl<T: ValueObject> AnyValueObject for T {
    fn scalar(&self) -> Scalar {
        self.value()
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync> {
        self
    }
}

/// A model attribute as seen by callers: either a raw scalar or a value object
#[derive(Debug)]
pub enum AttributeValue {
    Scalar(Scalar),
    Object(Box<dyn AnyValueObject>),
}

impl AttributeValue {
    /// Wrap a concrete value object
    pub fn object<T: ValueObject>(value: T) -> Self {
        AttributeValue::Object(Box::new(value))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, AttributeValue::Object(_))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            AttributeValue::Scalar(s) => Some(s),
            AttributeValue::Object(_) => None,
        }
    }

    /// The raw scalar, unwrapping value objects through their accessor
    pub fn to_scalar(&self) -> Scalar {
        match self {
            AttributeValue::Scalar(s) => s.clone(),
            AttributeValue::Object(o) => o.scalar(),
        }
    }

    /// Whether this holds a value object of type `T`
    pub fn is<T: ValueObject>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    pub fn downcast_ref<T: ValueObject>(&self) -> Option<&T> {
        match self {
            AttributeValue::Object(o) => o.as_any().downcast_ref::<T>(),
            AttributeValue::Scalar(_) => None,
        }
    }

    /// Take the concrete value object out, or give `self` back unchanged
    pub fn downcast<T: ValueObject>(self) -> Result<T, Self> {
        match self {
            AttributeValue::Object(o) if o.as_any().is::<T>() => match o.into_any().downcast::<T>()
            {
                Ok(value) => Ok(*value),
                Err(_) => unreachable!("type checked before downcast"),
            },
            other => Err(other),
        }
    }

    /// Type name of the held value, for error messages
    pub fn describe(&self) -> String {
        match self {
            AttributeValue::Scalar(s) => s.kind().to_string(),
            AttributeValue::Object(o) => o.type_name().to_string(),
        }
    }
}

impl From<Scalar> for AttributeValue {
    fn from(value: Scalar) -> Self {
        AttributeValue::Scalar(value)
    }
}

impl From<Box<dyn AnyValueObject>> for AttributeValue {
    fn from(value: Box<dyn AnyValueObject>) -> Self {
        AttributeValue::Object(value)
    }
}

macro_rules! attribute_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AttributeValue {
                fn from(value: $ty) -> Self {
                    AttributeValue::Scalar(value.into())
                }
            }
        )*
    };
}

attribute_from_scalar!(bool, i32, u32, i64, f32, f64, String, &str);
