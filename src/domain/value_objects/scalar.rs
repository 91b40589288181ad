use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// A raw attribute value as held by the model's attribute store
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl Scalar {
    /// Name of the scalar kind, used in validation messages
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
            Scalar::String(_) => "string",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Integers widen to floats; nothing else converts
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(i) => Some(*i as f64),
            Scalar::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Take the string out of a string scalar, or fail with a type error
    pub fn into_string(self) -> Result<String, ValidationError> {
        match self {
            Scalar::String(s) => Ok(s),
            Scalar::Null => Err(ValidationError::NullNotAllowed),
            other => Err(ValidationError::unexpected_type("string", other.kind())),
        }
    }

    /// Read an integer, or fail with a type error
    pub fn to_i64(&self) -> Result<i64, ValidationError> {
        match self {
            Scalar::Null => Err(ValidationError::NullNotAllowed),
            other => other
                .as_i64()
                .ok_or_else(|| ValidationError::unexpected_type("int", other.kind())),
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::String(s) => write!(f, "{}", s),
        }
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Scalar::$variant(value.into())
                }
            }
        )*
    };
}

scalar_from! {
    bool => Bool,
    i32 => Int,
    u32 => Int,
    i64 => Int,
    f32 => Float,
    f64 => Float,
    String => String,
    &str => String,
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Scalar::Null, Into::into)
    }
}

impl From<Scalar> for serde_json::Value {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Null => serde_json::Value::Null,
            Scalar::Bool(b) => serde_json::Value::Bool(b),
            Scalar::Int(i) => serde_json::Value::from(i),
            Scalar::Float(f) => serde_json::Value::from(f),
            Scalar::String(s) => serde_json::Value::String(s),
        }
    }
}

impl TryFrom<serde_json::Value> for Scalar {
    type Error = ValidationError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Ok(Scalar::Null),
            serde_json::Value::Bool(b) => Ok(Scalar::Bool(b)),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Scalar::Int(i)),
                None => n.as_f64().map(Scalar::Float).ok_or_else(|| {
                    ValidationError::InvalidFormat {
                        value: n.to_string(),
                        expected: "64-bit number".to_string(),
                    }
                }),
            },
            serde_json::Value::String(s) => Ok(Scalar::String(s)),
            serde_json::Value::Array(_) => Err(ValidationError::unexpected_type("scalar", "array")),
            serde_json::Value::Object(_) => {
                Err(ValidationError::unexpected_type("scalar", "object"))
            }
        }
    }
}
