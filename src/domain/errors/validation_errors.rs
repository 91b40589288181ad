/// Validation errors raised by value object constructors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    // Scalar shape errors
    UnexpectedType {
        expected: String,
        actual: String,
    },
    NullNotAllowed,

    // Content errors
    Empty,
    InvalidFormat {
        value: String,
        expected: String,
    },
    OutOfRange {
        value: String,
        min: Option<String>,
        max: Option<String>,
    },
    NotAllowed {
        value: String,
        allowed: Vec<String>,
    },
}

impl ValidationError {
    /// Shorthand for a type mismatch against a scalar kind
    pub fn unexpected_type(expected: &str, actual: &str) -> Self {
        ValidationError::UnexpectedType {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::UnexpectedType { expected, actual } => {
                write!(f, "Expected {} value, got {}", expected, actual)
            }
            ValidationError::NullNotAllowed => write!(f, "Value cannot be null"),

            ValidationError::Empty => write!(f, "Value cannot be empty"),
            ValidationError::InvalidFormat { value, expected } => {
                write!(f, "Invalid format: '{}' (expected: {})", value, expected)
            }
            ValidationError::OutOfRange { value, min, max } => {
                let mut msg = format!("Value out of range: {}", value);
                if let Some(min) = min {
                    msg.push_str(&format!(" (min: {})", min));
                }
                if let Some(max) = max {
                    msg.push_str(&format!(" (max: {})", max));
                }
                write!(f, "{}", msg)
            }
            ValidationError::NotAllowed { value, allowed } => {
                write!(
                    f,
                    "Value '{}' is not allowed. Allowed values: {}",
                    value,
                    allowed.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}
