#![allow(dead_code)]

use std::sync::Arc;
use value_object_casts::prelude::*;

pub const ORDER: &str = "App\\Models\\Order";

/// Install a test-friendly subscriber once; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// An amount in minor currency units
#[derive(Debug, Clone, PartialEq)]
pub struct Money {
    pub cents: i64,
}

impl ValueObject for Money {
    fn new(value: Scalar) -> Result<Self, ValidationError> {
        let cents = value.to_i64()?;
        if cents < 0 {
            return Err(ValidationError::OutOfRange {
                value: cents.to_string(),
                min: Some("0".to_string()),
                max: None,
            });
        }
        Ok(Self { cents })
    }

    fn value(&self) -> Scalar {
        Scalar::Int(self.cents)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderStatus(String);

impl OrderStatus {
    pub const ALLOWED: [&'static str; 3] = ["new", "paid", "shipped"];

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for OrderStatus {
    fn new(value: Scalar) -> Result<Self, ValidationError> {
        let status = value.into_string()?;
        if !Self::ALLOWED.contains(&status.as_str()) {
            return Err(ValidationError::NotAllowed {
                value: status,
                allowed: Self::ALLOWED.iter().map(|s| s.to_string()).collect(),
            });
        }
        Ok(Self(status))
    }

    fn value(&self) -> Scalar {
        Scalar::String(self.0.clone())
    }
}

/// Legacy-status variant returned by a different resolver
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyStatus(String);

impl ValueObject for LegacyStatus {
    fn new(value: Scalar) -> Result<Self, ValidationError> {
        Ok(Self(value.into_string()?))
    }

    fn value(&self) -> Scalar {
        Scalar::String(self.0.clone())
    }
}

/// Strict on write, lenient on read: stored rows predate the validation
#[derive(Debug, Clone, PartialEq)]
pub struct Email(String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Email {
    fn new(value: Scalar) -> Result<Self, ValidationError> {
        let email = value.into_string()?;
        if !email.contains('@') {
            return Err(ValidationError::InvalidFormat {
                value: email,
                expected: "an address containing '@'".to_string(),
            });
        }
        Ok(Self(email.to_lowercase()))
    }

    fn create(value: Scalar) -> Result<Self, ValidationError> {
        Ok(Self(value.into_string()?))
    }

    fn value(&self) -> Scalar {
        Scalar::String(self.0.clone())
    }
}

/// Value objects and resolvers shared by the integration tests
pub fn registry() -> ClassRegistry {
    ClassRegistry::new()
        .register::<Money>("Money")
        .register::<OrderStatus>("App\\Enums\\OrderStatus")
        .register::<LegacyStatus>("Legacy\\Status")
        .register::<Email>("App\\ValueObjects\\Email")
        .resolver("App\\Models\\PriceResolver", "forCurrency", || "Money")
        .resolver("App\\Models\\StatusResolver", "current", || {
            "App\\Enums\\OrderStatus"
        })
        .resolver("StatusResolver", "current", || "Legacy\\Status")
}

/// An order model with every flavor of class reference
pub fn order() -> InMemoryModel {
    InMemoryModel::new(ORDER, Arc::new(registry()))
        .with_value_objects(
            ValueObjectCasts::new()
                .with("total", "PriceResolver@forCurrency")
                .with("status", "StatusResolver@current")
                .with("legacy_status", "\\StatusResolver@current")
                .with("email", "App\\ValueObjects\\Email")
                .with("discount", "\\Money"),
        )
        .with_enum("status")
        .with_enum("priority")
}
