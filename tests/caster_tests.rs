mod common;

use common::{init_tracing, order, Email, Money, OrderStatus};
use std::cell::RefCell;
use std::sync::Arc;
use value_object_casts::prelude::*;
use value_object_casts::ClassTable;

#[test]
fn round_trip_scalar_write_then_read() {
    init_tracing();
    let mut order = order();

    order.set_attribute("discount", 250).unwrap();
    let discount = order.get_attribute_value("discount").unwrap();

    assert_eq!(discount.downcast_ref::<Money>(), Some(&Money { cents: 250 }));
    assert_eq!(discount.to_scalar(), Scalar::Int(250));
}

#[test]
fn generic_getter_casts_attributes_without_enum_flag() {
    let mut order = order();
    order.set_attribute("discount", 250).unwrap();

    let discount = order.get_attribute("discount").unwrap();
    assert_eq!(discount.downcast_ref::<Money>(), Some(&Money { cents: 250 }));

    order.set_attribute("email", "ops@example.com").unwrap();
    let email = order.get_attribute("email").unwrap();
    assert_eq!(email.downcast_ref::<Email>().unwrap().as_str(), "ops@example.com");
}

#[test]
fn raw_store_holds_unwrapped_scalar() {
    let mut order = order();

    order
        .set_attribute("discount", AttributeValue::object(Money { cents: 75 }))
        .unwrap();

    assert_eq!(order.raw_attribute("discount"), Some(&Scalar::Int(75)));
}

#[test]
fn writing_instance_equals_writing_its_scalar() {
    let mut with_object = order();
    let mut with_scalar = order();
    let money = Money { cents: 999 };

    with_object
        .set_attribute("total", AttributeValue::object(money.clone()))
        .unwrap();
    with_scalar.set_attribute("total", money.value()).unwrap();

    assert_eq!(with_object.raw_attributes(), with_scalar.raw_attributes());
}

#[test]
fn each_read_builds_a_fresh_value_object() {
    let mut order = order();
    order.set_attribute("discount", 10).unwrap();

    let first = order.value_object::<Money>("discount").unwrap();
    order.set_attribute("discount", 20).unwrap();
    let second = order.value_object::<Money>("discount").unwrap();

    assert_eq!(first.cents, 10);
    assert_eq!(second.cents, 20);
}

#[test]
fn read_uses_factory_and_write_uses_constructor() {
    let mut order = order().with_raw_attributes([("email", "Legacy-Import")]);

    // stored data is trusted by the factory
    let email = order.value_object::<Email>("email").unwrap();
    assert_eq!(email.as_str(), "Legacy-Import");

    // the constructor validates
    let err = order.set_attribute("email", "Legacy-Import").unwrap_err();
    assert!(matches!(err, CastError::InvalidValue { ref class, .. } if class == "App\\ValueObjects\\Email"));

    order.set_attribute("email", "Jane@Example.com").unwrap();
    assert_eq!(
        order.raw_attribute("email"),
        Some(&Scalar::from("jane@example.com"))
    );
}

#[test]
fn missing_attribute_reads_as_null_through_factory() {
    let order = order();

    let err = order.get_attribute_value("discount").unwrap_err();
    assert!(matches!(
        err,
        CastError::InvalidValue {
            source: ValidationError::NullNotAllowed,
            ..
        }
    ));
    assert_eq!(
        std::error::Error::source(&err).map(|e| e.to_string()),
        Some("Value cannot be null".to_string())
    );
}

#[test]
fn uncast_attributes_pass_through() {
    let mut cast = order();
    let mut plain = order();

    cast.set_attribute("number", "PO-1001").unwrap();
    plain
        .base_set_attribute("number", AttributeValue::from("PO-1001"))
        .unwrap();
    assert_eq!(cast.raw_attributes(), plain.raw_attributes());

    let via_caster = cast.get_attribute_value("number").unwrap();
    let via_host = plain.base_get_attribute_value("number").unwrap();
    assert_eq!(via_caster.as_scalar(), via_host.as_scalar());

    let via_caster = cast.get_attribute("notes").unwrap();
    let via_host = plain.base_get_attribute("notes").unwrap();
    assert_eq!(via_caster.as_scalar(), via_host.as_scalar());
}

#[test]
fn uncast_attribute_rejects_value_objects_like_the_host() {
    let mut order = order();

    let err = order
        .set_attribute("number", AttributeValue::object(Money { cents: 1 }))
        .unwrap_err();

    assert!(matches!(err, CastError::NotAScalar { ref attribute, .. } if attribute == "number"));
}

#[test]
fn wrong_value_object_class_is_rejected() {
    let mut order = order();

    let err = order
        .set_attribute("discount", AttributeValue::object(Email::new("a@b.c".into()).unwrap()))
        .unwrap_err();

    assert!(matches!(err, CastError::ClassMismatch { ref expected, .. } if expected == "Money"));
    assert_eq!(order.raw_attribute("discount"), None);
}

#[test]
fn fill_stops_at_first_failure() {
    let mut order = order();

    let result = order.fill([
        ("number", AttributeValue::from("PO-2")),
        ("discount", AttributeValue::from(-5)),
        ("email", AttributeValue::from("ops@example.com")),
    ]);

    assert!(result.is_err());
    assert_eq!(order.raw_attribute("number"), Some(&Scalar::from("PO-2")));
    assert_eq!(order.raw_attribute("discount"), None);
    assert_eq!(order.raw_attribute("email"), None);
}

#[test]
fn enum_attribute_reads_through_value_object_path() {
    let mut order = order();
    order.set_attribute("status", "paid").unwrap();

    let status = order.get_attribute("status").unwrap();
    assert_eq!(status.downcast_ref::<OrderStatus>().unwrap().as_str(), "paid");
}

/// Host whose generic getter differs from its plain attribute getter
struct RecordingHost {
    attributes: std::collections::BTreeMap<String, Scalar>,
    value_objects: ValueObjectCasts,
    registry: Arc<ClassRegistry>,
    calls: RefCell<Vec<String>>,
}

impl RecordingHost {
    fn new() -> Self {
        Self {
            attributes: [("priority".to_string(), Scalar::from("high"))]
                .into_iter()
                .collect(),
            value_objects: ValueObjectCasts::new(),
            registry: Arc::new(common::registry()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl HostModel for RecordingHost {
    fn class_name(&self) -> &str {
        common::ORDER
    }

    fn raw_attribute(&self, key: &str) -> Option<&Scalar> {
        self.attributes.get(key)
    }

    fn set_raw_attribute(&mut self, key: &str, value: Scalar) {
        self.attributes.insert(key.to_string(), value);
    }

    fn value_objects(&self) -> &ValueObjectCasts {
        &self.value_objects
    }

    fn class_table(&self) -> &dyn ClassTable {
        &*self.registry
    }

    fn is_enum_attribute(&self, key: &str) -> bool {
        key == "priority"
    }

    fn base_get_attribute_value(&self, key: &str) -> CastResult<AttributeValue> {
        self.calls
            .borrow_mut()
            .push(format!("base_get_attribute_value:{}", key));
        Ok(AttributeValue::Scalar(
            self.raw_attribute(key).cloned().unwrap_or_default(),
        ))
    }

    fn base_get_attribute(&self, key: &str) -> CastResult<AttributeValue> {
        self.calls
            .borrow_mut()
            .push(format!("base_get_attribute:{}", key));
        Ok(AttributeValue::from("relation"))
    }
}

#[test]
fn enum_flag_without_cast_falls_through_to_host_attribute_value() {
    let host = RecordingHost::new();

    let priority = host.get_attribute("priority").unwrap();
    assert_eq!(priority.as_scalar(), Some(&Scalar::from("high")));

    let other = host.get_attribute("customer").unwrap();
    assert_eq!(other.as_scalar(), Some(&Scalar::from("relation")));

    assert_eq!(
        *host.calls.borrow(),
        vec![
            "base_get_attribute_value:priority".to_string(),
            "base_get_attribute:customer".to_string(),
        ]
    );
}
