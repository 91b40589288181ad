use crate::{
    domain::{
        errors::{CastError, CastResult},
        models::ValueObjectCasts,
        value_objects::{AttributeValue, Scalar},
    },
    ports::codec::ClassTable,
};

/// Port for the host model whose attribute pipeline gets value object casts
///
/// The `base_*` methods are the host's own accessor and mutator behavior.
/// The caster falls back to them for attributes it does not handle. The
/// provided defaults describe a plain attribute bag. Hosts with their own
/// casting, mutators or relations override them.
pub trait HostModel {
    /// Fully-qualified class name of the model
    fn class_name(&self) -> &str;

    /// Raw stored value of an attribute
    fn raw_attribute(&self, key: &str) -> Option<&Scalar>;

    /// Overwrite the raw stored value of an attribute
    fn set_raw_attribute(&mut self, key: &str, value: Scalar);

    /// The attribute to value object class mapping
    fn value_objects(&self) -> &ValueObjectCasts;

    /// Classes and resolvers visible to this model
    fn class_table(&self) -> &dyn ClassTable;

    /// Whether the attribute is flagged as enum-like
    fn is_enum_attribute(&self, _key: &str) -> bool {
        false
    }

    /// Host default for reading a plain attribute
    fn base_get_attribute_value(&self, key: &str) -> CastResult<AttributeValue> {
        Ok(AttributeValue::Scalar(
            self.raw_attribute(key).cloned().unwrap_or_default(),
        ))
    }

    /// Host default for reading any attribute
    fn base_get_attribute(&self, key: &str) -> CastResult<AttributeValue> {
        self.base_get_attribute_value(key)
    }

    /// Host default for writing an attribute
    fn base_set_attribute(&mut self, key: &str, value: AttributeValue) -> CastResult<()> {
        match value {
            AttributeValue::Scalar(raw) => {
                self.set_raw_attribute(key, raw);
                Ok(())
            }
            AttributeValue::Object(object) => Err(CastError::NotAScalar {
                attribute: key.to_string(),
                class: object.type_name().to_string(),
            }),
        }
    }
}
