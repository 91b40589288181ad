use tracing::{debug, trace};

use crate::{
    domain::{
        errors::{CastError, CastResult},
        value_objects::{is_qualified, qualify_in_namespace, AttributeValue, ClassRef, ValueObject},
    },
    ports::host::HostModel,
};

/// Value object casting for host model attributes
///
/// Attributes listed in the model's value object casts read as value objects
/// and store their unwrapped scalar. Every other attribute goes through the
/// host's `base_*` accessors unchanged. Implemented for every [`HostModel`].
pub trait CastsValueObjects: HostModel {
    /// Read a plain attribute, building a value object for cast attributes
    ///
    /// Only single-column value objects are supported, and the read path
    /// always goes through [`ValueObject::create`].
    fn get_attribute_value(&self, key: &str) -> CastResult<AttributeValue> {
        if self.is_value_object_attribute(key) {
            let class = self.value_object_class(key)?;
            let codec = self.class_table().codec(&class)?;
            let raw = self.raw_attribute(key).cloned().unwrap_or_default();

            trace!(attribute = key, class = %class, raw = %raw, "casting attribute to value object");
            return codec.decode(raw);
        }

        self.base_get_attribute_value(key)
    }

    /// Read an attribute
    ///
    /// Cast and enum-like attributes are routed through
    /// [`get_attribute_value`](Self::get_attribute_value). Everything else
    /// goes to the host's generic getter.
    fn get_attribute(&self, key: &str) -> CastResult<AttributeValue> {
        if self.is_value_object_attribute(key) || self.is_enum_attribute(key) {
            return self.get_attribute_value(key);
        }

        self.base_get_attribute(key)
    }

    /// Write an attribute, storing the unwrapped scalar for cast attributes
    fn set_attribute<V>(&mut self, key: &str, value: V) -> CastResult<&mut Self>
    where
        V: Into<AttributeValue>,
        Self: Sized,
    {
        let value = value.into();

        if self.is_value_object_attribute(key) {
            let class = self.value_object_class(key)?;
            let codec = self.class_table().codec(&class)?;
            let raw = codec.encode(value)?;

            trace!(attribute = key, class = %class, raw = %raw, "storing value object scalar");
            self.set_raw_attribute(key, raw);
            return Ok(self);
        }

        self.base_set_attribute(key, value)?;
        Ok(self)
    }

    /// Whether the attribute is cast to a value object
    fn is_value_object_attribute(&self, key: &str) -> bool {
        self.value_objects().contains(key)
    }

    /// Resolve the value object class name for a cast attribute
    ///
    /// A `Resolver@method` reference calls the resolver to get the class. A
    /// resolver name without namespace is looked up next to the model:
    /// `StatusResolver` on `App\Models\Order` means
    /// `App\Models\StatusResolver`. A leading `\` opts out of that.
    fn value_object_class(&self, key: &str) -> CastResult<String> {
        let reference = self
            .value_objects()
            .get(key)
            .ok_or_else(|| CastError::AttributeNotCast {
                attribute: key.to_string(),
            })?;

        match reference {
            ClassRef::Direct(class) => Ok(class.clone()),
            ClassRef::Resolved { resolver, method } => {
                let resolver = if is_qualified(resolver) {
                    resolver.clone()
                } else {
                    let qualified = qualify_in_namespace(self.class_name(), resolver);
                    debug!(
                        model = self.class_name(),
                        resolver = %qualified,
                        "resolver class taken from model namespace"
                    );
                    qualified
                };

                self.class_table().resolve(&resolver, method)
            }
        }
    }

    /// Read a cast attribute as a concrete value object type
    fn value_object<T: ValueObject>(&self, key: &str) -> CastResult<T> {
        let value = self.get_attribute_value(key)?;
        value.downcast::<T>().map_err(|other| CastError::ClassMismatch {
            expected: std::any::type_name::<T>().to_string(),
            actual: other.describe(),
        })
    }

    /// Write several attributes in order, stopping at the first failure
    fn fill<I, K, V>(&mut self, attributes: I) -> CastResult<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<AttributeValue>,
        Self: Sized,
    {
        for (key, value) in attributes {
            self.set_attribute(key.as_ref(), value)?;
        }
        Ok(self)
    }
}

impl<M: HostModel + ?Sized> CastsValueObjects for M {}
