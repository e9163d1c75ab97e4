//! Registered field access capabilities.

use crate::descriptor::FieldDescriptor;
use crate::error::{AccessFault, ExternalizeResult};
use crate::value::FieldValue;
use std::any::Any;
use std::fmt;

type Getter<V> = Box<dyn Fn(&dyn Any) -> Option<V> + Send + Sync>;
type Setter<V> = Box<dyn Fn(&mut dyn Any, V) -> Option<()> + Send + Sync>;

/// Reads and writes one field of one type through registered functions.
///
/// Instances are passed type-erased so a plan can drive any type; an instance
/// of the wrong type is reported as [`AccessFault::WrongInstance`] instead of
/// being touched.
pub struct FieldAccessor<V> {
    descriptor: FieldDescriptor,
    getter: Getter<V>,
    setter: Option<Setter<V>>,
}

impl<V: FieldValue> FieldAccessor<V> {
    /// Accessor with both get and set capabilities.
    pub fn new<T: Any>(name: &'static str, getter: fn(&T) -> V, setter: fn(&mut T, V)) -> Self {
        Self {
            descriptor: FieldDescriptor::of::<T, V>(name),
            getter: Box::new(move |instance: &dyn Any| instance.downcast_ref::<T>().map(getter)),
            setter: Some(Box::new(move |instance: &mut dyn Any, value: V| {
                instance
                    .downcast_mut::<T>()
                    .map(|target| setter(target, value))
            })),
        }
    }

    /// Accessor that can only read the field (derived or computed values).
    pub fn read_only<T: Any>(name: &'static str, getter: fn(&T) -> V) -> Self {
        Self {
            descriptor: FieldDescriptor::of::<T, V>(name),
            getter: Box::new(move |instance: &dyn Any| instance.downcast_ref::<T>().map(getter)),
            setter: None,
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    /// Returns true if `instance` is of the type declaring this field.
    #[must_use]
    pub fn accepts(&self, instance: &dyn Any) -> bool {
        instance.type_id() == self.descriptor.owner()
    }

    /// Returns true if the field can be written back.
    #[must_use]
    pub fn can_set(&self) -> bool {
        self.setter.is_some()
    }

    /// Reads the field's current value out of `instance`.
    pub fn get(&self, instance: &dyn Any) -> ExternalizeResult<V> {
        (self.getter)(instance).ok_or_else(|| self.wrong_instance().into())
    }

    /// Stores `value` into the field of `instance`.
    pub fn set(&self, instance: &mut dyn Any, value: V) -> ExternalizeResult<()> {
        let setter = self.setter.as_ref().ok_or_else(|| self.missing_setter())?;
        setter(instance, value).ok_or_else(|| self.wrong_instance().into())
    }

    /// Checks that [`FieldAccessor::set`] would succeed on `instance`
    /// without producing a value first.
    pub fn ensure_settable(&self, instance: &dyn Any) -> ExternalizeResult<()> {
        if !self.can_set() {
            return Err(self.missing_setter().into());
        }
        if !self.accepts(instance) {
            return Err(self.wrong_instance().into());
        }
        Ok(())
    }

    fn wrong_instance(&self) -> AccessFault {
        AccessFault::WrongInstance {
            field: self.descriptor.name(),
            owner: self.descriptor.owner_name(),
        }
    }

    fn missing_setter(&self) -> AccessFault {
        AccessFault::CapabilityUnavailable {
            field: self.descriptor.name(),
            owner: self.descriptor.owner_name(),
            capability: "set",
        }
    }
}

impl<V> fmt::Debug for FieldAccessor<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("descriptor", &self.descriptor)
            .field("settable", &self.setter.is_some())
            .finish()
    }
}
