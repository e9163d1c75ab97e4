//! Per-type externalization plans.

use crate::error::{ExternalizorError, ExternalizorResult};
use crate::reference::ReferenceFieldExternalizer;
use externalizor_core::{
    AccessMode, Dispatch, ExternalizeError, Externalizer, ExternalizerFactory, FieldAccessor,
    FieldDescriptor, FieldValue,
};
use externalizor_stream::{DataInput, DataOutput};
use std::any::{Any, TypeId};
use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, warn};

/// A type whose fields can be externalized.
///
/// `blank` is the reconstruction hook: decoding starts from the instance it
/// returns and overwrites every registered field in order.
pub trait Externalizable: Any + Send + Sync + Sized {
    /// Returns an instance to populate during decoding.
    fn blank() -> Self;

    /// Registers the fields to externalize. Registration order is the byte
    /// order of the encoding.
    fn describe(fields: &mut FieldRegistrar<Self>);
}

/// Collects the externalizers of one type while it is described.
pub struct FieldRegistrar<T> {
    externalizers: Vec<Box<dyn Externalizer>>,
    _owner: PhantomData<fn() -> T>,
}

impl<T: Externalizable> FieldRegistrar<T> {
    fn new() -> Self {
        Self {
            externalizers: Vec::new(),
            _owner: PhantomData,
        }
    }

    /// Registers a field that is written on encode and restored on decode.
    pub fn field<V: FieldValue>(
        &mut self,
        name: &'static str,
        getter: fn(&T) -> V,
        setter: fn(&mut T, V),
    ) -> &mut Self {
        let accessor = FieldAccessor::new::<T>(name, getter, setter);
        self.bind(ExternalizerFactory::primitive(accessor), AccessMode::ReadWrite)
    }

    /// Registers a field that is only ever written, such as a derived value.
    ///
    /// Plans containing one cannot decode.
    pub fn write_only<V: FieldValue>(&mut self, name: &'static str, getter: fn(&T) -> V) -> &mut Self {
        let accessor = FieldAccessor::read_only::<T>(name, getter);
        self.bind(
            ExternalizerFactory::primitive_write_only(accessor),
            AccessMode::WriteOnly,
        )
    }

    /// Registers a caller-built externalizer. Its descriptor must belong to `T`.
    pub fn custom(&mut self, externalizer: Box<dyn Externalizer>) -> &mut Self {
        self.externalizers.push(externalizer);
        self
    }

    fn bind<V: FieldValue>(&mut self, dispatch: Dispatch<V>, mode: AccessMode) -> &mut Self {
        let externalizer = match dispatch {
            Dispatch::Primitive(externalizer) => externalizer,
            Dispatch::NoMatch(accessor) => {
                Box::new(ReferenceFieldExternalizer::new(accessor, mode)) as Box<dyn Externalizer>
            }
        };
        self.externalizers.push(externalizer);
        self
    }

    fn finish(self) -> ExternalizorResult<Vec<Box<dyn Externalizer>>> {
        let owner = std::any::type_name::<T>();
        if self.externalizers.is_empty() {
            return Err(ExternalizorError::EmptyPlan(owner));
        }

        let mut seen = HashSet::new();
        for externalizer in &self.externalizers {
            let descriptor = externalizer.descriptor();
            if descriptor.owner() != TypeId::of::<T>() {
                return Err(ExternalizorError::ForeignField {
                    owner,
                    field: descriptor.name(),
                    field_owner: descriptor.owner_name(),
                });
            }
            if !seen.insert(descriptor.name()) {
                return Err(ExternalizorError::DuplicateField {
                    owner,
                    field: descriptor.name(),
                });
            }
        }
        Ok(self.externalizers)
    }
}

/// Ordered field externalizers for one type.
///
/// The order is fixed when the plan is built and is the same for encoding and
/// decoding; the bytes carry no field tags.
pub struct ExternalizationPlan<T> {
    externalizers: Vec<Box<dyn Externalizer>>,
    _owner: PhantomData<fn() -> T>,
}

impl<T: Externalizable> ExternalizationPlan<T> {
    /// Describes `T` and dispatches each of its fields.
    pub fn build() -> ExternalizorResult<Self> {
        let mut registrar = FieldRegistrar::new();
        T::describe(&mut registrar);
        let externalizers = registrar.finish()?;
        debug!(
            "Built externalization plan for {} with {} fields",
            std::any::type_name::<T>(),
            externalizers.len()
        );
        Ok(Self {
            externalizers,
            _owner: PhantomData,
        })
    }

    /// Number of fields in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.externalizers.len()
    }

    /// Always false for a built plan.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.externalizers.is_empty()
    }

    /// Field descriptors in encoding order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.externalizers.iter().map(|e| e.descriptor())
    }

    /// Returns false if any field is write-only.
    #[must_use]
    pub fn is_readable(&self) -> bool {
        self.externalizers.iter().all(|e| e.is_readable())
    }

    /// Total encoded size when every field has a fixed width.
    #[must_use]
    pub fn encoded_width(&self) -> Option<usize> {
        self.externalizers.iter().map(|e| e.fixed_width()).sum()
    }

    /// Writes every field of `instance` in plan order.
    pub fn write(&self, instance: &T, out: &mut dyn DataOutput) -> ExternalizorResult<()> {
        for externalizer in &self.externalizers {
            externalizer
                .write_external(instance, out)
                .map_err(|source| self.abort("write", externalizer.as_ref(), source))?;
        }
        Ok(())
    }

    /// Decodes a new instance, starting from [`Externalizable::blank`].
    pub fn read(&self, input: &mut dyn DataInput) -> ExternalizorResult<T> {
        let mut instance = T::blank();
        self.read_into(&mut instance, input)?;
        Ok(instance)
    }

    /// Overwrites the fields of `instance` from `input` in plan order.
    ///
    /// A plan with a write-only field fails before consuming any input.
    pub fn read_into(&self, instance: &mut T, input: &mut dyn DataInput) -> ExternalizorResult<()> {
        if let Some(externalizer) = self.externalizers.iter().find(|e| !e.is_readable()) {
            let source = ExternalizeError::NotSupported {
                field: externalizer.descriptor().name(),
                operation: "read",
            };
            return Err(self.abort("read", externalizer.as_ref(), source));
        }

        for externalizer in &self.externalizers {
            externalizer
                .read_external(instance, input)
                .map_err(|source| self.abort("read", externalizer.as_ref(), source))?;
        }
        Ok(())
    }

    fn abort(
        &self,
        pass: &str,
        externalizer: &dyn Externalizer,
        source: ExternalizeError,
    ) -> ExternalizorError {
        let field = externalizer.descriptor().name();
        warn!(
            "Aborting {pass} pass of {} at field `{field}`: {source}",
            std::any::type_name::<T>()
        );
        ExternalizorError::Field { field, source }
    }
}

impl<T> fmt::Debug for ExternalizationPlan<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalizationPlan")
            .field("type", &std::any::type_name::<T>())
            .field("externalizers", &self.externalizers)
            .finish()
    }
}
