//! Externalizer for reference-typed fields.

use externalizor_core::{
    AccessMode, ExternalizeError, ExternalizeResult, Externalizer, FieldAccessor,
    FieldDescriptor, FieldValue,
};
use externalizor_stream::{DataInput, DataOutput};
use std::any::Any;
use std::fmt;

/// Writes a field through the value's own stream codec.
///
/// Used for fields the [`ExternalizerFactory`] does not classify as
/// primitive. Each value is encoded on its own; nothing is shared between
/// fields or instances.
///
/// [`ExternalizerFactory`]: externalizor_core::ExternalizerFactory
pub struct ReferenceFieldExternalizer<V> {
    accessor: FieldAccessor<V>,
    mode: AccessMode,
}

impl<V: FieldValue> ReferenceFieldExternalizer<V> {
    pub fn new(accessor: FieldAccessor<V>, mode: AccessMode) -> Self {
        Self { accessor, mode }
    }

    #[must_use]
    pub fn mode(&self) -> AccessMode {
        self.mode
    }
}

impl<V: FieldValue> Externalizer for ReferenceFieldExternalizer<V> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.accessor.descriptor()
    }

    fn write_external(&self, instance: &dyn Any, out: &mut dyn DataOutput) -> ExternalizeResult<()> {
        let value = self.accessor.get(instance)?;
        value.write_object(out)?;
        Ok(())
    }

    fn read_external(
        &self,
        instance: &mut dyn Any,
        input: &mut dyn DataInput,
    ) -> ExternalizeResult<()> {
        if self.mode == AccessMode::WriteOnly {
            return Err(ExternalizeError::NotSupported {
                field: self.descriptor().name(),
                operation: "read",
            });
        }
        self.accessor.ensure_settable(instance)?;
        let value = V::read_object(input)?;
        self.accessor.set(instance, value)
    }

    fn is_readable(&self) -> bool {
        self.mode == AccessMode::ReadWrite
    }

    fn fixed_width(&self) -> Option<usize> {
        None
    }
}

impl<V> fmt::Debug for ReferenceFieldExternalizer<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReferenceFieldExternalizer")
            .field("accessor", &self.accessor)
            .field("mode", &self.mode)
            .finish()
    }
}
