//! Fixed-width externalizers for the eight primitive kinds.

use crate::accessor::FieldAccessor;
use crate::descriptor::FieldDescriptor;
use crate::error::{ExternalizeError, ExternalizeResult};
use crate::externalizer::{AccessMode, Externalizer};
use crate::kind::PrimitiveKind;
use crate::value::FieldValue;
use externalizor_stream::{DataInput, DataOutput};
use std::any::Any;
use std::fmt;

/// Externalizer for a field whose declared type is a [`PrimitiveKind`].
///
/// Only [`ExternalizerFactory`](crate::ExternalizerFactory) builds these, and
/// only for the eight built-in scalar types, so the kind always matches the
/// value type of the bound accessor.
pub struct PrimitiveFieldExternalizer<V> {
    kind: PrimitiveKind,
    accessor: FieldAccessor<V>,
    mode: AccessMode,
}

pub type IntFieldExternalizer = PrimitiveFieldExternalizer<i32>;
pub type ShortFieldExternalizer = PrimitiveFieldExternalizer<i16>;
pub type LongFieldExternalizer = PrimitiveFieldExternalizer<i64>;
pub type FloatFieldExternalizer = PrimitiveFieldExternalizer<f32>;
pub type DoubleFieldExternalizer = PrimitiveFieldExternalizer<f64>;
pub type BooleanFieldExternalizer = PrimitiveFieldExternalizer<bool>;
pub type ByteFieldExternalizer = PrimitiveFieldExternalizer<i8>;
pub type CharFieldExternalizer = PrimitiveFieldExternalizer<u16>;

impl<V: FieldValue> PrimitiveFieldExternalizer<V> {
    pub(crate) fn new(kind: PrimitiveKind, accessor: FieldAccessor<V>, mode: AccessMode) -> Self {
        Self {
            kind,
            accessor,
            mode,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    #[must_use]
    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    #[must_use]
    pub fn accessor(&self) -> &FieldAccessor<V> {
        &self.accessor
    }
}

impl<V: FieldValue> Externalizer for PrimitiveFieldExternalizer<V> {
    fn descriptor(&self) -> &FieldDescriptor {
        self.accessor.descriptor()
    }

    fn write_external(&self, instance: &dyn Any, out: &mut dyn DataOutput) -> ExternalizeResult<()> {
        let value = self.accessor.get(instance)?;
        let start = out.position();
        value.write_object(out)?;
        debug_assert_eq!(out.position() - start, self.kind.width() as u64);
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
        Some(self.kind.width())
    }
}

impl<V> fmt::Debug for PrimitiveFieldExternalizer<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimitiveFieldExternalizer")
            .field("kind", &self.kind)
            .field("accessor", &self.accessor)
            .field("mode", &self.mode)
            .finish()
    }
}
