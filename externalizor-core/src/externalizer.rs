//! The per-field externalizer contract.

use crate::descriptor::FieldDescriptor;
use crate::error::ExternalizeResult;
use externalizor_stream::{DataInput, DataOutput};
use std::any::Any;
use std::fmt;

/// Whether an externalizer may be used on the read path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccessMode {
    #[default]
    ReadWrite,
    /// Every read is rejected with `NotSupported`.
    WriteOnly,
}

/// Strategy that moves one field between an instance and a stream.
///
/// Implementations are bound to a single [`FieldDescriptor`] and carry no
/// per-call state, so one value can be shared across threads and reused for
/// any number of instances. Callers own exclusive access to each
/// (instance, stream) pair for the duration of a call.
pub trait Externalizer: Send + Sync + fmt::Debug {
    fn descriptor(&self) -> &FieldDescriptor;

    /// Writes the field of `instance` to `out`.
    ///
    /// On an access fault nothing is written.
    fn write_external(&self, instance: &dyn Any, out: &mut dyn DataOutput) -> ExternalizeResult<()>;

    /// Reads one value from `input` and stores it in the field of `instance`.
    fn read_external(&self, instance: &mut dyn Any, input: &mut dyn DataInput)
    -> ExternalizeResult<()>;

    /// Returns false for write-only externalizers.
    fn is_readable(&self) -> bool {
        true
    }

    /// Bytes written per call when the encoding has a fixed width.
    fn fixed_width(&self) -> Option<usize> {
        self.descriptor().primitive_kind().map(|kind| kind.width())
    }
}
