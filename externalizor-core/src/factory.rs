//! Dispatch from a field's declared type to a primitive externalizer.

use crate::accessor::FieldAccessor;
use crate::externalizer::{AccessMode, Externalizer};
use crate::kind::{DeclaredType, PrimitiveKind};
use crate::primitive::PrimitiveFieldExternalizer;
use crate::value::FieldValue;
use std::fmt;
use tracing::{debug, trace};

/// Outcome of [`ExternalizerFactory::primitive`].
pub enum Dispatch<V> {
    /// The field is one of the eight primitive kinds.
    Primitive(Box<dyn Externalizer>),
    /// The field is a reference type; the accessor is handed back so the
    /// caller can build a reference strategy with it.
    NoMatch(FieldAccessor<V>),
}

impl<V> Dispatch<V> {
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Kind of the selected externalizer, `None` on no-match.
    #[must_use]
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            Self::Primitive(externalizer) => externalizer.descriptor().primitive_kind(),
            Self::NoMatch(_) => None,
        }
    }

    /// The primitive externalizer, or `None` on no-match.
    pub fn into_primitive(self) -> Option<Box<dyn Externalizer>> {
        match self {
            Self::Primitive(externalizer) => Some(externalizer),
            Self::NoMatch(_) => None,
        }
    }
}

impl<V> fmt::Debug for Dispatch<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(externalizer) => f.debug_tuple("Primitive").field(externalizer).finish(),
            Self::NoMatch(accessor) => f.debug_tuple("NoMatch").field(accessor).finish(),
        }
    }
}

/// Selects the primitive externalizer for a field.
///
/// Stateless: the same input always produces an equivalent result. Callers
/// are expected to resolve each field once and keep the externalizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExternalizerFactory;

impl ExternalizerFactory {
    /// Nine-way classification of a declared type.
    #[must_use]
    pub const fn classify(declared: &DeclaredType) -> Option<PrimitiveKind> {
        declared.primitive_kind()
    }

    /// Binds `accessor` to the matching primitive externalizer.
    pub fn primitive<V: FieldValue>(accessor: FieldAccessor<V>) -> Dispatch<V> {
        Self::dispatch(accessor, AccessMode::ReadWrite)
    }

    /// Like [`ExternalizerFactory::primitive`], but the externalizer rejects
    /// every read.
    pub fn primitive_write_only<V: FieldValue>(accessor: FieldAccessor<V>) -> Dispatch<V> {
        Self::dispatch(accessor, AccessMode::WriteOnly)
    }

    fn dispatch<V: FieldValue>(accessor: FieldAccessor<V>, mode: AccessMode) -> Dispatch<V> {
        match Self::classify(accessor.descriptor().declared_type()) {
            Some(kind) => {
                trace!("Field {} dispatched to {kind} externalizer ({mode:?})", accessor.descriptor());
                Dispatch::Primitive(Box::new(PrimitiveFieldExternalizer::new(kind, accessor, mode)))
            }
            None => {
                debug!("Field {} is not primitive; deferring to a reference strategy", accessor.descriptor());
                Dispatch::NoMatch(accessor)
            }
        }
    }
}
