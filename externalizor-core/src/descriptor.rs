//! Static identity of one field of one type.

use crate::kind::{DeclaredType, PrimitiveKind};
use crate::value::FieldValue;
use std::any::{Any, TypeId};
use std::fmt;

/// Identifies one field: its name, its declared type and the type owning it.
///
/// Resolved once when a type is first scanned and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    name: &'static str,
    owner: TypeId,
    owner_name: &'static str,
    declared: DeclaredType,
}

impl FieldDescriptor {
    /// Descriptor for field `name` of type `T` holding values of type `V`.
    #[must_use]
    pub fn of<T: Any, V: FieldValue>(name: &'static str) -> Self {
        Self {
            name,
            owner: TypeId::of::<T>(),
            owner_name: std::any::type_name::<T>(),
            declared: DeclaredType::of::<V>(),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// [`TypeId`] of the type declaring this field.
    #[must_use]
    pub const fn owner(&self) -> TypeId {
        self.owner
    }

    #[must_use]
    pub const fn owner_name(&self) -> &'static str {
        self.owner_name
    }

    #[must_use]
    pub const fn declared_type(&self) -> &DeclaredType {
        &self.declared
    }

    /// Shorthand for `declared_type().primitive_kind()`.
    #[must_use]
    pub const fn primitive_kind(&self) -> Option<PrimitiveKind> {
        self.declared.primitive_kind()
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}: {}", self.owner_name, self.name, self.declared)
    }
}
