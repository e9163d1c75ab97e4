//! Primitive kinds and declared field types.

use std::any::{Any, TypeId};
use std::fmt;

/// The eight fixed-width scalar kinds a field can be externalized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// 32-bit signed integer (`i32`).
    Int,
    /// 16-bit signed integer (`i16`).
    Short,
    /// 64-bit signed integer (`i64`).
    Long,
    /// 32-bit IEEE-754 float (`f32`).
    Float,
    /// 64-bit IEEE-754 float (`f64`).
    Double,
    /// Boolean (`bool`).
    Boolean,
    /// 8-bit signed byte (`i8`).
    Byte,
    /// One UTF-16 code unit (`u16`).
    Char,
}

impl PrimitiveKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Int,
        Self::Short,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Boolean,
        Self::Byte,
        Self::Char,
    ];

    /// Number of bytes one value of this kind occupies on the stream.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::Boolean | Self::Byte => 1,
            Self::Short | Self::Char => 2,
            Self::Int | Self::Float => 4,
            Self::Long | Self::Double => 8,
        }
    }

    /// The kind backed by `V`, if `V` is one of the eight built-in scalar types.
    ///
    /// Classification goes by concrete type, so no other type can pass as
    /// primitive.
    #[must_use]
    pub fn of<V: Any>() -> Option<Self> {
        let id = TypeId::of::<V>();
        Self::ALL.into_iter().find(|kind| kind.value_type_id() == id)
    }

    fn value_type_id(self) -> TypeId {
        match self {
            Self::Int => TypeId::of::<i32>(),
            Self::Short => TypeId::of::<i16>(),
            Self::Long => TypeId::of::<i64>(),
            Self::Float => TypeId::of::<f32>(),
            Self::Double => TypeId::of::<f64>(),
            Self::Boolean => TypeId::of::<bool>(),
            Self::Byte => TypeId::of::<i8>(),
            Self::Char => TypeId::of::<u16>(),
        }
    }

    /// The Rust type backing fields of this kind.
    #[must_use]
    pub const fn rust_type(self) -> &'static str {
        match self {
            Self::Int => "i32",
            Self::Short => "i16",
            Self::Long => "i64",
            Self::Float => "f32",
            Self::Double => "f64",
            Self::Boolean => "bool",
            Self::Byte => "i8",
            Self::Char => "u16",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rust_type())
    }
}

/// What a field's value type looks like to the dispatch factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    Primitive(PrimitiveKind),
    /// Anything that is not one of the eight primitive kinds.
    Reference { type_name: &'static str },
}

impl DeclaredType {
    /// Declared type of a field holding `V`.
    #[must_use]
    pub fn of<V: Any>() -> Self {
        match PrimitiveKind::of::<V>() {
            Some(kind) => Self::Primitive(kind),
            None => Self::reference_of::<V>(),
        }
    }

    /// Reference declaration named after `T`.
    #[must_use]
    pub fn reference_of<T: ?Sized>() -> Self {
        Self::Reference {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// The primitive kind, or `None` for reference types.
    #[must_use]
    pub const fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            Self::Primitive(kind) => Some(*kind),
            Self::Reference { .. } => None,
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(kind) => write!(f, "{kind}"),
            Self::Reference { type_name } => f.write_str(type_name),
        }
    }
}
