//! Per-field externalizers for Externalizor.
//!
//! This crate is the field-level layer of the engine:
//! - [`FieldDescriptor`]: identity of one field (name, declared type, owner)
//! - [`FieldAccessor`]: registered getter/setter capability for one field
//! - [`Externalizer`]: the write-one-field / read-one-field contract
//! - [`PrimitiveFieldExternalizer`]: fixed-width strategies for the eight
//!   [`PrimitiveKind`]s
//! - [`ExternalizerFactory`]: nine-way dispatch from a declared type to a
//!   primitive externalizer or [`Dispatch::NoMatch`]
//!
//! Externalizers hold no per-call state. One instance can serve any number of
//! target instances and streams, including from several threads at once.

mod accessor;
mod descriptor;
mod error;
mod externalizer;
mod factory;
mod kind;
mod primitive;
mod value;

pub use accessor::FieldAccessor;
pub use descriptor::FieldDescriptor;
pub use error::{AccessFault, ExternalizeError, ExternalizeResult};
pub use externalizer::{AccessMode, Externalizer};
pub use factory::{Dispatch, ExternalizerFactory};
pub use kind::{DeclaredType, PrimitiveKind};
pub use primitive::{
    BooleanFieldExternalizer, ByteFieldExternalizer, CharFieldExternalizer,
    DoubleFieldExternalizer, FloatFieldExternalizer, IntFieldExternalizer, LongFieldExternalizer,
    PrimitiveFieldExternalizer, ShortFieldExternalizer,
};
pub use value::FieldValue;
