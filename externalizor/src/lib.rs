//! Field-level binary externalization of Rust types.
//!
//! A type opts in by implementing [`Externalizable`]: it supplies a blank
//! instance and registers its fields, in order, on a [`FieldRegistrar`]. The
//! resulting [`ExternalizationPlan`] is built once per type, cached in a
//! [`PlanCache`], and drives every encode and decode pass.
//!
//! ```ignore
//! impl Externalizable for Point {
//!     fn blank() -> Self {
//!         Self::default()
//!     }
//!
//!     fn describe(fields: &mut FieldRegistrar<Self>) {
//!         fields
//!             .field("x", |p| p.x, |p, v| p.x = v)
//!             .field("y", |p| p.y, |p, v| p.y = v);
//!     }
//! }
//!
//! let externalizor = Externalizor::new();
//! let bytes = externalizor.serialize(&point)?;
//! let copy: Point = externalizor.deserialize(&bytes)?;
//! ```
//!
//! The encoding is positional: no field names, tags or versions are written.
//! Reference identity is not preserved and cycles are not detected.

mod cache;
mod config;
mod error;
mod facade;
mod plan;
mod reference;

pub use cache::PlanCache;
pub use config::ExternalizorConfig;
pub use error::{ExternalizorError, ExternalizorResult};
pub use facade::Externalizor;
pub use plan::{Externalizable, ExternalizationPlan, FieldRegistrar};
pub use reference::ReferenceFieldExternalizer;

pub use externalizor_core::{
    AccessFault, AccessMode, DeclaredType, Dispatch, ExternalizeError, Externalizer,
    ExternalizerFactory, FieldAccessor, FieldDescriptor, FieldValue, PrimitiveKind,
};
pub use externalizor_stream::{
    BooleanDecoding, DataInput, DataOutput, DataReader, DataWriter, StreamConfig, StreamError,
};
