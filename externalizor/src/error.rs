//! Error types for plans and the facade.

use externalizor_core::ExternalizeError;
use externalizor_stream::StreamError;
use thiserror::Error;

/// Result type for plan and facade operations.
pub type ExternalizorResult<T> = Result<T, ExternalizorError>;

/// Errors that can occur while building or executing an externalization plan.
#[derive(Debug, Error)]
pub enum ExternalizorError {
    /// A field failed; the whole pass was aborted at this field.
    #[error("field `{field}`: {source}")]
    Field {
        field: &'static str,
        source: ExternalizeError,
    },

    #[error("stream error: {0}")]
    Stream(#[from] StreamError),

    #[error("type `{0}` declares no externalizable fields")]
    EmptyPlan(&'static str),

    #[error("field `{field}` is registered twice on `{owner}`")]
    DuplicateField {
        owner: &'static str,
        field: &'static str,
    },

    #[error("field `{field}` belongs to `{field_owner}`, not to `{owner}`")]
    ForeignField {
        owner: &'static str,
        field: &'static str,
        field_owner: &'static str,
    },

    #[error("{remaining} trailing bytes after decoding `{type_name}`")]
    TrailingBytes {
        type_name: &'static str,
        remaining: usize,
    },

    #[error("cached plan for `{0}` has an unexpected type")]
    PlanMismatch(&'static str),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl ExternalizorError {
    /// The underlying field error, if this is a field failure.
    #[must_use]
    pub fn field_error(&self) -> Option<&ExternalizeError> {
        match self {
            Self::Field { source, .. } => Some(source),
            _ => None,
        }
    }
}
