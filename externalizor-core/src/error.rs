//! Error types for field externalization.

use externalizor_stream::StreamError;
use thiserror::Error;

/// Result type for externalizer operations.
pub type ExternalizeResult<T> = Result<T, ExternalizeError>;

/// A field value could not be read from or written into an instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessFault {
    /// The instance's runtime type does not declare the bound field.
    #[error("field `{field}` is declared by `{owner}`, not by the given instance")]
    WrongInstance {
        field: &'static str,
        owner: &'static str,
    },

    /// The accessor was registered without the capability the call needs.
    #[error("field `{field}` on `{owner}` has no {capability} capability")]
    CapabilityUnavailable {
        field: &'static str,
        owner: &'static str,
        capability: &'static str,
    },
}

/// Errors that can occur while externalizing a field.
#[derive(Debug, Error)]
pub enum ExternalizeError {
    #[error("access fault: {0}")]
    Access(#[from] AccessFault),

    #[error("{operation} is not supported for field `{field}`")]
    NotSupported {
        field: &'static str,
        operation: &'static str,
    },

    #[error("stream error: {0}")]
    Stream(#[from] StreamError),
}
