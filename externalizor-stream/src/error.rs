//! Error types for binary streams.

use thiserror::Error;

/// Result type for stream operations.
pub type StreamResult<T> = Result<T, StreamError>;

/// Errors that can occur while reading or writing a data stream.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The stream ended before a fixed-width value could be read.
    #[error("unexpected end of stream: needed {needed} bytes at offset {position}")]
    UnexpectedEof { needed: usize, position: u64 },

    /// A boolean byte other than 0 or 1 under strict decoding.
    #[error("invalid boolean byte: {0:#04x}")]
    InvalidBoolean(u8),

    /// A presence marker other than 0 or 1.
    #[error("invalid presence marker: {0:#04x}")]
    InvalidPresence(u8),

    /// A length-prefixed payload is larger than allowed.
    #[error("length {length} exceeds limit of {limit} bytes")]
    LengthLimit { length: usize, limit: usize },

    /// A string payload is not valid UTF-8.
    #[error("invalid UTF-8 in string payload: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// The underlying channel failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
