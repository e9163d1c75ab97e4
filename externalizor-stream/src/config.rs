//! Decoding policy for data streams.

use crate::error::{StreamError, StreamResult};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Default upper bound for string payloads (16 MB).
pub const DEFAULT_MAX_STRING_LEN: usize = 16 * 1024 * 1024;

/// How a boolean byte is turned back into a `bool`.
///
/// Writers always emit `0x00` or `0x01`; the policy only matters for bytes
/// produced elsewhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanDecoding {
    #[default]
    /// Any non-zero byte decodes to `true`.
    Lenient,
    /// Only `0x00` and `0x01` are accepted.
    Strict,
}

impl BooleanDecoding {
    /// Decodes one boolean byte under this policy.
    pub fn decode(self, byte: u8) -> StreamResult<bool> {
        match (self, byte) {
            (_, 0) => Ok(false),
            (_, 1) => Ok(true),
            (Self::Lenient, other) => {
                trace!("Coercing boolean byte {other:#04x} to true");
                Ok(true)
            }
            (Self::Strict, other) => Err(StreamError::InvalidBoolean(other)),
        }
    }
}

/// Configuration applied when reading a stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamConfig {
    #[serde(default)]
    pub boolean_decoding: BooleanDecoding,
    /// Largest string payload accepted, in bytes.
    #[serde(default = "default_max_string_len")]
    pub max_string_len: usize,
}

fn default_max_string_len() -> usize {
    DEFAULT_MAX_STRING_LEN
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            boolean_decoding: BooleanDecoding::default(),
            max_string_len: default_max_string_len(),
        }
    }
}

impl StreamConfig {
    /// Configuration that rejects boolean bytes other than 0 and 1.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            boolean_decoding: BooleanDecoding::Strict,
            ..Self::default()
        }
    }

    /// Parses a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
