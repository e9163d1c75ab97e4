//! Facade configuration.

use externalizor_stream::StreamConfig;
use serde::{Deserialize, Serialize};

/// Configuration for [`Externalizor`](crate::Externalizor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalizorConfig {
    /// Decoding policy applied to every input stream.
    #[serde(default)]
    pub stream: StreamConfig,
    /// Fail `deserialize` when bytes remain after the last field.
    #[serde(default = "default_reject_trailing_bytes")]
    pub reject_trailing_bytes: bool,
}

fn default_reject_trailing_bytes() -> bool {
    true
}

impl Default for ExternalizorConfig {
    fn default() -> Self {
        Self {
            stream: StreamConfig::default(),
            reject_trailing_bytes: default_reject_trailing_bytes(),
        }
    }
}

impl ExternalizorConfig {
    /// Parses a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
