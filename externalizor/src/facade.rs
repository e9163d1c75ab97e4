//! One-call encode and decode over cached plans.

use crate::cache::PlanCache;
use crate::config::ExternalizorConfig;
use crate::error::{ExternalizorError, ExternalizorResult};
use crate::plan::{Externalizable, ExternalizationPlan};
use externalizor_stream::{DataInput, DataOutput, DataReader, DataWriter};
use std::io::{Read, Write};
use std::sync::Arc;
use tracing::debug;

/// Entry point tying a [`PlanCache`] to an [`ExternalizorConfig`].
///
/// Safe to share between threads; plans are built once per type.
#[derive(Debug, Default)]
pub struct Externalizor {
    config: ExternalizorConfig,
    cache: PlanCache,
}

impl Externalizor {
    /// Creates an externalizor with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: ExternalizorConfig) -> Self {
        Self {
            config,
            cache: PlanCache::new(),
        }
    }

    /// Creates an externalizor from a JSON configuration document.
    pub fn from_json_config(json: &str) -> ExternalizorResult<Self> {
        Ok(Self::with_config(ExternalizorConfig::from_json(json)?))
    }

    #[must_use]
    pub fn config(&self) -> &ExternalizorConfig {
        &self.config
    }

    #[must_use]
    pub fn cache(&self) -> &PlanCache {
        &self.cache
    }

    /// The cached plan for `T`.
    pub fn plan<T: Externalizable>(&self) -> ExternalizorResult<Arc<ExternalizationPlan<T>>> {
        self.cache.plan::<T>()
    }

    /// Encodes `value` into a new buffer.
    pub fn serialize<T: Externalizable>(&self, value: &T) -> ExternalizorResult<Vec<u8>> {
        let plan = self.plan::<T>()?;
        let capacity = plan.encoded_width().unwrap_or_default();
        let mut writer = DataWriter::new(Vec::with_capacity(capacity));
        plan.write(value, &mut writer)?;
        Ok(writer.into_inner())
    }

    /// Decodes a `T` from `bytes`.
    pub fn deserialize<T: Externalizable>(&self, bytes: &[u8]) -> ExternalizorResult<T> {
        let plan = self.plan::<T>()?;
        let mut reader = DataReader::with_config(bytes, self.config.stream.clone());
        let value = plan.read(&mut reader)?;

        let consumed = reader.position() as usize;
        if consumed < bytes.len() {
            let remaining = bytes.len() - consumed;
            if self.config.reject_trailing_bytes {
                return Err(ExternalizorError::TrailingBytes {
                    type_name: std::any::type_name::<T>(),
                    remaining,
                });
            }
            debug!(
                "Ignoring {remaining} trailing bytes after {}",
                std::any::type_name::<T>()
            );
        }
        Ok(value)
    }

    /// Encodes `value` into `sink` and flushes it. Returns the bytes written.
    pub fn write_to<T: Externalizable, W: Write>(&self, value: &T, sink: W) -> ExternalizorResult<u64> {
        let plan = self.plan::<T>()?;
        let mut writer = DataWriter::new(sink);
        plan.write(value, &mut writer)?;
        writer.flush()?;
        Ok(writer.position())
    }

    /// Decodes one `T` from `source`, leaving any following bytes unread.
    pub fn read_from<T: Externalizable, R: Read>(&self, source: R) -> ExternalizorResult<T> {
        let plan = self.plan::<T>()?;
        let mut reader = DataReader::with_config(source, self.config.stream.clone());
        plan.read(&mut reader)
    }
}
