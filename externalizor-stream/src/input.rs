//! Read side of the data stream.

use crate::config::StreamConfig;
use crate::error::{StreamError, StreamResult};
use std::io::{ErrorKind, Read};
use tracing::warn;

/// Ordered byte source with fixed-width primitive reads.
///
/// Each read consumes exactly the width of its value or fails; a short read
/// surfaces as [`StreamError::UnexpectedEof`].
pub trait DataInput {
    /// Fills `buf` completely, advancing the position by `buf.len()`.
    fn read_fully(&mut self, buf: &mut [u8]) -> StreamResult<()>;

    /// Number of bytes consumed so far.
    fn position(&self) -> u64;

    /// Decoding policy of this stream.
    fn config(&self) -> &StreamConfig;

    fn read_i32(&mut self) -> StreamResult<i32> {
        let mut buf = [0u8; 4];
        self.read_fully(&mut buf)?;
        Ok(i32::from_be_bytes(buf))
    }

    fn read_i16(&mut self) -> StreamResult<i16> {
        let mut buf = [0u8; 2];
        self.read_fully(&mut buf)?;
        Ok(i16::from_be_bytes(buf))
    }

    fn read_i64(&mut self) -> StreamResult<i64> {
        let mut buf = [0u8; 8];
        self.read_fully(&mut buf)?;
        Ok(i64::from_be_bytes(buf))
    }

    fn read_f32(&mut self) -> StreamResult<f32> {
        let mut buf = [0u8; 4];
        self.read_fully(&mut buf)?;
        Ok(f32::from_bits(u32::from_be_bytes(buf)))
    }

    fn read_f64(&mut self) -> StreamResult<f64> {
        let mut buf = [0u8; 8];
        self.read_fully(&mut buf)?;
        Ok(f64::from_bits(u64::from_be_bytes(buf)))
    }

    fn read_i8(&mut self) -> StreamResult<i8> {
        let mut buf = [0u8; 1];
        self.read_fully(&mut buf)?;
        Ok(i8::from_be_bytes(buf))
    }

    /// Reads one byte and decodes it with the configured [`BooleanDecoding`].
    ///
    /// [`BooleanDecoding`]: crate::BooleanDecoding
    fn read_bool(&mut self) -> StreamResult<bool> {
        let mut buf = [0u8; 1];
        self.read_fully(&mut buf)?;
        self.config().boolean_decoding.decode(buf[0])
    }

    /// Reads a single UTF-16 code unit. Surrogates are not validated.
    fn read_char16(&mut self) -> StreamResult<u16> {
        let mut buf = [0u8; 2];
        self.read_fully(&mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Reads a `u32` length-prefixed UTF-8 string.
    fn read_string(&mut self) -> StreamResult<String> {
        let mut len_bytes = [0u8; 4];
        self.read_fully(&mut len_bytes)?;
        let len = u32::from_be_bytes(len_bytes) as usize;

        let limit = self.config().max_string_len;
        if len > limit {
            warn!("Rejecting string payload of {len} bytes (limit {limit})");
            return Err(StreamError::LengthLimit { length: len, limit });
        }

        let mut buf = vec![0u8; len];
        self.read_fully(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Reads the marker preceding an optional reference payload.
    fn read_presence(&mut self) -> StreamResult<bool> {
        let mut buf = [0u8; 1];
        self.read_fully(&mut buf)?;
        match buf[0] {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(StreamError::InvalidPresence(other)),
        }
    }
}

/// [`DataInput`] over any [`Read`] source.
#[derive(Debug)]
pub struct DataReader<R> {
    inner: R,
    config: StreamConfig,
    position: u64,
}

impl<R: Read> DataReader<R> {
    /// Wraps a source with the default [`StreamConfig`].
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, StreamConfig::default())
    }

    /// Wraps a source with an explicit configuration.
    pub fn with_config(inner: R, config: StreamConfig) -> Self {
        Self {
            inner,
            config,
            position: 0,
        }
    }

    /// Consumes the reader, returning the underlying source.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> DataInput for DataReader<R> {
    fn read_fully(&mut self, buf: &mut [u8]) -> StreamResult<()> {
        match self.inner.read_exact(buf) {
            Ok(()) => {
                self.position += buf.len() as u64;
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(StreamError::UnexpectedEof {
                needed: buf.len(),
                position: self.position,
            }),
            Err(e) => Err(e.into()),
        }
    }

    fn position(&self) -> u64 {
        self.position
    }

    fn config(&self) -> &StreamConfig {
        &self.config
    }
}
