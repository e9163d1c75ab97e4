//! Write side of the data stream.

use crate::error::{StreamError, StreamResult};
use std::io::Write;

/// Ordered byte sink with fixed-width primitive writes.
///
/// Implementors only supply [`DataOutput::write_fully`] and
/// [`DataOutput::position`]; every primitive write is defined here so the
/// encoding cannot drift between sinks.
pub trait DataOutput {
    /// Writes all of `bytes`, advancing the position by `bytes.len()`.
    fn write_fully(&mut self, bytes: &[u8]) -> StreamResult<()>;

    /// Number of bytes written so far.
    fn position(&self) -> u64;

    fn write_i32(&mut self, value: i32) -> StreamResult<()> {
        self.write_fully(&value.to_be_bytes())
    }

    fn write_i16(&mut self, value: i16) -> StreamResult<()> {
        self.write_fully(&value.to_be_bytes())
    }

    fn write_i64(&mut self, value: i64) -> StreamResult<()> {
        self.write_fully(&value.to_be_bytes())
    }

    /// Writes the IEEE-754 bit pattern, so `-0.0` and NaN payloads survive.
    fn write_f32(&mut self, value: f32) -> StreamResult<()> {
        self.write_fully(&value.to_bits().to_be_bytes())
    }

    fn write_f64(&mut self, value: f64) -> StreamResult<()> {
        self.write_fully(&value.to_bits().to_be_bytes())
    }

    fn write_i8(&mut self, value: i8) -> StreamResult<()> {
        self.write_fully(&value.to_be_bytes())
    }

    fn write_bool(&mut self, value: bool) -> StreamResult<()> {
        self.write_fully(&[u8::from(value)])
    }

    /// Writes a single UTF-16 code unit.
    fn write_char16(&mut self, value: u16) -> StreamResult<()> {
        self.write_fully(&value.to_be_bytes())
    }

    /// Writes a `u32` byte length followed by the UTF-8 bytes of `value`.
    fn write_string(&mut self, value: &str) -> StreamResult<()> {
        let len = u32::try_from(value.len()).map_err(|_| StreamError::LengthLimit {
            length: value.len(),
            limit: u32::MAX as usize,
        })?;
        self.write_fully(&len.to_be_bytes())?;
        self.write_fully(value.as_bytes())
    }

    /// Writes the marker preceding an optional reference payload.
    fn write_presence(&mut self, present: bool) -> StreamResult<()> {
        self.write_fully(&[u8::from(present)])
    }
}

/// [`DataOutput`] over any [`Write`] sink.
#[derive(Debug)]
pub struct DataWriter<W> {
    inner: W,
    position: u64,
}

impl<W: Write> DataWriter<W> {
    /// Wraps a sink; the position starts at zero.
    pub fn new(inner: W) -> Self {
        Self { inner, position: 0 }
    }

    /// Flushes the underlying sink.
    pub fn flush(&mut self) -> StreamResult<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Returns a reference to the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Consumes the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl DataWriter<Vec<u8>> {
    /// Writer over a fresh in-memory buffer.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Vec::new())
    }
}

impl<W: Write> DataOutput for DataWriter<W> {
    fn write_fully(&mut self, bytes: &[u8]) -> StreamResult<()> {
        self.inner.write_all(bytes)?;
        self.position += bytes.len() as u64;
        Ok(())
    }

    fn position(&self) -> u64 {
        self.position
    }
}
