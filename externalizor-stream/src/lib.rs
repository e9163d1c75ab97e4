//! Fixed-width binary data streams for Externalizor.
//!
//! This crate provides the byte channel every externalizer writes to and reads
//! from:
//! - [`DataOutput`] / [`DataWriter`]: big-endian fixed-width writes over any
//!   [`std::io::Write`]
//! - [`DataInput`] / [`DataReader`]: the matching reads over any
//!   [`std::io::Read`], with position tracking and short-read detection
//! - [`StreamConfig`]: decoding policy (boolean strictness, string limits)
//!
//! Every primitive has exactly one canonical encoding:
//!
//! | Value   | Width | Encoding                         |
//! |---------|-------|----------------------------------|
//! | `i32`   | 4     | two's complement, big-endian     |
//! | `i16`   | 2     | two's complement, big-endian     |
//! | `i64`   | 8     | two's complement, big-endian     |
//! | `f32`   | 4     | IEEE-754 bits, big-endian        |
//! | `f64`   | 8     | IEEE-754 bits, big-endian        |
//! | `i8`    | 1     | two's complement                 |
//! | `bool`  | 1     | `0x00` / `0x01`                  |
//! | `u16`   | 2     | UTF-16 code unit, big-endian     |
//!
//! Strings are written as a `u32` big-endian byte length followed by UTF-8.

mod config;
mod error;
mod input;
mod output;

pub use config::{BooleanDecoding, DEFAULT_MAX_STRING_LEN, StreamConfig};
pub use error::{StreamError, StreamResult};
pub use input::{DataInput, DataReader};
pub use output::{DataOutput, DataWriter};
