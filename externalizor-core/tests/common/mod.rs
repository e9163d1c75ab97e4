//! Shared fixtures for externalizer tests.

#![allow(dead_code)]

use externalizor_core::{
    Externalizer, ExternalizerFactory, FieldAccessor, FieldValue,
};
use externalizor_stream::{
    DataInput, DataOutput, DataReader, DataWriter, StreamConfig, StreamResult,
};

/// A type declaring one field of every primitive kind plus two references.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Sample {
    pub int: i32,
    pub short: i16,
    pub long: i64,
    pub float: f32,
    pub double: f64,
    pub flag: bool,
    pub byte: i8,
    pub unit: u16,
    pub label: String,
    pub note: Option<String>,
}

/// A type that declares none of `Sample`'s fields.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Unrelated {
    pub int: i32,
}

/// A user-defined reference value.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Celsius(pub f64);

impl FieldValue for Celsius {
    fn write_object(&self, out: &mut dyn DataOutput) -> StreamResult<()> {
        out.write_f64(self.0)
    }

    fn read_object(input: &mut dyn DataInput) -> StreamResult<Self> {
        Ok(Self(input.read_f64()?))
    }
}

pub fn int_accessor() -> FieldAccessor<i32> {
    FieldAccessor::new::<Sample>("int", |s| s.int, |s, v| s.int = v)
}

pub fn short_accessor() -> FieldAccessor<i16> {
    FieldAccessor::new::<Sample>("short", |s| s.short, |s, v| s.short = v)
}

pub fn long_accessor() -> FieldAccessor<i64> {
    FieldAccessor::new::<Sample>("long", |s| s.long, |s, v| s.long = v)
}

pub fn float_accessor() -> FieldAccessor<f32> {
    FieldAccessor::new::<Sample>("float", |s| s.float, |s, v| s.float = v)
}

pub fn double_accessor() -> FieldAccessor<f64> {
    FieldAccessor::new::<Sample>("double", |s| s.double, |s, v| s.double = v)
}

pub fn flag_accessor() -> FieldAccessor<bool> {
    FieldAccessor::new::<Sample>("flag", |s| s.flag, |s, v| s.flag = v)
}

pub fn byte_accessor() -> FieldAccessor<i8> {
    FieldAccessor::new::<Sample>("byte", |s| s.byte, |s, v| s.byte = v)
}

pub fn unit_accessor() -> FieldAccessor<u16> {
    FieldAccessor::new::<Sample>("unit", |s| s.unit, |s, v| s.unit = v)
}

pub fn label_accessor() -> FieldAccessor<String> {
    FieldAccessor::new::<Sample>("label", |s| s.label.clone(), |s, v| s.label = v)
}

pub fn note_accessor() -> FieldAccessor<Option<String>> {
    FieldAccessor::new::<Sample>("note", |s| s.note.clone(), |s, v| s.note = v)
}

/// Dispatches an accessor that is known to be primitive.
pub fn primitive<V: FieldValue>(accessor: FieldAccessor<V>) -> Box<dyn Externalizer> {
    ExternalizerFactory::primitive(accessor)
        .into_primitive()
        .expect("primitive field")
}

/// All eight primitive externalizers over `Sample`, in kind order.
pub fn all_primitives() -> Vec<Box<dyn Externalizer>> {
    vec![
        primitive(int_accessor()),
        primitive(short_accessor()),
        primitive(long_accessor()),
        primitive(float_accessor()),
        primitive(double_accessor()),
        primitive(flag_accessor()),
        primitive(byte_accessor()),
        primitive(unit_accessor()),
    ]
}

/// Writes one field of `sample` and returns the bytes.
pub fn write_field(externalizer: &dyn Externalizer, sample: &Sample) -> Vec<u8> {
    let mut writer = DataWriter::in_memory();
    externalizer.write_external(sample, &mut writer).unwrap();
    writer.into_inner()
}

/// Reads one field from `bytes` into a default `Sample`.
pub fn read_field(externalizer: &dyn Externalizer, bytes: &[u8]) -> Sample {
    read_field_with(externalizer, bytes, StreamConfig::default())
}

pub fn read_field_with(
    externalizer: &dyn Externalizer,
    bytes: &[u8],
    config: StreamConfig,
) -> Sample {
    let mut sample = Sample::default();
    let mut reader = DataReader::with_config(bytes, config);
    externalizer.read_external(&mut sample, &mut reader).unwrap();
    sample
}
