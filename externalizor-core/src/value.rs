//! Value types a field can hold.

use externalizor_stream::{DataInput, DataOutput, StreamResult};

/// A type that can be stored in an externalized field.
///
/// Dispatch goes by [`DeclaredType::of`]: the eight built-in scalar types get
/// a fixed-width [`PrimitiveFieldExternalizer`], anything else is handed back
/// as [`Dispatch::NoMatch`] and is written through [`FieldValue::write_object`].
///
/// [`DeclaredType::of`]: crate::DeclaredType::of
/// [`PrimitiveFieldExternalizer`]: crate::PrimitiveFieldExternalizer
/// [`Dispatch::NoMatch`]: crate::Dispatch::NoMatch
pub trait FieldValue: Sized + Send + Sync + 'static {
    fn write_object(&self, out: &mut dyn DataOutput) -> StreamResult<()>;

    fn read_object(input: &mut dyn DataInput) -> StreamResult<Self>;
}

macro_rules! primitive_field_value {
    ($ty:ty, $write:ident, $read:ident) => {
        impl FieldValue for $ty {
            fn write_object(&self, out: &mut dyn DataOutput) -> StreamResult<()> {
                out.$write(*self)
            }

            fn read_object(input: &mut dyn DataInput) -> StreamResult<Self> {
                input.$read()
            }
        }
    };
}

primitive_field_value!(i32, write_i32, read_i32);
primitive_field_value!(i16, write_i16, read_i16);
primitive_field_value!(i64, write_i64, read_i64);
primitive_field_value!(f32, write_f32, read_f32);
primitive_field_value!(f64, write_f64, read_f64);
primitive_field_value!(bool, write_bool, read_bool);
primitive_field_value!(i8, write_i8, read_i8);
primitive_field_value!(u16, write_char16, read_char16);

impl FieldValue for String {
    fn write_object(&self, out: &mut dyn DataOutput) -> StreamResult<()> {
        out.write_string(self)
    }

    fn read_object(input: &mut dyn DataInput) -> StreamResult<Self> {
        input.read_string()
    }
}

impl FieldValue for Option<String> {
    fn write_object(&self, out: &mut dyn DataOutput) -> StreamResult<()> {
        match self {
            Some(value) => {
                out.write_presence(true)?;
                out.write_string(value)
            }
            None => out.write_presence(false),
        }
    }

    fn read_object(input: &mut dyn DataInput) -> StreamResult<Self> {
        if input.read_presence()? {
            Ok(Some(input.read_string()?))
        } else {
            Ok(None)
        }
    }
}
