//! scalar/decode.rs
//!
//! Fixed-width unpacking.
//!
//! Every function checks the exact length first; past that point the
//! conversion is total (no rounding policy beyond IEEE-754 bit reinterpretation).

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use tracing::trace;

use crate::constants::{widths, DEFAULT_TEXT_ENCODING};
use crate::scalar::text::{to_hex, to_text};
use crate::scalar::types::{Endianness, ScalarError, ScalarKind, ScalarValue};

#[inline]
fn check_len(data: &[u8], kind: ScalarKind, expected: usize) -> Result<(), ScalarError> {
    if data.len() != expected {
        return Err(ScalarError::SizeMismatch { kind, expected, got: data.len() });
    }
    trace!(%kind, len = data.len(), "decode scalar");
    Ok(())
}

#[inline]
fn read_with<T>(
    data: &[u8],
    endian: Endianness,
    le: fn(&[u8]) -> T,
    be: fn(&[u8]) -> T,
) -> T {
    match endian {
        Endianness::Little => le(data),
        Endianness::Big => be(data),
    }
}

pub fn to_u64(data: &[u8], endian: Endianness) -> Result<u64, ScalarError> {
    check_len(data, ScalarKind::U64, widths::U64)?;
    Ok(read_with(data, endian, LittleEndian::read_u64, BigEndian::read_u64))
}

pub fn to_i64(data: &[u8], endian: Endianness) -> Result<i64, ScalarError> {
    check_len(data, ScalarKind::I64, widths::I64)?;
    Ok(read_with(data, endian, LittleEndian::read_i64, BigEndian::read_i64))
}

pub fn to_u32(data: &[u8], endian: Endianness) -> Result<u32, ScalarError> {
    check_len(data, ScalarKind::U32, widths::U32)?;
    Ok(read_with(data, endian, LittleEndian::read_u32, BigEndian::read_u32))
}

pub fn to_i32(data: &[u8], endian: Endianness) -> Result<i32, ScalarError> {
    check_len(data, ScalarKind::I32, widths::I32)?;
    Ok(read_with(data, endian, LittleEndian::read_i32, BigEndian::read_i32))
}

pub fn to_u16(data: &[u8], endian: Endianness) -> Result<u16, ScalarError> {
    check_len(data, ScalarKind::U16, widths::U16)?;
    Ok(read_with(data, endian, LittleEndian::read_u16, BigEndian::read_u16))
}

pub fn to_i16(data: &[u8], endian: Endianness) -> Result<i16, ScalarError> {
    check_len(data, ScalarKind::I16, widths::I16)?;
    Ok(read_with(data, endian, LittleEndian::read_i16, BigEndian::read_i16))
}

/// Single byte; byte order does not apply.
pub fn to_u8(data: &[u8]) -> Result<u8, ScalarError> {
    check_len(data, ScalarKind::U8, widths::U8)?;
    Ok(data[0])
}

pub fn to_f32(data: &[u8], endian: Endianness) -> Result<f32, ScalarError> {
    check_len(data, ScalarKind::Float32, widths::F32)?;
    Ok(read_with(data, endian, LittleEndian::read_f32, BigEndian::read_f32))
}

pub fn to_f64(data: &[u8], endian: Endianness) -> Result<f64, ScalarError> {
    check_len(data, ScalarKind::Float64, widths::F64)?;
    Ok(read_with(data, endian, LittleEndian::read_f64, BigEndian::read_f64))
}

/// Dispatch on `kind`. The string kind decodes as UTF-8; use
/// [`to_text`] directly for other encodings.
pub fn interpret(data: &[u8], kind: ScalarKind, endian: Endianness) -> Result<ScalarValue, ScalarError> {
    let value = match kind {
        ScalarKind::String => ScalarValue::Text(to_text(data, DEFAULT_TEXT_ENCODING)?),
        ScalarKind::Hex => ScalarValue::Hex(to_hex(data)),
        ScalarKind::U64 => ScalarValue::Unsigned(to_u64(data, endian)?),
        ScalarKind::I64 => ScalarValue::Signed(to_i64(data, endian)?),
        ScalarKind::U32 => ScalarValue::Unsigned(to_u32(data, endian)?.into()),
        ScalarKind::I32 => ScalarValue::Signed(to_i32(data, endian)?.into()),
        ScalarKind::U16 => ScalarValue::Unsigned(to_u16(data, endian)?.into()),
        ScalarKind::I16 => ScalarValue::Signed(to_i16(data, endian)?.into()),
        ScalarKind::U8 => ScalarValue::Unsigned(to_u8(data)?.into()),
        ScalarKind::Float32 => ScalarValue::Float(to_f32(data, endian)?.into()),
        ScalarKind::Float64 => ScalarValue::Float(to_f64(data, endian)?),
    };
    Ok(value)
}
