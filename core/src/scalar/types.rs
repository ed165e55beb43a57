//! scalar/types.rs
//! Scalar kinds, byte order, decoded values and errors.

use std::fmt;
use std::str::FromStr;

use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::constants::{scalar_ids, widths};
use crate::types::ErrorKind;
use crate::utils::byte_count;

/// Target type tag for interpreting a byte buffer.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum ScalarKind {
    String  = scalar_ids::STRING,
    Hex     = scalar_ids::HEX,
    U64     = scalar_ids::U64,
    I64     = scalar_ids::I64,
    U32     = scalar_ids::U32,
    I32     = scalar_ids::I32,
    U16     = scalar_ids::U16,
    I16     = scalar_ids::I16,
    U8      = scalar_ids::U8,
    Float32 = scalar_ids::FLOAT32,
    Float64 = scalar_ids::FLOAT64,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 11] = [
        ScalarKind::String,
        ScalarKind::Hex,
        ScalarKind::U64,
        ScalarKind::I64,
        ScalarKind::U32,
        ScalarKind::I32,
        ScalarKind::U16,
        ScalarKind::I16,
        ScalarKind::U8,
        ScalarKind::Float32,
        ScalarKind::Float64,
    ];

    /// Required input length; `None` for the variable-length kinds.
    pub fn width(self) -> Option<usize> {
        match self {
            ScalarKind::String | ScalarKind::Hex => None,
            ScalarKind::U64 => Some(widths::U64),
            ScalarKind::I64 => Some(widths::I64),
            ScalarKind::U32 => Some(widths::U32),
            ScalarKind::I32 => Some(widths::I32),
            ScalarKind::U16 => Some(widths::U16),
            ScalarKind::I16 => Some(widths::I16),
            ScalarKind::U8 => Some(widths::U8),
            ScalarKind::Float32 => Some(widths::F32),
            ScalarKind::Float64 => Some(widths::F64),
        }
    }

    /// Whether the byte order changes the result.
    pub fn uses_endianness(self) -> bool {
        self.width().is_some_and(|w| w > 1)
    }

    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Hex => "hex",
            ScalarKind::U64 => "u64",
            ScalarKind::I64 => "i64",
            ScalarKind::U32 => "u32",
            ScalarKind::I32 => "i32",
            ScalarKind::U16 => "u16",
            ScalarKind::I16 => "i16",
            ScalarKind::U8 => "u8",
            ScalarKind::Float32 => "float32",
            ScalarKind::Float64 => "float64",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalarKind {
    type Err = ScalarError;

    /// Accepts the canonical names plus the host's C-style aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().replace([' ', '-'], "_").as_str() {
            "string" | "str" | "text" => ScalarKind::String,
            "hex" => ScalarKind::Hex,
            "u64" | "uint64" | "unsigned_long" | "qword" => ScalarKind::U64,
            "i64" | "int64" | "long" => ScalarKind::I64,
            "u32" | "uint32" | "unsigned_integer" | "unsigned_int" | "dword" => ScalarKind::U32,
            "i32" | "int32" | "integer" | "int" => ScalarKind::I32,
            "u16" | "uint16" | "unsigned_short" | "word" => ScalarKind::U16,
            "i16" | "int16" | "short" => ScalarKind::I16,
            "u8" | "uint8" | "unsigned_byte" | "byte" => ScalarKind::U8,
            "float32" | "f32" | "float" => ScalarKind::Float32,
            "float64" | "f64" | "double" => ScalarKind::Float64,
            _ => return Err(ScalarError::UnknownKind { name: s.to_string() }),
        };
        Ok(kind)
    }
}

/// Byte order for multi-byte kinds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Endianness {
    #[default]
    Little,
    Big,
}

impl Endianness {
    /// Mirror of the host's `isLittleEndian` flag.
    pub fn from_little(is_little: bool) -> Self {
        if is_little { Endianness::Little } else { Endianness::Big }
    }

    pub fn is_little(self) -> bool {
        self == Endianness::Little
    }
}

/// Result of [`interpret`](crate::scalar::interpret).
#[derive(Clone, Debug, PartialEq)]
pub enum ScalarValue {
    Text(String),
    Hex(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Text(s) | ScalarValue::Hex(s) => f.write_str(s),
            ScalarValue::Unsigned(v) => write!(f, "{}", v),
            ScalarValue::Signed(v) => write!(f, "{}", v),
            ScalarValue::Float(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Error)]
pub enum ScalarError {
    #[error("Failed to convert to {kind}: data size must be {}, got {got} bytes", byte_count(.expected))]
    SizeMismatch { kind: ScalarKind, expected: usize, got: usize },

    #[error("unknown scalar kind: {name}")]
    UnknownKind { name: String },

    #[error("Invalid encoding: {name}")]
    UnknownEncoding { name: String },

    #[error("Failed to decode data with encoding {encoding} : {msg}")]
    InvalidText { encoding: String, msg: String },
}

impl ScalarError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScalarError::SizeMismatch { .. }
            | ScalarError::UnknownKind { .. }
            | ScalarError::UnknownEncoding { .. } => ErrorKind::InvalidParameter,
            ScalarError::InvalidText { .. } => ErrorKind::DecodeFailure,
        }
    }
}
