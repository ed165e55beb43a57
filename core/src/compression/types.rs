//! compression/types.rs
//! Codec registry enum, errors and the decompressor trait.
use std::fmt;
use std::str::FromStr;

use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::compression::constants::codec_ids;
use crate::types::ErrorKind;
use crate::utils::enum_name_or_hex;

/// FFI-safe enum for compression codec identifiers.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum CompressionCodec {
    Zlib  = codec_ids::ZLIB,
    Bzip2 = codec_ids::BZIP2,
    Lzma  = codec_ids::LZMA,
}

impl CompressionCodec {
    pub fn verify(raw: u16) -> Result<Self, CompressionError> {
        Self::try_from_primitive(raw).map_err(|_| CompressionError::UnsupportedCodec { codec_id: raw })
    }

    pub fn name(self) -> &'static str {
        match self {
            CompressionCodec::Zlib => "zlib",
            CompressionCodec::Bzip2 => "bzip2",
            CompressionCodec::Lzma => "lzma",
        }
    }
}

impl fmt::Display for CompressionCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompressionCodec {
    type Err = CompressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zlib" => Ok(CompressionCodec::Zlib),
            "bzip2" | "bz2" => Ok(CompressionCodec::Bzip2),
            "lzma" | "xz" => Ok(CompressionCodec::Lzma),
            _ => Err(CompressionError::UnknownCodec { name: s.to_string() }),
        }
    }
}

fn codec_name(codec_id: &u16) -> String {
    enum_name_or_hex::<CompressionCodec>(*codec_id)
}

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("unsupported compression codec: {}", codec_name(.codec_id))]
    UnsupportedCodec { codec_id: u16 },

    #[error("unknown compression codec: {name}")]
    UnknownCodec { name: String },

    #[error("codec {codec} init failed: {msg}")]
    CodecInitFailed { codec: CompressionCodec, msg: String },

    #[error("Failed to decompress data with {codec}: {msg}")]
    CodecProcessFailed { codec: CompressionCodec, msg: String },

    #[error("Failed to decompress data with {codec}: compressed data ended before the end-of-stream marker was reached")]
    Truncated { codec: CompressionCodec },

    #[error("Failed to decompress data with {codec}: output exceeds limit of {limit} bytes")]
    OutputLimitExceeded { codec: CompressionCodec, limit: usize },
}

impl CompressionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompressionError::UnsupportedCodec { .. } | CompressionError::UnknownCodec { .. } => {
                ErrorKind::InvalidParameter
            }
            CompressionError::CodecInitFailed { .. }
            | CompressionError::CodecProcessFailed { .. }
            | CompressionError::Truncated { .. }
            | CompressionError::OutputLimitExceeded { .. } => ErrorKind::DecompressFailure,
        }
    }
}

/// Single-shot decompressor: the whole payload is available up front.
pub trait Decompressor: Send {
    /// Decompress `input` completely, appending to `out`.
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
}
