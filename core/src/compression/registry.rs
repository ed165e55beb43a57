//! compression/registry.rs
//! Codec registry and factory functions.

use tracing::debug;

use crate::compression::codecs::{Bzip2Decompressor, LzmaDecompressor, ZlibDecompressor};
use crate::compression::types::{CompressionCodec, CompressionError, Decompressor};

pub struct CodecInfo {
    pub codec: CompressionCodec,
    pub name: &'static str,
}

/// Map a stable codec id to its registry entry.
pub fn resolve(codec_id: u16) -> Result<CodecInfo, CompressionError> {
    let codec = CompressionCodec::verify(codec_id)?;
    Ok(CodecInfo { codec, name: codec.name() })
}

pub fn create_decompressor(codec: CompressionCodec, limit: Option<usize>)
    -> Result<Box<dyn Decompressor>, CompressionError>
{
    match codec {
        CompressionCodec::Zlib => ZlibDecompressor::new(limit),
        CompressionCodec::Bzip2 => Bzip2Decompressor::new(limit),
        CompressionCodec::Lzma => LzmaDecompressor::new(limit),
    }
}

pub fn create_decompressor_by_id(codec_id: u16, limit: Option<usize>)
    -> Result<Box<dyn Decompressor>, CompressionError>
{
    let info = resolve(codec_id)?;
    debug!(codec = info.name, codec_id, "create decompressor");
    create_decompressor(info.codec, limit)
}
