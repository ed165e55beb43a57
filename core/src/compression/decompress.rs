//! compression/decompress.rs
//! One-shot entry points.

use tracing::debug;

use crate::compression::constants::{EXPANSION_HINT, OUTPUT_CHUNK};
use crate::compression::registry::create_decompressor;
use crate::compression::types::{CompressionCodec, CompressionError};
use crate::config::InterpConfig;

/// Decompress `data` with `codec`, with no output limit.
///
/// Corrupt, truncated or mismatched input yields `CodecProcessFailed`
/// carrying the library's diagnostic.
pub fn decompress(data: &[u8], codec: CompressionCodec) -> Result<Vec<u8>, CompressionError> {
    decompress_with_limit(data, codec, None)
}

/// Decompress with the codec given by name (`"zlib"`, `"bz2"`, `"xz"`, ...).
pub fn decompress_named(data: &[u8], codec: &str) -> Result<Vec<u8>, CompressionError> {
    decompress(data, codec.parse()?)
}

pub fn decompress_with_config(
    data: &[u8],
    codec: CompressionCodec,
    config: &InterpConfig,
) -> Result<Vec<u8>, CompressionError> {
    decompress_with_limit(data, codec, config.max_output_size)
}

pub fn decompress_with_limit(
    data: &[u8],
    codec: CompressionCodec,
    max_output: Option<usize>,
) -> Result<Vec<u8>, CompressionError> {
    debug!(%codec, input_len = data.len(), ?max_output, "decompress");

    let hint = data.len().saturating_mul(EXPANSION_HINT).clamp(OUTPUT_CHUNK, 16 * OUTPUT_CHUNK);
    let mut out = Vec::with_capacity(max_output.map_or(hint, |m| hint.min(m.saturating_add(1))));

    let mut decompressor = create_decompressor(codec, max_output)?;
    decompressor.decompress(data, &mut out)?;

    debug!(%codec, output_len = out.len(), "decompressed");
    Ok(out)
}
