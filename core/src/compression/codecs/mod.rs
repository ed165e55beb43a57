//! compression/codecs/mod.rs
//! Single-shot decompressors over the whole input buffer.
//!
//! Every codec drives its library's low-level state machine in a loop and
//! treats "no input consumed and no output produced" before the stream end
//! as truncation. Output grows geometrically and is checked against the
//! optional limit between steps.
//!
//! bzip2 and lzma accept back-to-back streams. Once one stream has decoded,
//! a later stream that fails to decode is dropped along with everything
//! after it; truncation and the output limit still fail the call.

pub mod zlib;
pub mod bzip2;
pub mod lzma;

pub use self::zlib::*;
pub use self::bzip2::*;
pub use self::lzma::*;

use tracing::debug;

use crate::compression::constants::OUTPUT_CHUNK;
use crate::compression::types::{CompressionCodec, CompressionError};

/// Fail once `out` passed `limit`, otherwise make sure the next step has room to write.
pub(crate) fn reserve_step(
    out: &mut Vec<u8>,
    limit: Option<usize>,
    codec: CompressionCodec,
) -> Result<(), CompressionError> {
    check_limit(out, limit, codec)?;
    if out.capacity() == out.len() {
        out.reserve(out.len().max(OUTPUT_CHUNK));
    }
    Ok(())
}

pub(crate) fn check_limit(
    out: &[u8],
    limit: Option<usize>,
    codec: CompressionCodec,
) -> Result<(), CompressionError> {
    match limit {
        Some(limit) if out.len() > limit => Err(CompressionError::OutputLimitExceeded { codec, limit }),
        _ => Ok(()),
    }
}

pub(crate) fn process_failed(codec: CompressionCodec, err: impl std::fmt::Display) -> CompressionError {
    CompressionError::CodecProcessFailed { codec, msg: err.to_string() }
}

pub(crate) fn truncated(codec: CompressionCodec) -> CompressionError {
    CompressionError::Truncated { codec }
}

/// Decode consecutive streams from `input`.
///
/// `stream` decodes one stream from the front of its input, appends to
/// `out` and returns the number of input bytes it consumed.
pub(crate) fn decode_streams<F>(
    codec: CompressionCodec,
    input: &[u8],
    out: &mut Vec<u8>,
    mut stream: F,
) -> Result<(), CompressionError>
where
    F: FnMut(&[u8], &mut Vec<u8>) -> Result<usize, CompressionError>,
{
    let mut offset = 0usize;
    let mut decoded = 0usize;

    loop {
        let mark = out.len();
        match stream(&input[offset..], out) {
            Ok(used) => {
                offset += used;
                decoded += 1;
                if used == 0 || offset >= input.len() {
                    return Ok(());
                }
            }
            Err(CompressionError::CodecProcessFailed { msg, .. }) if decoded > 0 => {
                out.truncate(mark);
                debug!(%codec, streams = decoded, ignored = input.len() - offset, %msg, "ignoring trailing data");
                return Ok(());
            }
            Err(e) => return Err(e),
        }
    }
}
