//! LZMA via xz2 (liblzma).
//!
//! Each stream gets a fresh auto decoder, so `.xz` and legacy `.lzma`
//! streams may follow one another in any mix.

use xz2::stream::{Action, Status, Stream};

use crate::compression::codecs::{check_limit, decode_streams, process_failed, reserve_step, truncated};
use crate::compression::constants::LZMA_MEMLIMIT;
use crate::compression::types::{CompressionCodec, CompressionError, Decompressor};

const CODEC: CompressionCodec = CompressionCodec::Lzma;

pub struct LzmaDecompressor {
    limit: Option<usize>,
}

impl LzmaDecompressor {
    pub fn new(limit: Option<usize>) -> Result<Box<dyn Decompressor>, CompressionError> {
        Ok(Box::new(Self { limit }))
    }

    fn decode_stream(&self, input: &[u8], out: &mut Vec<u8>) -> Result<usize, CompressionError> {
        let mut stream = Stream::new_auto_decoder(LZMA_MEMLIMIT, 0)
            .map_err(|e| CompressionError::CodecInitFailed { codec: CODEC, msg: e.to_string() })?;

        loop {
            reserve_step(out, self.limit, CODEC)?;
            let consumed = stream.total_in() as usize;
            let produced = out.len();

            // Whole payload is in hand, so every step is a Finish step.
            let status = stream
                .process_vec(&input[consumed..], out, Action::Finish)
                .map_err(|e| process_failed(CODEC, e))?;

            match status {
                Status::StreamEnd => return Ok(stream.total_in() as usize),
                _ => {
                    if stream.total_in() as usize == consumed && out.len() == produced {
                        return Err(truncated(CODEC));
                    }
                }
            }
        }
    }
}

impl Decompressor for LzmaDecompressor {
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        decode_streams(CODEC, input, out, |rest, out| self.decode_stream(rest, out))?;
        check_limit(out, self.limit, CODEC)
    }
}
