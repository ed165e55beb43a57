//! bzip2 via the `bzip2` crate (libbz2).
//!
//! Concatenated streams are decoded back to back. Empty input is an empty
//! payload.

use ::bzip2::{Decompress, Status};

use crate::compression::codecs::{check_limit, decode_streams, process_failed, reserve_step, truncated};
use crate::compression::types::{CompressionCodec, CompressionError, Decompressor};

const CODEC: CompressionCodec = CompressionCodec::Bzip2;

pub struct Bzip2Decompressor {
    limit: Option<usize>,
}

impl Bzip2Decompressor {
    pub fn new(limit: Option<usize>) -> Result<Box<dyn Decompressor>, CompressionError> {
        Ok(Box::new(Self { limit }))
    }

    fn decode_stream(&self, input: &[u8], out: &mut Vec<u8>) -> Result<usize, CompressionError> {
        let mut bz = Decompress::new(false);
        loop {
            reserve_step(out, self.limit, CODEC)?;
            let consumed = bz.total_in() as usize;
            let produced = out.len();

            let status = bz
                .decompress_vec(&input[consumed..], out)
                .map_err(|e| process_failed(CODEC, e))?;

            if matches!(status, Status::StreamEnd) {
                return Ok(bz.total_in() as usize);
            }
            if bz.total_in() as usize == consumed && out.len() == produced {
                return Err(truncated(CODEC));
            }
        }
    }
}

impl Decompressor for Bzip2Decompressor {
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        if input.is_empty() {
            return Ok(());
        }
        decode_streams(CODEC, input, out, |rest, out| self.decode_stream(rest, out))?;
        check_limit(out, self.limit, CODEC)
    }
}
