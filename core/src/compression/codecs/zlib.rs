//! Zlib (RFC 1950 wrapper around deflate) via flate2.
//!
//! Bytes after the end of the zlib stream are ignored.

use flate2::{Decompress, FlushDecompress, Status};

use crate::compression::codecs::{check_limit, process_failed, reserve_step, truncated};
use crate::compression::types::{CompressionCodec, CompressionError, Decompressor};

const CODEC: CompressionCodec = CompressionCodec::Zlib;

pub struct ZlibDecompressor {
    limit: Option<usize>,
}

impl ZlibDecompressor {
    pub fn new(limit: Option<usize>) -> Result<Box<dyn Decompressor>, CompressionError> {
        Ok(Box::new(Self { limit }))
    }
}

impl Decompressor for ZlibDecompressor {
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut z = Decompress::new(true);

        loop {
            reserve_step(out, self.limit, CODEC)?;
            let consumed = z.total_in() as usize;
            let produced = out.len();

            let status = z
                .decompress_vec(&input[consumed..], out, FlushDecompress::Finish)
                .map_err(|e| process_failed(CODEC, e))?;

            match status {
                Status::StreamEnd => break,
                Status::Ok | Status::BufError => {
                    if z.total_in() as usize == consumed && out.len() == produced {
                        return Err(truncated(CODEC));
                    }
                }
            }
        }

        check_limit(out, self.limit, CODEC)
    }
}
