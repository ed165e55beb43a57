//! bytelens-core
//!
//! Byte-range reads against an analyzed image, plus interpretation of the
//! bytes as scalars or text, payload decoding and decompression.
//! No Python, no PyO3, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod types;
pub mod utils;

// Range reads
pub mod memory;

// Interpretation
pub mod scalar;
pub mod encoding;
pub mod compression;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{decompress, CompressionCodec};
    pub use crate::config::InterpConfig;
    pub use crate::encoding::{decode, EncodingScheme};
    pub use crate::memory::{ByteRangeReader, Segment, SegmentModel, SegmentTable};
    pub use crate::scalar::{interpret, to_hex, to_text, Endianness, ScalarKind, ScalarValue};
    pub use crate::types::{BytelensError, ErrorCategory, ErrorKind};
}
