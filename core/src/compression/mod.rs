//! compression/mod.rs
//! Single-shot decompression of zlib, bzip2 and lzma payloads.
//!
//! Notes:
//! - The caller names the codec; magic bytes are never sniffed, so a wrong
//!   codec reports exactly like corrupt input.
//! - Registry resolves codec IDs to implementations.
//! - An optional output limit guards against decompression bombs.

pub mod constants;
pub mod types;
pub mod registry;
pub mod codecs;
pub mod decompress;

pub use constants::*;
pub use types::*;
pub use registry::*;
pub use decompress::*;
