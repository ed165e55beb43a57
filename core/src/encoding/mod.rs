//! encoding/mod.rs
//! Decoding of text payloads (base16/base64/base85) into raw bytes.

pub mod types;
pub mod decode;
pub mod base85;

pub use types::*;
pub use decode::*;
