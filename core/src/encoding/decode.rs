//! encoding/decode.rs
//!
//! Text → bytes for base16/base64/base85.
//!
//! Notes:
//! - The caller names the scheme; nothing is sniffed.
//! - base16 and base64 are strict (no whitespace, padding required for base64).

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::encoding::base85;
use crate::encoding::types::{EncodingError, EncodingScheme};

fn malformed(scheme: EncodingScheme) -> impl Fn(String) -> EncodingError {
    move |msg| EncodingError::Malformed { scheme, msg }
}

pub fn decode_base16(text: &str) -> Result<Vec<u8>, EncodingError> {
    hex::decode(text).map_err(|e| malformed(EncodingScheme::Base16)(e.to_string()))
}

pub fn decode_base64(text: &str) -> Result<Vec<u8>, EncodingError> {
    STANDARD
        .decode(text)
        .map_err(|e| malformed(EncodingScheme::Base64)(e.to_string()))
}

pub fn decode_base85(text: &str) -> Result<Vec<u8>, EncodingError> {
    base85::decode(text).map_err(malformed(EncodingScheme::Base85))
}

/// Decode `text` under `scheme`.
pub fn decode(text: &str, scheme: EncodingScheme) -> Result<Vec<u8>, EncodingError> {
    match scheme {
        EncodingScheme::Base16 => decode_base16(text),
        EncodingScheme::Base64 => decode_base64(text),
        EncodingScheme::Base85 => decode_base85(text),
    }
}

/// Decode with the scheme given by name (`"base64"`, `"b85"`, `"hex"`, ...).
pub fn decode_named(text: &str, scheme: &str) -> Result<Vec<u8>, EncodingError> {
    decode(text, scheme.parse()?)
}
