//! encoding/types.rs
//! Text-to-bytes scheme registry and errors.

use std::fmt;
use std::str::FromStr;

use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::constants::scheme_ids;
use crate::types::ErrorKind;
use crate::utils::enum_name_or_hex;

#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum EncodingScheme {
    Base16 = scheme_ids::BASE16,
    Base64 = scheme_ids::BASE64,
    Base85 = scheme_ids::BASE85,
}

impl EncodingScheme {
    pub fn verify(raw: u16) -> Result<Self, EncodingError> {
        Self::try_from_primitive(raw).map_err(|_| EncodingError::UnsupportedScheme { raw })
    }

    pub fn name(self) -> &'static str {
        match self {
            EncodingScheme::Base16 => "base16",
            EncodingScheme::Base64 => "base64",
            EncodingScheme::Base85 => "base85",
        }
    }
}

impl fmt::Display for EncodingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EncodingScheme {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base16" | "b16" | "hex" => Ok(EncodingScheme::Base16),
            "base64" | "b64" => Ok(EncodingScheme::Base64),
            "base85" | "b85" => Ok(EncodingScheme::Base85),
            _ => Err(EncodingError::UnknownScheme { name: s.to_string() }),
        }
    }
}

fn scheme_name(raw: &u16) -> String {
    enum_name_or_hex::<EncodingScheme>(*raw)
}

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("unknown encoding scheme: {name}")]
    UnknownScheme { name: String },

    #[error("unsupported encoding scheme: {}", scheme_name(.raw))]
    UnsupportedScheme { raw: u16 },

    #[error("Failed to decode data with {scheme} encoding: {msg}")]
    Malformed { scheme: EncodingScheme, msg: String },
}

impl EncodingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EncodingError::UnknownScheme { .. } | EncodingError::UnsupportedScheme { .. } => {
                ErrorKind::InvalidParameter
            }
            EncodingError::Malformed { .. } => ErrorKind::DecodeFailure,
        }
    }
}
