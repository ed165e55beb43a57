//! scalar/text.rs
//! Text and hex renderings of a byte buffer.
//!
//! Encoding names are matched the way a codec registry matches them:
//! case-insensitive, with `_` and spaces equivalent to `-`. The Unicode
//! families, ASCII and Latin-1 are decoded here; every other label goes
//! through the WHATWG registry in `encoding_rs`. Decoding is strict: no
//! replacement characters are ever produced, and bytes a Windows code page
//! leaves unassigned are errors even where WHATWG maps them to C1 controls.

use std::borrow::Cow;

use encoding_rs::Encoding;

use crate::scalar::types::{Endianness, ScalarError};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TextCodec {
    Utf8,
    Utf8Sig,
    /// `None` → byte order taken from a BOM, little-endian without one.
    Utf16(Option<Endianness>),
    Utf32(Option<Endianness>),
    Ascii,
    Latin1,
    Whatwg(&'static Encoding),
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace(['_', ' '], "-")
}

fn resolve(name: &str) -> Result<TextCodec, ScalarError> {
    use Endianness::{Big, Little};

    let codec = match normalize(name).as_str() {
        "utf-8" | "utf8" | "u8" | "utf" | "cp65001" => TextCodec::Utf8,
        "utf-8-sig" | "utf8-sig" => TextCodec::Utf8Sig,
        "utf-16" | "utf16" | "u16" => TextCodec::Utf16(None),
        "utf-16-le" | "utf-16le" | "utf16le" | "utf16-le" => TextCodec::Utf16(Some(Little)),
        "utf-16-be" | "utf-16be" | "utf16be" | "utf16-be" => TextCodec::Utf16(Some(Big)),
        "utf-32" | "utf32" | "u32" => TextCodec::Utf32(None),
        "utf-32-le" | "utf-32le" | "utf32le" | "utf32-le" => TextCodec::Utf32(Some(Little)),
        "utf-32-be" | "utf-32be" | "utf32be" | "utf32-be" => TextCodec::Utf32(Some(Big)),
        "ascii" | "us-ascii" | "646" => TextCodec::Ascii,
        "latin-1" | "latin1" | "l1" | "iso-8859-1" | "iso8859-1" | "8859" | "cp819" => TextCodec::Latin1,
        normalized => {
            // WHATWG labels are case-insensitive but `_`-sensitive ("shift_jis"), try both spellings.
            let found = Encoding::for_label(name.trim().as_bytes())
                .or_else(|| Encoding::for_label(normalized.as_bytes()));
            match found {
                Some(enc) if enc != encoding_rs::REPLACEMENT => TextCodec::Whatwg(enc),
                _ => return Err(ScalarError::UnknownEncoding { name: name.to_string() }),
            }
        }
    };
    Ok(codec)
}

/// Decode `data` as text under the named character encoding.
///
/// # Errors
/// - `UnknownEncoding` if the name is not recognized (InvalidParameter).
/// - `InvalidText` if the bytes are malformed for that encoding (DecodeFailure).
pub fn to_text(data: &[u8], encoding: &str) -> Result<String, ScalarError> {
    let codec = resolve(encoding)?;
    let invalid = |msg: String| ScalarError::InvalidText { encoding: encoding.to_string(), msg };

    match codec {
        TextCodec::Utf8 => decode_utf8(data).map_err(invalid),
        TextCodec::Utf8Sig => decode_utf8(data.strip_prefix(&UTF8_BOM).unwrap_or(data)).map_err(invalid),
        TextCodec::Utf16(order) => decode_utf16(data, order).map_err(invalid),
        TextCodec::Utf32(order) => decode_utf32(data, order).map_err(invalid),
        TextCodec::Ascii => decode_ascii(data).map_err(invalid),
        TextCodec::Latin1 => Ok(data.iter().map(|&b| char::from(b)).collect()),
        TextCodec::Whatwg(enc) => {
            let text = enc
                .decode_without_bom_handling_and_without_replacement(data)
                .ok_or_else(|| invalid(format!("malformed {} sequence", enc.name())))?;
            if let Some(pos) = unassigned_c1(enc, &text) {
                return Err(invalid(format!(
                    "byte {:#04x} in position {}: character maps to <undefined>",
                    data[pos], pos
                )));
            }
            Ok(Cow::into_owned(text))
        }
    }
}

/// Windows code pages leave some bytes in 0x80..=0x9F unassigned. The
/// WHATWG tables decode those to C1 controls; treat them as undefined.
/// Single-byte, so the char index is the byte index.
fn unassigned_c1(enc: &'static Encoding, text: &str) -> Option<usize> {
    if !(enc.is_single_byte() && enc.name().starts_with("windows-")) {
        return None;
    }
    text.chars().position(|c| ('\u{80}'..='\u{9f}').contains(&c))
}

/// Lowercase hex, two characters per byte, no separators.
pub fn to_hex(data: &[u8]) -> String {
    hex::encode(data)
}

fn decode_utf8(data: &[u8]) -> Result<String, String> {
    std::str::from_utf8(data)
        .map(str::to_owned)
        .map_err(|e| e.to_string())
}

fn decode_ascii(data: &[u8]) -> Result<String, String> {
    match data.iter().position(|b| !b.is_ascii()) {
        Some(pos) => Err(format!(
            "byte {:#04x} in position {}: ordinal not in range(128)",
            data[pos], pos
        )),
        None => Ok(data.iter().map(|&b| char::from(b)).collect()),
    }
}

/// Strip a BOM matching `le_bom`/`be_bom` when no explicit order was requested.
fn take_bom<'a>(
    data: &'a [u8],
    order: Option<Endianness>,
    le_bom: &[u8],
    be_bom: &[u8],
) -> (&'a [u8], Endianness) {
    match order {
        Some(order) => (data, order),
        None => {
            if let Some(rest) = data.strip_prefix(le_bom) {
                (rest, Endianness::Little)
            } else if let Some(rest) = data.strip_prefix(be_bom) {
                (rest, Endianness::Big)
            } else {
                (data, Endianness::Little)
            }
        }
    }
}

fn decode_utf16(data: &[u8], order: Option<Endianness>) -> Result<String, String> {
    let (body, order) = take_bom(data, order, &[0xFF, 0xFE], &[0xFE, 0xFF]);
    if body.len() % 2 != 0 {
        return Err(format!("truncated data: {} bytes is not a multiple of 2", body.len()));
    }

    let units = body.chunks_exact(2).map(|c| {
        let pair = [c[0], c[1]];
        match order {
            Endianness::Little => u16::from_le_bytes(pair),
            Endianness::Big => u16::from_be_bytes(pair),
        }
    });

    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|e| format!("illegal UTF-16 surrogate {:#06x}", e.unpaired_surrogate()))
}

fn decode_utf32(data: &[u8], order: Option<Endianness>) -> Result<String, String> {
    let (body, order) = take_bom(data, order, &[0xFF, 0xFE, 0x00, 0x00], &[0x00, 0x00, 0xFE, 0xFF]);
    if body.len() % 4 != 0 {
        return Err(format!("truncated data: {} bytes is not a multiple of 4", body.len()));
    }

    body.chunks_exact(4)
        .enumerate()
        .map(|(i, c)| {
            let quad = [c[0], c[1], c[2], c[3]];
            let code = match order {
                Endianness::Little => u32::from_le_bytes(quad),
                Endianness::Big => u32::from_be_bytes(quad),
            };
            char::from_u32(code)
                .ok_or_else(|| format!("code point {:#x} not in range in position {}", code, i * 4))
        })
        .collect()
}
