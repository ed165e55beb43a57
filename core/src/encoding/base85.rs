//! encoding/base85.rs
//! RFC 1924 base85 (the alphabet used by git binary patches and Python's `b85*`).
//!
//! Layout: each 4-byte big-endian word becomes 5 digits. A trailing partial
//! group of k digits (1 ≤ k ≤ 4) is padded with the highest digit and
//! yields k − 1 bytes, so a lone trailing digit decodes to nothing.

const ALPHABET: &[u8; 85] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+-;<=>?@^_`{|}~";

const INVALID: u8 = 0xFF;

const fn build_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

static DECODE_TABLE: [u8; 256] = build_table();

/// Decode RFC 1924 text. Errors carry a human-readable reason.
pub fn decode(text: &str) -> Result<Vec<u8>, String> {
    let input = text.as_bytes();
    let mut out = Vec::with_capacity(input.len() / 5 * 4 + 4);
    for (group_idx, group) in input.chunks(5).enumerate() {
        let start = group_idx * 5;
        let mut acc: u64 = 0;
        for slot in 0..5 {
            let digit = match group.get(slot) {
                Some(&c) => {
                    let d = DECODE_TABLE[c as usize];
                    if d == INVALID {
                        return Err(format!("bad base85 character at position {}", start + slot));
                    }
                    d
                }
                None => 84,
            };
            acc = acc * 85 + u64::from(digit);
        }
        let word = u32::try_from(acc)
            .map_err(|_| format!("base85 overflow in hunk starting at byte {}", start))?;

        let bytes = word.to_be_bytes();
        let keep = if group.len() == 5 { 4 } else { group.len() - 1 };
        out.extend_from_slice(&bytes[..keep]);
    }
    Ok(out)
}

/// Encode bytes as RFC 1924 text, without padding characters.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len().div_ceil(4) * 5);
    for chunk in data.chunks(4) {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        let mut acc = u32::from_be_bytes(word);

        let mut digits = [0u8; 5];
        for d in digits.iter_mut().rev() {
            *d = ALPHABET[(acc % 85) as usize];
            acc /= 85;
        }
        let keep = if chunk.len() == 4 { 5 } else { chunk.len() + 1 };
        out.extend(digits[..keep].iter().map(|&b| char::from(b)));
    }
    out
}
