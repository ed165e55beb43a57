use std::fmt;
use num_enum::TryFromPrimitive;

/// Render a registry id as its enum variant name, or as hex when unknown.
pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

/// Hex rendering that keeps the sign of caller-supplied values (`-0x10`, not two's complement).
pub fn signed_hex(value: &i128) -> String {
    let value = *value;
    if value < 0 {
        format!("-{:#x}", value.unsigned_abs())
    } else {
        format!("{:#x}", value)
    }
}

/// "1 byte" / "N bytes".
pub fn byte_count(n: &usize) -> String {
    let n = *n;
    if n == 1 {
        "1 byte".to_string()
    } else {
        format!("{} bytes", n)
    }
}
