/// Fixed widths (bytes) of the numeric scalar kinds.
pub mod widths {
    pub const U64: usize = 8;
    pub const I64: usize = 8;
    pub const U32: usize = 4;
    pub const I32: usize = 4;
    pub const U16: usize = 2;
    pub const I16: usize = 2;
    pub const U8: usize = 1;
    pub const F32: usize = 4;
    pub const F64: usize = 8;
}

/// Stable scalar kind ids (u8) for host bindings.
pub mod scalar_ids {
    pub const STRING: u8  = 0x00;
    pub const HEX: u8     = 0x01;
    pub const U64: u8     = 0x02;
    pub const I64: u8     = 0x03;
    pub const U32: u8     = 0x04;
    pub const I32: u8     = 0x05;
    pub const U16: u8     = 0x06;
    pub const I16: u8     = 0x07;
    pub const U8: u8      = 0x08;
    pub const FLOAT32: u8 = 0x09;
    pub const FLOAT64: u8 = 0x0A;
}

/// Stable encoding scheme ids (u16).
pub mod scheme_ids {
    pub const BASE16: u16 = 0x0010;
    pub const BASE64: u16 = 0x0040;
    pub const BASE85: u16 = 0x0055;
}

/// Text encoding used when a string kind is interpreted without an explicit name.
pub const DEFAULT_TEXT_ENCODING: &str = "utf-8";
