/// Stable codec IDs (u16) for host bindings.
pub mod codec_ids {
    pub const ZLIB: u16  = 0x0001;
    pub const BZIP2: u16 = 0x0002;
    pub const LZMA: u16  = 0x0003;
}

/// Initial output reservation for a single-shot decompression.
pub const OUTPUT_CHUNK: usize = 64 * 1024;

/// Expected expansion factor used to size the first output reservation.
pub const EXPANSION_HINT: usize = 4;

/// liblzma memory limit for the auto decoder (no limit; output limits are enforced separately).
pub const LZMA_MEMLIMIT: u64 = u64::MAX;
