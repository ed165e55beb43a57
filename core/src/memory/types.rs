//! memory/types.rs
//! Segment descriptors, range requests and the segment-model seam.

use thiserror::Error;

use crate::types::ErrorKind;
use crate::utils::signed_hex;

/// Contiguous region of the analyzed address space, `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub name: String,
    pub start: u64,
    pub end: u64,
}

impl Segment {
    pub fn new(name: impl Into<String>, start: u64, end: u64) -> Self {
        Self { name: name.into(), start, end }
    }

    pub fn contains(&self, address: u64) -> bool {
        self.start <= address && address < self.end
    }

    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What the reader needs from the host: segment lookup and raw reads.
///
/// Both calls report `Ok(None)` for "nothing there" and `Err` only when the
/// backend itself failed (e.g. a host callback raised).
pub trait SegmentModel {
    fn find_segment(&self, address: u64) -> Result<Option<Segment>, MemoryError>;
    fn read_raw(&self, address: u64, size: usize) -> Result<Option<Vec<u8>>, MemoryError>;
}

impl<M: SegmentModel + ?Sized> SegmentModel for &M {
    fn find_segment(&self, address: u64) -> Result<Option<Segment>, MemoryError> {
        (**self).find_segment(address)
    }

    fn read_raw(&self, address: u64, size: usize) -> Result<Option<Vec<u8>>, MemoryError> {
        (**self).read_raw(address, size)
    }
}

/// Validated (address, size) pair.
///
/// Raw values come in as `i128` so negative host inputs are caught here
/// instead of wrapping. `new` is the only constructor, so every request
/// that reaches a reader has already passed these checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRangeRequest {
    address: u64,
    size: usize,
}

impl ByteRangeRequest {
    pub fn new(address: i128, size: i128) -> Result<Self, MemoryError> {
        let address = u64::try_from(address)
            .map_err(|_| MemoryError::InvalidAddress { address })?;
        if size <= 0 {
            return Err(MemoryError::InvalidSize { size });
        }
        let size = usize::try_from(size).map_err(|_| MemoryError::InvalidSize { size })?;
        Ok(Self { address, size })
    }

    pub fn address(&self) -> u64 {
        self.address
    }

    /// Always at least 1.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Exclusive end address. Computed wide so `u64::MAX + n` cannot wrap.
    pub fn end(&self) -> u128 {
        self.address as u128 + self.size as u128
    }
}

#[derive(Debug, Error)]
pub enum MemoryError {
    #[error("address : {}", signed_hex(.address))]
    InvalidAddress { address: i128 },

    #[error("size : {}", signed_hex(.size))]
    InvalidSize { size: i128 },

    #[error("size : {size:#x} exceeds read limit {limit:#x}")]
    ReadLimitExceeded { size: usize, limit: usize },

    #[error("invalid segment [{start:#x}, {end:#x})")]
    InvalidSegment { start: u64, end: u128 },

    #[error("Address {address:#x} is not in any segment")]
    SegmentNotFound { address: u64 },

    #[error(
        "Failed to dump bytes: requested range [{start:#x}, {end:#x}) \
         exceeds segment boundary (segment ends at {segment_end:#x})"
    )]
    OutOfBounds { start: u64, end: u128, segment_end: u64 },

    #[error("Failed to read {size} bytes at address {address:#x}")]
    ReadFailure { address: u64, size: usize },

    #[error("Failed to read {size} bytes at address {address:#x}: model returned {got} bytes")]
    ShortRead { address: u64, size: usize, got: usize },

    #[error("segment model error: {0}")]
    Backend(String),
}

impl MemoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MemoryError::InvalidAddress { .. }
            | MemoryError::InvalidSize { .. }
            | MemoryError::ReadLimitExceeded { .. }
            | MemoryError::InvalidSegment { .. } => ErrorKind::InvalidParameter,
            MemoryError::SegmentNotFound { .. } => ErrorKind::SegmentNotFound,
            MemoryError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            MemoryError::ReadFailure { .. }
            | MemoryError::ShortRead { .. }
            | MemoryError::Backend(_) => ErrorKind::ReadFailure,
        }
    }
}
