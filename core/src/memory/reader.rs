//! memory/reader.rs
//!
//! Bounds-checked range reads.
//!
//! Order of checks:
//! 1. caller input (address ≥ 0, size > 0, size within the read limit)
//! 2. containing segment lookup
//! 3. end of range against the segment end
//! 4. the raw read itself (must return exactly `size` bytes)
//!
//! Every failure is terminal; nothing is retried.

use tracing::{debug, warn};

use crate::config::InterpConfig;
use crate::memory::types::{ByteRangeRequest, MemoryError, SegmentModel};

pub struct ByteRangeReader<M> {
    model: M,
    config: InterpConfig,
}

impl<M: SegmentModel> ByteRangeReader<M> {
    pub fn new(model: M) -> Self {
        Self { model, config: InterpConfig::default() }
    }

    pub fn with_config(model: M, config: InterpConfig) -> Self {
        Self { model, config }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn config(&self) -> &InterpConfig {
        &self.config
    }

    /// Read exactly `size` bytes at `address`.
    ///
    /// # Errors
    /// - `InvalidAddress` / `InvalidSize` / `ReadLimitExceeded` for bad caller input.
    /// - `SegmentNotFound` if no segment contains `address`.
    /// - `OutOfBounds` if `address + size` passes the segment end.
    /// - `ReadFailure` / `ShortRead` / `Backend` if the model cannot produce the bytes.
    pub fn read_bytes(&self, address: i128, size: i128) -> Result<Vec<u8>, MemoryError> {
        let request = ByteRangeRequest::new(address, size)?;
        self.read_range(request)
    }

    pub fn read_range(&self, request: ByteRangeRequest) -> Result<Vec<u8>, MemoryError> {
        let (address, size) = (request.address(), request.size());
        debug!(address = %format!("{:#x}", address), size, "read_bytes");

        if let Some(limit) = self.config.max_read_size {
            if size > limit {
                return Err(MemoryError::ReadLimitExceeded { size, limit });
            }
        }

        let segment = self
            .model
            .find_segment(address)?
            .ok_or(MemoryError::SegmentNotFound { address })?;

        let end = request.end();
        if end > segment.end as u128 {
            warn!(
                segment = %segment.name,
                start = %format!("{:#x}", address),
                end = %format!("{:#x}", end),
                segment_end = %format!("{:#x}", segment.end),
                "range exceeds segment"
            );
            return Err(MemoryError::OutOfBounds { start: address, end, segment_end: segment.end });
        }

        let data = self
            .model
            .read_raw(address, size)?
            .ok_or(MemoryError::ReadFailure { address, size })?;

        if data.len() != size {
            return Err(MemoryError::ShortRead { address, size, got: data.len() });
        }

        Ok(data)
    }
}

/// One-shot form of [`ByteRangeReader::read_bytes`].
pub fn read_bytes<M: SegmentModel>(model: &M, address: i128, size: i128) -> Result<Vec<u8>, MemoryError> {
    ByteRangeReader::new(model).read_bytes(address, size)
}
