//! memory/table.rs
//! In-memory segment model.
//!
//! Segments are keyed by start address. A segment may carry fewer loaded
//! bytes than its nominal length (`.bss`-style); reads touching the unloaded
//! tail report no data.

use std::collections::BTreeMap;

use crate::memory::types::{MemoryError, Segment, SegmentModel};

#[derive(Debug, Clone)]
struct Entry {
    segment: Segment,
    data: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct SegmentTable {
    entries: BTreeMap<u64, Entry>,
}

impl SegmentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single segment holding a whole flat image at `base`.
    pub fn from_flat_image(name: impl Into<String>, base: u64, bytes: Vec<u8>) -> Result<Self, MemoryError> {
        let mut table = Self::new();
        table.insert(name, base, bytes)?;
        Ok(table)
    }

    /// Fully loaded segment `[start, start + bytes.len())`.
    pub fn insert(&mut self, name: impl Into<String>, start: u64, bytes: Vec<u8>) -> Result<(), MemoryError> {
        let len = bytes.len() as u64;
        self.insert_partial(name, start, len, bytes)
    }

    /// Address space without readable bytes.
    pub fn insert_unloaded(&mut self, name: impl Into<String>, start: u64, len: u64) -> Result<(), MemoryError> {
        self.insert_partial(name, start, len, Vec::new())
    }

    /// Segment of `len` bytes whose first `bytes.len()` bytes are loaded.
    /// More loaded bytes than `len` is rejected.
    pub fn insert_partial(
        &mut self,
        name: impl Into<String>,
        start: u64,
        len: u64,
        bytes: Vec<u8>,
    ) -> Result<(), MemoryError> {
        let end_wide = start as u128 + len as u128;
        let end = match u64::try_from(end_wide) {
            Ok(end) if len > 0 => end,
            _ => return Err(MemoryError::InvalidSegment { start, end: end_wide }),
        };
        if bytes.len() as u64 > len || self.overlaps(start, end) {
            return Err(MemoryError::InvalidSegment { start, end: end_wide });
        }

        let segment = Segment::new(name, start, end);
        self.entries.insert(start, Entry { segment, data: bytes });
        Ok(())
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.entries.values().map(|e| &e.segment)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_at(&self, address: u64) -> Option<&Entry> {
        self.entries
            .range(..=address)
            .next_back()
            .map(|(_, e)| e)
            .filter(|e| e.segment.contains(address))
    }

    fn overlaps(&self, start: u64, end: u64) -> bool {
        // Neighbour below may run into `start`; anything starting inside [start, end) collides.
        let below = self
            .entries
            .range(..start)
            .next_back()
            .is_some_and(|(_, e)| e.segment.end > start);
        below || self.entries.range(start..end).next().is_some()
    }
}

impl SegmentModel for SegmentTable {
    fn find_segment(&self, address: u64) -> Result<Option<Segment>, MemoryError> {
        Ok(self.entry_at(address).map(|e| e.segment.clone()))
    }

    fn read_raw(&self, address: u64, size: usize) -> Result<Option<Vec<u8>>, MemoryError> {
        let Some(entry) = self.entry_at(address) else {
            return Ok(None);
        };
        let offset = (address - entry.segment.start) as usize;
        let bytes = offset
            .checked_add(size)
            .and_then(|end| entry.data.get(offset..end))
            .map(<[u8]>::to_vec);
        Ok(bytes)
    }
}
