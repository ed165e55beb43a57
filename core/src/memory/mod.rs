//! memory/mod.rs
//! Bounds-checked byte-range reads against a segment model.
//!
//! Notes:
//! - The host's loaded-image state stays behind the `SegmentModel` trait.
//! - `SegmentTable` is an in-memory model for flat images and tests.
//! - A read never spans two segments.

pub mod types;
pub mod reader;
pub mod table;

pub use types::*;
pub use reader::*;
pub use table::*;
