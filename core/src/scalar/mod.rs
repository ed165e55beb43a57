//! scalar/mod.rs
//! Interpretation of a fetched byte buffer as a scalar or text value.

pub mod types;
pub mod decode;
pub mod text;

pub use types::*;
pub use decode::*;
pub use text::*;
