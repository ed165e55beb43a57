//! config.rs
//! In-code limits for range reads and decompression output.
//!
//! Nothing here is read from files or the environment; the host decides.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterpConfig {
    /// Largest range a single `read_bytes` call may request.
    /// - `None` → unbounded (default).
    pub max_read_size: Option<usize>,

    /// Largest output a single decompression may produce.
    /// - `None` → unbounded (default).
    pub max_output_size: Option<usize>,
}

impl InterpConfig {
    pub fn new(max_read_size: Option<usize>, max_output_size: Option<usize>) -> Self {
        Self { max_read_size, max_output_size }
    }

    pub fn with_max_read_size(mut self, limit: usize) -> Self {
        self.max_read_size = Some(limit);
        self
    }

    pub fn with_max_output_size(mut self, limit: usize) -> Self {
        self.max_output_size = Some(limit);
        self
    }
}
