use std::fmt;
use thiserror::Error;

use crate::{
    compression::CompressionError,
    encoding::EncodingError,
    memory::MemoryError,
    scalar::ScalarError,
};

/// Broad error taxonomy.
/// - `InvalidParameter`: caller input violates a documented precondition.
/// - `OperationFailure`: valid input, but the operation could not complete
///   against the analyzed image or payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    InvalidParameter,
    OperationFailure,
}

/// Fine-grained error kind carried by every error in this crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidParameter,
    SegmentNotFound,
    OutOfBounds,
    ReadFailure,
    DecodeFailure,
    DecompressFailure,
}

impl ErrorKind {
    pub fn category(self) -> ErrorCategory {
        match self {
            ErrorKind::InvalidParameter => ErrorCategory::InvalidParameter,
            ErrorKind::SegmentNotFound
            | ErrorKind::OutOfBounds
            | ErrorKind::ReadFailure
            | ErrorKind::DecodeFailure
            | ErrorKind::DecompressFailure => ErrorCategory::OperationFailure,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidParameter => "invalid parameter",
            ErrorKind::SegmentNotFound => "segment not found",
            ErrorKind::OutOfBounds => "out of bounds",
            ErrorKind::ReadFailure => "read failure",
            ErrorKind::DecodeFailure => "decode failure",
            ErrorKind::DecompressFailure => "decompress failure",
        };
        f.write_str(name)
    }
}

/// Unified error covering range reads, scalar decoding, payload decoding and decompression.
/// - `From<T>` impls enable `?` across modules.
/// - Display is the module error's message unchanged, so host bindings can surface it verbatim.
#[derive(Debug, Error)]
pub enum BytelensError {
    #[error(transparent)]
    Memory(#[from] MemoryError),

    #[error(transparent)]
    Scalar(#[from] ScalarError),

    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Compression(#[from] CompressionError),
}

impl BytelensError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BytelensError::Memory(e) => e.kind(),
            BytelensError::Scalar(e) => e.kind(),
            BytelensError::Encoding(e) => e.kind(),
            BytelensError::Compression(e) => e.kind(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind().category()
    }
}

pub type Result<T, E = BytelensError> = std::result::Result<T, E>;
