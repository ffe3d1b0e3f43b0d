use thiserror::Error;

use crate::item::Kind;

/// Error type for CBOR decoding and value-model access.
///
/// Encoding and comparison never fail; everything fallible in this crate
/// reports one of these variants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CborError {
    #[error("input ended before the value was complete")]
    TruncatedInput,
    #[error("unexpected minor value")]
    UnexpectedMinor,
    #[error("indefinite-length aggregate not terminated by a break byte")]
    UnterminatedAggregate,
    #[error("trailing bytes after a complete value")]
    TrailingData,
    #[error("unexpected binary chunk major type")]
    UnexpectedBinChunkMajor,
    #[error("unexpected binary chunk minor value")]
    UnexpectedBinChunkMinor,
    #[error("unexpected string chunk major type")]
    UnexpectedStrChunkMajor,
    #[error("unexpected string chunk minor value")]
    UnexpectedStrChunkMinor,
    #[error("text payload is not valid UTF-8")]
    InvalidUtf8,
    #[error("nesting depth limit exceeded")]
    DepthLimit,
    #[error("expected {expected} value, found {actual}")]
    KindMismatch { expected: Kind, actual: Kind },
    #[error("index out of bounds")]
    IndexOutOfBounds,
    #[error("unsupported value for JSON conversion")]
    Unsupported,
}

impl From<cbor_item_buffers::BufferError> for CborError {
    fn from(err: cbor_item_buffers::BufferError) -> Self {
        match err {
            cbor_item_buffers::BufferError::EndOfBuffer => CborError::TruncatedInput,
            cbor_item_buffers::BufferError::InvalidUtf8 => CborError::InvalidUtf8,
        }
    }
}
