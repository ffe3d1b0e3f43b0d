//! Binary buffer utilities for cbor-item.
//!
//! # Overview
//!
//! - [`Reader`] - Reads big-endian binary data from a byte slice with
//!   checked, cursor-tracking accessors
//! - [`Writer`] - Writes binary data to an auto-growing buffer
//! - [`decode_f16`] - Reconstructs an IEEE 754 half-precision float as `f64`
//! - [`is_float32`] - Tests whether an `f64` survives an `f32` round trip
//!
//! # Example
//!
//! ```
//! use cbor_item_buffers::{Reader, Writer};
//!
//! // Write some data
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.u16(0x0203);
//! let data = writer.flush();
//!
//! // Read it back
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.try_u8(), Ok(0x01));
//! assert_eq!(reader.try_u16(), Ok(0x0203));
//! ```

mod f16;
mod is_float32;
mod reader;
mod writer;

pub use f16::decode_f16;
pub use is_float32::is_float32;
pub use reader::Reader;
pub use writer::Writer;

/// Error type for buffer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    EndOfBuffer,
    /// Invalid UTF-8 sequence.
    InvalidUtf8,
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::EndOfBuffer => write!(f, "end of buffer"),
            BufferError::InvalidUtf8 => write!(f, "invalid UTF-8 sequence"),
        }
    }
}

impl std::error::Error for BufferError {}
