//! `CborDecoder` — byte stream to [`DataItem`].

use cbor_item_buffers::{decode_f16, Reader};

use crate::constants::*;
use crate::error::CborError;
use crate::item::{map_insert, DataItem};

/// Default ceiling on nested arrays/maps/tags.
pub const DEFAULT_MAX_DEPTH: u32 = 512;

/// Full CBOR decoder.
///
/// Reads one well-formed value per call, covering every major type,
/// indefinite-length strings and aggregates, and half/single/double
/// floats. Nesting depth is bounded by an explicit counter so that
/// adversarially nested input fails with [`CborError::DepthLimit`]
/// instead of exhausting the call stack.
pub struct CborDecoder {
    max_depth: u32,
}

impl Default for CborDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl CborDecoder {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Overrides the nesting-depth ceiling.
    pub fn with_max_depth(max_depth: u32) -> Self {
        Self { max_depth }
    }

    /// Decodes exactly one value spanning the whole input.
    ///
    /// Trailing bytes after a well-formed value are a failure, not a
    /// partial success.
    pub fn decode(&self, data: &[u8]) -> Result<DataItem, CborError> {
        let mut reader = Reader::new(data);
        let item = self.read(&mut reader)?;
        if reader.size() != 0 {
            return Err(CborError::TrailingData);
        }
        Ok(item)
    }

    /// Reads one value from a positioned cursor, leaving the cursor
    /// immediately after it. The cursor position is unspecified after a
    /// failed read.
    pub fn read(&self, reader: &mut Reader<'_>) -> Result<DataItem, CborError> {
        self.read_any(reader, self.max_depth)
    }

    /// Reports whether `data` decodes to exactly one well-formed value
    /// with no trailing bytes.
    pub fn validate(&self, data: &[u8]) -> bool {
        self.decode(data).is_ok()
    }

    fn read_any(&self, reader: &mut Reader<'_>, depth: u32) -> Result<DataItem, CborError> {
        if depth == 0 {
            return Err(CborError::DepthLimit);
        }
        let (major, minor, value) = read_header(reader)?;
        match major {
            MAJOR_UIN => {
                if minor > MINOR_U64 {
                    return Err(CborError::UnexpectedMinor);
                }
                Ok(DataItem::Unsigned(value))
            }
            MAJOR_NIN => {
                if minor > MINOR_U64 {
                    return Err(CborError::UnexpectedMinor);
                }
                Ok(DataItem::Negative(value))
            }
            MAJOR_BIN => {
                if minor == MINOR_INDEF {
                    let bytes = read_chunked(
                        reader,
                        MAJOR_BIN,
                        CborError::UnexpectedBinChunkMajor,
                        CborError::UnexpectedBinChunkMinor,
                    )?;
                    Ok(DataItem::Binary(bytes))
                } else if minor > MINOR_U64 {
                    Err(CborError::UnexpectedMinor)
                } else {
                    Ok(DataItem::Binary(reader.try_buf(arg_size(value)?)?.to_vec()))
                }
            }
            MAJOR_STR => {
                let bytes = if minor == MINOR_INDEF {
                    read_chunked(
                        reader,
                        MAJOR_STR,
                        CborError::UnexpectedStrChunkMajor,
                        CborError::UnexpectedStrChunkMinor,
                    )?
                } else if minor > MINOR_U64 {
                    return Err(CborError::UnexpectedMinor);
                } else {
                    reader.try_buf(arg_size(value)?)?.to_vec()
                };
                let text = String::from_utf8(bytes).map_err(|_| CborError::InvalidUtf8)?;
                Ok(DataItem::Text(text))
            }
            MAJOR_ARR => {
                let mut items = Vec::new();
                if minor == MINOR_INDEF {
                    while !at_break(reader)? {
                        items.push(self.read_any(reader, depth - 1)?);
                    }
                    reader.skip(1);
                } else if minor > MINOR_U64 {
                    return Err(CborError::UnexpectedMinor);
                } else {
                    for _ in 0..value {
                        items.push(self.read_any(reader, depth - 1)?);
                    }
                }
                Ok(DataItem::Array(items))
            }
            MAJOR_MAP => {
                let mut entries = Vec::new();
                if minor == MINOR_INDEF {
                    while !at_break(reader)? {
                        let key = self.read_any(reader, depth - 1)?;
                        let val = self.read_any(reader, depth - 1)?;
                        map_insert(&mut entries, key, val);
                    }
                    reader.skip(1);
                } else if minor > MINOR_U64 {
                    return Err(CborError::UnexpectedMinor);
                } else {
                    for _ in 0..value {
                        let key = self.read_any(reader, depth - 1)?;
                        let val = self.read_any(reader, depth - 1)?;
                        map_insert(&mut entries, key, val);
                    }
                }
                Ok(DataItem::Map(entries))
            }
            MAJOR_TAG => {
                if minor > MINOR_U64 {
                    return Err(CborError::UnexpectedMinor);
                }
                let child = self.read_any(reader, depth - 1)?;
                Ok(DataItem::Tagged(value, Box::new(child)))
            }
            _ => {
                // MAJOR_TKN: simple values and floats. Minor 31 here is
                // a stray break byte, equally malformed.
                if minor > MINOR_U64 {
                    return Err(CborError::UnexpectedMinor);
                }
                match minor {
                    MINOR_U16 => Ok(DataItem::Float(decode_f16(value as u16))),
                    MINOR_U32 => Ok(DataItem::Float(f32::from_bits(value as u32) as f64)),
                    MINOR_U64 => Ok(DataItem::Float(f64::from_bits(value))),
                    _ => Ok(DataItem::Simple(value as u8)),
                }
            }
        }
    }
}

/// Reads one header byte and its argument: the 3-bit major type, the
/// 5-bit minor code, and the argument value (the minor itself for codes
/// 0-23, or the 1/2/4/8-byte big-endian follow-on for codes 24-27; the
/// reserved codes 28-31 carry no argument and are left to the caller).
fn read_header(reader: &mut Reader<'_>) -> Result<(u8, u8, u64), CborError> {
    let octet = reader.try_u8()?;
    let major = octet >> 5;
    let minor = octet & MINOR_MASK;
    let value = match minor {
        MINOR_U8 => reader.try_u8()? as u64,
        MINOR_U16 => reader.try_u16()? as u64,
        MINOR_U32 => reader.try_u32()? as u64,
        MINOR_U64 => reader.try_u64()?,
        _ => minor as u64,
    };
    Ok((major, minor, value))
}

/// Checks whether the next byte is the break code, without consuming it.
/// Running out of input while looking for a break is an unterminated
/// aggregate, not a plain truncation.
fn at_break(reader: &mut Reader<'_>) -> Result<bool, CborError> {
    match reader.try_peek() {
        Ok(octet) => Ok(octet == CBOR_END),
        Err(_) => Err(CborError::UnterminatedAggregate),
    }
}

/// Reads the definite-length chunks of an indefinite-length string and
/// concatenates their payloads. A chunk of the wrong major type, or one
/// that is itself indefinite, is malformed.
fn read_chunked(
    reader: &mut Reader<'_>,
    expected_major: u8,
    major_err: CborError,
    minor_err: CborError,
) -> Result<Vec<u8>, CborError> {
    let mut bytes = Vec::new();
    while !at_break(reader)? {
        let (major, minor, value) = read_header(reader)?;
        if major != expected_major {
            return Err(major_err);
        }
        if minor > MINOR_U64 {
            return Err(minor_err);
        }
        bytes.extend_from_slice(reader.try_buf(arg_size(value)?)?);
    }
    reader.skip(1);
    Ok(bytes)
}

/// Converts a wire length argument to `usize`; a length that cannot fit
/// in memory can never be satisfied by the remaining input.
fn arg_size(value: u64) -> Result<usize, CborError> {
    usize::try_from(value).map_err(|_| CborError::TruncatedInput)
}
