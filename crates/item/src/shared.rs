//! Shared convenience wrappers for encode/decode/validate.

use crate::decoder::CborDecoder;
use crate::encoder::CborEncoder;
use crate::error::CborError;
use crate::item::DataItem;

/// Encodes a [`DataItem`] into CBOR bytes.
pub fn encode(item: &DataItem) -> Vec<u8> {
    let mut encoder = CborEncoder::new();
    encoder.encode(item)
}

/// Decodes CBOR bytes into a [`DataItem`]; the input must hold exactly
/// one value.
pub fn decode(data: &[u8]) -> Result<DataItem, CborError> {
    let decoder = CborDecoder::new();
    decoder.decode(data)
}

/// Reports whether `data` is exactly one well-formed value.
pub fn validate(data: &[u8]) -> bool {
    CborDecoder::new().validate(data)
}
