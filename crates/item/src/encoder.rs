//! `CborEncoder` — [`DataItem`] to bytes.

use cbor_item_buffers::{is_float32, Writer};

use crate::constants::*;
use crate::item::DataItem;

/// Full CBOR encoder.
///
/// Total for any well-formed value. Always emits definite lengths (the
/// decoder accepts indefinite framing, the encoder never produces it)
/// and picks the smallest of the four argument tiers that covers each
/// magnitude. Maps encode in stored total-order key sequence, so equal
/// maps produce identical bytes regardless of insertion order.
pub struct CborEncoder {
    pub writer: Writer,
}

impl Default for CborEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl CborEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    pub fn with_writer(writer: Writer) -> Self {
        Self { writer }
    }

    /// Encodes a value and returns its bytes.
    pub fn encode(&mut self, item: &DataItem) -> Vec<u8> {
        self.writer.reset();
        self.write_any(item);
        self.writer.flush()
    }

    pub fn write_any(&mut self, item: &DataItem) {
        match item {
            DataItem::Unsigned(value) => self.write_major(MAJOR_UIN, *value),
            DataItem::Negative(value) => self.write_major(MAJOR_NIN, *value),
            DataItem::Text(text) => self.write_str(text),
            DataItem::Array(items) => self.write_arr(items),
            DataItem::Map(entries) => self.write_map(entries),
            DataItem::Tagged(tag, child) => self.write_tag(*tag, child),
            DataItem::Simple(code) => self.write_simple(*code),
            DataItem::Float(value) => self.write_float(*value),
            DataItem::Binary(bytes) => self.write_bin(bytes),
        }
    }

    /// Writes a header with the smallest argument form covering `value`.
    pub fn write_major(&mut self, major: u8, value: u64) {
        let w = &mut self.writer;
        w.ensure_capacity(9);
        let x = w.x;
        let overlay = major << 5;
        if value <= 23 {
            w.uint8[x] = overlay | value as u8;
            w.x = x + 1;
        } else if value <= 0xff {
            w.uint8[x] = overlay | MINOR_U8;
            w.uint8[x + 1] = value as u8;
            w.x = x + 2;
        } else if value <= 0xffff {
            w.uint8[x] = overlay | MINOR_U16;
            let b = (value as u16).to_be_bytes();
            w.uint8[x + 1] = b[0];
            w.uint8[x + 2] = b[1];
            w.x = x + 3;
        } else if value <= 0xffff_ffff {
            w.uint8[x] = overlay | MINOR_U32;
            w.uint8[x + 1..x + 5].copy_from_slice(&(value as u32).to_be_bytes());
            w.x = x + 5;
        } else {
            w.uint8[x] = overlay | MINOR_U64;
            w.uint8[x + 1..x + 9].copy_from_slice(&value.to_be_bytes());
            w.x = x + 9;
        }
    }

    pub fn write_bin(&mut self, bytes: &[u8]) {
        self.write_major(MAJOR_BIN, bytes.len() as u64);
        self.writer.buf(bytes);
    }

    pub fn write_str(&mut self, text: &str) {
        self.write_major(MAJOR_STR, text.len() as u64);
        self.writer.utf8(text);
    }

    pub fn write_arr(&mut self, items: &[DataItem]) {
        self.write_major(MAJOR_ARR, items.len() as u64);
        for item in items {
            self.write_any(item);
        }
    }

    pub fn write_map(&mut self, entries: &[(DataItem, DataItem)]) {
        self.write_major(MAJOR_MAP, entries.len() as u64);
        for (key, value) in entries {
            self.write_any(key);
            self.write_any(value);
        }
    }

    pub fn write_tag(&mut self, tag: u64, child: &DataItem) {
        self.write_major(MAJOR_TAG, tag);
        self.write_any(child);
    }

    /// Simple codes 0-23 are a bare header; larger codes take the
    /// one-byte follow-on form.
    pub fn write_simple(&mut self, code: u8) {
        if code <= 23 {
            self.writer.u8(OVERLAY_TKN | code);
        } else {
            self.writer.u16(u16::from_be_bytes([OVERLAY_TKN | MINOR_U8, code]));
        }
    }

    /// Emits the 4-byte form when the value survives an `f32` round
    /// trip, the 8-byte form otherwise. Half precision is decode-only.
    pub fn write_float(&mut self, value: f64) {
        if is_float32(value) {
            self.writer.u8f32(OVERLAY_TKN | MINOR_U32, value as f32);
        } else {
            self.writer.u8f64(OVERLAY_TKN | MINOR_U64, value);
        }
    }
}
