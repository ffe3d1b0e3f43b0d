//! Writer/Reader roundtrip matrix and f16 edge-case tests for the buffers crate.

use cbor_item_buffers::{decode_f16, is_float32, BufferError, Reader, Writer};

// ---------------------------------------------------------------------------
// Writer/Reader roundtrip matrix
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_u8() {
    let mut w = Writer::new();
    w.u8(0x00);
    w.u8(0x7f);
    w.u8(0xff);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.try_u8(), Ok(0x00));
    assert_eq!(r.try_u8(), Ok(0x7f));
    assert_eq!(r.try_u8(), Ok(0xff));
    assert!(r.is_empty());
}

#[test]
fn roundtrip_u16() {
    let mut w = Writer::new();
    w.u16(0);
    w.u16(0x0102);
    w.u16(u16::MAX);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.try_u16(), Ok(0));
    assert_eq!(r.try_u16(), Ok(0x0102));
    assert_eq!(r.try_u16(), Ok(u16::MAX));
}

#[test]
fn roundtrip_u32() {
    let mut w = Writer::new();
    w.u32(0);
    w.u32(0x01020304);
    w.u32(u32::MAX);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.try_u32(), Ok(0));
    assert_eq!(r.try_u32(), Ok(0x01020304));
    assert_eq!(r.try_u32(), Ok(u32::MAX));
}

#[test]
fn roundtrip_u64() {
    let mut w = Writer::new();
    w.u64(0);
    w.u64(0x0102030405060708);
    w.u64(u64::MAX);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.try_u64(), Ok(0));
    assert_eq!(r.try_u64(), Ok(0x0102030405060708));
    assert_eq!(r.try_u64(), Ok(u64::MAX));
}

#[test]
fn roundtrip_f32() {
    let mut w = Writer::new();
    w.f32(0.0);
    w.f32(1.5);
    w.f32(-1.5);
    w.f32(f32::INFINITY);
    w.f32(f32::NEG_INFINITY);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.try_f32(), Ok(0.0));
    assert_eq!(r.try_f32(), Ok(1.5));
    assert_eq!(r.try_f32(), Ok(-1.5));
    assert_eq!(r.try_f32(), Ok(f32::INFINITY));
    assert_eq!(r.try_f32(), Ok(f32::NEG_INFINITY));
}

#[test]
fn roundtrip_f32_nan() {
    let mut w = Writer::new();
    w.f32(f32::NAN);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert!(r.try_f32().unwrap().is_nan());
}

#[test]
fn roundtrip_f64() {
    let mut w = Writer::new();
    w.f64(0.0);
    w.f64(std::f64::consts::PI);
    w.f64(-std::f64::consts::E);
    w.f64(f64::INFINITY);
    w.f64(f64::NEG_INFINITY);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.try_f64(), Ok(0.0));
    assert_eq!(r.try_f64(), Ok(std::f64::consts::PI));
    assert_eq!(r.try_f64(), Ok(-std::f64::consts::E));
    assert_eq!(r.try_f64(), Ok(f64::INFINITY));
    assert_eq!(r.try_f64(), Ok(f64::NEG_INFINITY));
}

#[test]
fn roundtrip_f64_nan() {
    let mut w = Writer::new();
    w.f64(f64::NAN);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert!(r.try_f64().unwrap().is_nan());
}

#[test]
fn roundtrip_buf() {
    let mut w = Writer::new();
    w.buf(&[]);
    w.buf(&[0xde, 0xad, 0xbe, 0xef]);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.try_buf(0), Ok(&[][..]));
    assert_eq!(r.try_buf(4), Ok(&[0xde, 0xad, 0xbe, 0xef][..]));
}

#[test]
fn roundtrip_utf8() {
    let mut w = Writer::new();
    assert_eq!(w.utf8("hello"), 5);
    assert_eq!(w.utf8(""), 0);
    let accented = "cafe\u{0301}";
    let accented_len = w.utf8(accented);
    let emoji_len = w.utf8("\u{1F600}");
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.try_utf8(5), Ok("hello"));
    assert_eq!(r.try_utf8(0), Ok(""));
    assert_eq!(r.try_utf8(accented_len), Ok(accented));
    assert_eq!(r.try_utf8(emoji_len), Ok("\u{1F600}"));
}

// ---------------------------------------------------------------------------
// Combo write methods
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_u8u16() {
    let mut w = Writer::new();
    w.u8u16(0xab, 0x1234);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.try_u8(), Ok(0xab));
    assert_eq!(r.try_u16(), Ok(0x1234));
}

#[test]
fn roundtrip_u8u32() {
    let mut w = Writer::new();
    w.u8u32(0xcd, 0xdeadbeef);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.try_u8(), Ok(0xcd));
    assert_eq!(r.try_u32(), Ok(0xdeadbeef));
}

#[test]
fn roundtrip_u8u64() {
    let mut w = Writer::new();
    w.u8u64(0xef, 0x0102030405060708);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.try_u8(), Ok(0xef));
    assert_eq!(r.try_u64(), Ok(0x0102030405060708));
}

#[test]
fn roundtrip_u8f32() {
    let mut w = Writer::new();
    w.u8f32(0x01, 1.5f32);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.try_u8(), Ok(0x01));
    assert_eq!(r.try_f32(), Ok(1.5f32));
}

#[test]
fn roundtrip_u8f64() {
    let mut w = Writer::new();
    w.u8f64(0x02, std::f64::consts::PI);
    let data = w.flush();
    let mut r = Reader::new(&data);
    assert_eq!(r.try_u8(), Ok(0x02));
    assert_eq!(r.try_f64(), Ok(std::f64::consts::PI));
}

// ---------------------------------------------------------------------------
// Flush cycles and failed reads
// ---------------------------------------------------------------------------

#[test]
fn writer_flush_resets_window() {
    let mut w = Writer::new();
    w.u8(0x01);
    w.u8(0x02);
    assert_eq!(w.flush(), [0x01, 0x02]);

    w.u8(0x03);
    assert_eq!(w.flush(), [0x03]);
}

#[test]
fn failed_read_does_not_consume() {
    let mut r = Reader::new(&[0x01, 0x02]);
    assert_eq!(r.try_u64(), Err(BufferError::EndOfBuffer));
    assert_eq!(r.try_u16(), Ok(0x0102));
    assert_eq!(r.try_peek(), Err(BufferError::EndOfBuffer));
    assert_eq!(r.size(), 0);
}

// ---------------------------------------------------------------------------
// f16 decode edge cases
// ---------------------------------------------------------------------------

#[test]
fn f16_positive_zero() {
    assert_eq!(decode_f16(0x0000), 0.0);
    assert!(decode_f16(0x0000).is_sign_positive());
}

#[test]
fn f16_negative_zero() {
    let val = decode_f16(0x8000);
    assert_eq!(val, 0.0);
    assert!(val.is_sign_negative());
}

#[test]
fn f16_small_integers() {
    assert_eq!(decode_f16(0x3c00), 1.0);
    assert_eq!(decode_f16(0xbc00), -1.0);
    assert_eq!(decode_f16(0x4000), 2.0);
    assert_eq!(decode_f16(0x3800), 0.5);
}

#[test]
fn f16_infinities() {
    let pos = decode_f16(0x7c00);
    assert!(pos.is_infinite() && pos.is_sign_positive());
    let neg = decode_f16(0xfc00);
    assert!(neg.is_infinite() && neg.is_sign_negative());
}

#[test]
fn f16_nan() {
    assert!(decode_f16(0x7c01).is_nan());
    assert!(decode_f16(0xfc01).is_nan());
    // Different NaN payload
    assert!(decode_f16(0x7e00).is_nan());
}

#[test]
fn f16_subnormals() {
    // Smallest positive subnormal is 2^-24.
    assert_eq!(decode_f16(0x0001), (2.0f64).powi(-24));
    // Largest subnormal is just below 2^-14.
    let val = decode_f16(0x03ff);
    assert!(val > 0.0);
    assert!(val < (2.0f64).powi(-14));
}

#[test]
fn f16_max_finite() {
    assert_eq!(decode_f16(0x7bff), 65504.0);
}

// ---------------------------------------------------------------------------
// is_float32
// ---------------------------------------------------------------------------

#[test]
fn is_float32_exact_values() {
    assert!(is_float32(0.0));
    assert!(is_float32(1.0));
    assert!(is_float32(0.5));
    assert!(is_float32(0.25));
    assert!(is_float32(-1.0));
}

#[test]
fn is_float32_non_representable() {
    assert!(!is_float32(0.1));
    assert!(!is_float32(0.3));
}

// ---------------------------------------------------------------------------
// Mixed-type roundtrip: interleaved writes
// ---------------------------------------------------------------------------

#[test]
fn roundtrip_mixed_types() {
    let mut w = Writer::new();
    w.u8(0x42);
    w.u16(0xcafe);
    w.u32(0xdeadbeef);
    w.f64(std::f64::consts::PI);
    w.utf8("hello");
    w.u64(12345678);
    let data = w.flush();

    let mut r = Reader::new(&data);
    assert_eq!(r.try_u8(), Ok(0x42));
    assert_eq!(r.try_u16(), Ok(0xcafe));
    assert_eq!(r.try_u32(), Ok(0xdeadbeef));
    assert_eq!(r.try_f64(), Ok(std::f64::consts::PI));
    assert_eq!(r.try_utf8(5), Ok("hello"));
    assert_eq!(r.try_u64(), Ok(12345678));
    assert_eq!(r.size(), 0);
}
