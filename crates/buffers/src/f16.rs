//! Half-precision (16-bit) floating point reconstruction.

/// Decodes an IEEE 754 half-precision float from its raw 16-bit form.
///
/// Layout: sign bit 15, 5-bit exponent, 10-bit significand. Exponent 31
/// maps to infinity or NaN depending on the significand; exponent 0 is
/// subnormal with value `±significand * 2^-24`; everything else is a
/// normalized value `±(1024 | significand) * 2^(exponent - 25)`.
///
/// # Example
///
/// ```
/// use cbor_item_buffers::decode_f16;
///
/// assert_eq!(decode_f16(0x0000), 0.0);
/// assert_eq!(decode_f16(0x3C00), 1.0);
/// assert!(decode_f16(0x7C00).is_infinite());
/// assert!(decode_f16(0x7C01).is_nan());
/// ```
pub fn decode_f16(binary: u16) -> f64 {
    let sign = if binary >> 15 & 1 == 1 { -1.0 } else { 1.0 };
    let exponent = (binary >> 10 & 0x1f) as i32;
    let significand = (binary & 0x3ff) as f64;

    if exponent == 0x1f {
        if significand != 0.0 {
            f64::NAN
        } else {
            sign * f64::INFINITY
        }
    } else if exponent == 0 {
        sign * significand * 2f64.powi(-24)
    } else {
        sign * (1024.0 + significand) * 2f64.powi(exponent - 25)
    }
}
