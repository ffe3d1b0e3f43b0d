//! Lossless `f32` round-trip predicate.

/// Returns `true` if `val` can be represented as an `f32` without loss.
///
/// # Example
///
/// ```
/// use cbor_item_buffers::is_float32;
///
/// assert!(is_float32(1.5));
/// assert!(!is_float32(1.1));
/// ```
pub fn is_float32(val: f64) -> bool {
    (val as f32) as f64 == val
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_values_round_trip() {
        assert!(is_float32(0.0));
        assert!(is_float32(-2.5));
        assert!(is_float32(65504.0));
        assert!(is_float32(f64::INFINITY));
        assert!(is_float32(f64::NEG_INFINITY));
    }

    #[test]
    fn inexact_values_do_not() {
        assert!(!is_float32(0.1));
        assert!(!is_float32(1.0 + 2f64.powi(-40)));
        // NaN != NaN, so NaN never reports as an exact f32.
        assert!(!is_float32(f64::NAN));
    }
}
