//! SBFP to host `f64` conversion

use crate::value::{Class, Sbfp};

/// Decode to a host value.
///
/// Total and exact: every finite encoding is representable as an `f64`.
/// NaN patterns decode to a host NaN carrying the pattern's sign bit.
pub fn decode(value: Sbfp) -> f64 {
    match value.class() {
        Class::PositiveInfinity => f64::INFINITY,
        Class::NegativeInfinity => f64::NEG_INFINITY,
        Class::NaN if value.is_sign_negative() => -f64::NAN,
        Class::NaN => f64::NAN,
        Class::Finite => value.fields().parts().to_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_specials() {
        assert_eq!(decode(Sbfp::from_bits(0x7C00)), f64::INFINITY);
        assert_eq!(decode(Sbfp::from_bits(0xFC00)), f64::NEG_INFINITY);
        assert!(decode(Sbfp::NAN).is_nan());
        assert!(decode(Sbfp::from_bits(0xFFFF)).is_nan());
    }

    #[test]
    fn test_decode_nan_keeps_sign() {
        assert!(decode(Sbfp::NEG_NAN).is_sign_negative());
        assert!(decode(Sbfp::from_bits(0xFE00)).is_sign_negative());
        assert!(decode(Sbfp::NAN).is_sign_positive());
        assert!(decode(Sbfp::from_bits(0x7FFF)).is_sign_positive());
    }

    #[test]
    fn test_decode_normal() {
        assert_eq!(decode(Sbfp::ONE), 1.0);
        assert_eq!(decode(Sbfp::from_bits(0xC000)), -2.0);
        assert_eq!(decode(Sbfp::from_bits(0x3555)), 0.333251953125);
        assert_eq!(decode(Sbfp::MAX), 65504.0);
        assert_eq!(decode(Sbfp::MIN_POSITIVE), 2f64.powi(-14));
    }

    #[test]
    fn test_decode_denormal_and_zero() {
        assert_eq!(decode(Sbfp::ZERO), 0.0);
        let negative_zero = decode(Sbfp::from_bits(0x8000));
        assert_eq!(negative_zero, 0.0);
        assert!(negative_zero.is_sign_negative());
        assert_eq!(decode(Sbfp::MIN_POSITIVE_SUBNORMAL), 2f64.powi(-24));
        assert_eq!(decode(Sbfp::from_bits(0x03FF)), 1023.0 * 2f64.powi(-24));
    }
}
