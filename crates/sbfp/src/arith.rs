//! Addition and multiplication on packed values
//!
//! Finite operands are decomposed, combined in `f64` and re-encoded, so each
//! result is truncated once by the encoder on top of any `f64` rounding.

use crate::encode::encode;
use crate::layout::{scale, Parts};
use crate::value::{Class, Sbfp};

/// Product of two values
pub fn multiply(a: Sbfp, b: Sbfp) -> Sbfp {
    if let Some(product) = special_product(a, b) {
        return product;
    }

    let (x, y) = (a.fields().parts(), b.fields().parts());
    let product = Parts {
        negative: x.negative != y.negative,
        exponent: x.exponent + y.exponent,
        mantissa: x.mantissa * y.mantissa,
    };

    encode(product.to_f64())
}

/// Sum of two values
pub fn add(a: Sbfp, b: Sbfp) -> Sbfp {
    if let Some(sum) = special_sum(a, b) {
        return sum;
    }

    let (x, y) = (a.fields().parts(), b.fields().parts());

    // Bring the larger-exponent mantissa down to the smaller exponent's scale
    let exponent = x.exponent.min(y.exponent);
    let mantissa = scale(x.signed_mantissa(), x.exponent - exponent)
        + scale(y.signed_mantissa(), y.exponent - exponent);

    encode(scale(mantissa, exponent))
}

/// Result for products involving an infinity or NaN, `None` when both are finite.
///
/// Infinity times zero is NaN.
fn special_product(a: Sbfp, b: Sbfp) -> Option<Sbfp> {
    use Class::*;

    match (a.class(), b.class()) {
        (Finite, Finite) => None,
        (NaN, _) | (_, NaN) => Some(Sbfp::NAN),
        (Finite, PositiveInfinity | NegativeInfinity) if a.is_zero() => Some(Sbfp::NAN),
        (PositiveInfinity | NegativeInfinity, Finite) if b.is_zero() => Some(Sbfp::NAN),
        (
            PositiveInfinity | NegativeInfinity | Finite,
            PositiveInfinity | NegativeInfinity | Finite,
        ) => Some(Sbfp::infinity(a.is_sign_negative() != b.is_sign_negative())),
    }
}

/// Result for sums involving an infinity or NaN, `None` when both are finite
fn special_sum(a: Sbfp, b: Sbfp) -> Option<Sbfp> {
    use Class::*;

    match (a.class(), b.class()) {
        (Finite, Finite) => None,
        (NaN, _) | (_, NaN) => Some(Sbfp::NAN),
        (PositiveInfinity, NegativeInfinity) | (NegativeInfinity, PositiveInfinity) => {
            Some(Sbfp::NAN)
        }
        (PositiveInfinity, PositiveInfinity | Finite) | (Finite, PositiveInfinity) => {
            Some(Sbfp::POS_INFINITY)
        }
        (NegativeInfinity, NegativeInfinity | Finite) | (Finite, NegativeInfinity) => {
            Some(Sbfp::NEG_INFINITY)
        }
    }
}
