//! Host `f64` to SBFP conversion
//!
//! Conversion truncates toward zero: fraction bits beyond the tenth are
//! discarded, never rounded.

use crate::config::{EncodeConfig, NonFinitePolicy};
use crate::error::{Result, SbfpError};
use crate::layout::{Fields, FRACTION_BITS, BIAS, DENORMAL_SCALE, MIN_NORMAL, OVERFLOW_THRESHOLD};
use crate::value::Sbfp;

const F64_FRACTION_BITS: u32 = 52;
const F64_EXPONENT_MASK: u64 = 0x7FF;
const F64_FRACTION_MASK: u64 = (1 << F64_FRACTION_BITS) - 1;
const F64_BIAS: i32 = 1023;

/// Extract the first ten fractional bits of `value`, most significant first.
///
/// The integer part is dropped and each bit is produced by doubling the
/// remainder and taking its integer part.
pub fn extract_fraction(value: f64) -> u16 {
    let mut remainder = value.fract();
    let mut fraction = 0u16;

    for _ in 0..FRACTION_BITS {
        fraction <<= 1;

        let doubled = remainder * 2.0;
        if doubled >= 1.0 {
            fraction |= 1;
            remainder = doubled - 1.0;
        } else {
            remainder = doubled;
        }
    }

    fraction
}

/// Encode a host value.
///
/// Total over every `f64`: magnitudes at or above 65536 saturate to a
/// signed infinity, host infinities map to the matching infinity, and host
/// NaN maps to the canonical NaN with the host sign bit. Negative zero
/// encodes as positive zero.
pub fn encode(value: f64) -> Sbfp {
    if value.is_finite() {
        encode_finite(value)
    } else {
        encode_non_finite(value)
    }
}

/// Encoder with an explicit non-finite input policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Encoder {
    config: EncodeConfig,
}

impl Encoder {
    pub fn new(config: EncodeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncodeConfig {
        &self.config
    }

    /// Encode a host value, applying the configured policy to ±∞ and NaN
    pub fn encode(&self, value: f64) -> Result<Sbfp> {
        if value.is_finite() {
            return Ok(encode_finite(value));
        }

        match self.config.non_finite {
            NonFinitePolicy::Propagate => Ok(encode_non_finite(value)),
            NonFinitePolicy::Reject => Err(SbfpError::NonFinite { value }),
        }
    }
}

fn encode_non_finite(value: f64) -> Sbfp {
    tracing::trace!(value, "encoding non-finite host value");

    if value.is_nan() {
        Sbfp::nan(value.is_sign_negative())
    } else {
        Sbfp::infinity(value.is_sign_negative())
    }
}

fn encode_finite(value: f64) -> Sbfp {
    let (sign, magnitude) = if value < 0.0 { (1, -value) } else { (0, value) };

    if magnitude.trunc() >= OVERFLOW_THRESHOLD {
        tracing::trace!(value, "saturating to infinity");
        return Sbfp::infinity(sign == 1);
    }

    let fields = if magnitude < MIN_NORMAL {
        Fields {
            sign,
            exponent: 0,
            fraction: extract_fraction(magnitude * DENORMAL_SCALE),
        }
    } else {
        let (exponent, significand) = split_exponent(magnitude);
        Fields {
            sign,
            exponent: (exponent + BIAS) as u16,
            fraction: extract_fraction(significand),
        }
    };

    Sbfp::from_bits(fields.pack())
}

/// Split a positive normal `f64` into its binary exponent and a
/// significand in `[1, 2)`.
fn split_exponent(magnitude: f64) -> (i32, f64) {
    let bits = magnitude.to_bits();
    let exponent = ((bits >> F64_FRACTION_BITS) & F64_EXPONENT_MASK) as i32 - F64_BIAS;
    let significand = f64::from_bits((bits & F64_FRACTION_MASK) | ((F64_BIAS as u64) << F64_FRACTION_BITS));
    (exponent, significand)
}
