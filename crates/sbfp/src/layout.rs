//! Bit layout of the 16-bit encoding
//!
//! ```text
//!  15 | 14 ........ 10 | 9 ................ 0
//! sign|    exponent    |      fraction
//! ```

/// Width of the sign field
pub const SIGN_BITS: u32 = 1;

/// Width of the exponent field
pub const EXPONENT_BITS: u32 = 5;

/// Width of the fraction field
pub const FRACTION_BITS: u32 = 10;

/// Exponent bias, 2^(EXPONENT_BITS - 1) - 1 = 15
pub const BIAS: i32 = (1 << (EXPONENT_BITS - 1)) - 1;

/// All-ones exponent, reserved for infinity and NaN
pub const EXPONENT_MAX: u16 = (1 << EXPONENT_BITS) - 1;

pub const FRACTION_MASK: u16 = (1 << FRACTION_BITS) - 1;
pub const EXPONENT_MASK: u16 = EXPONENT_MAX << FRACTION_BITS;
pub const SIGN_MASK: u16 = 1 << (EXPONENT_BITS + FRACTION_BITS);

/// Magnitudes whose integer part reaches 2^(bias + 1) saturate to infinity
pub const OVERFLOW_THRESHOLD: f64 = (1u64 << (BIAS + 1)) as f64;

/// Smallest normalized magnitude, 2^(1 - bias)
pub const MIN_NORMAL: f64 = 1.0 / DENORMAL_SCALE;

/// Multiplier that maps a denormal magnitude onto fraction / 2^10
pub const DENORMAL_SCALE: f64 = (1u64 << (BIAS - 1)) as f64;

const FRACTION_SCALE: f64 = (1u32 << FRACTION_BITS) as f64;

/// The three raw bit-fields of an encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fields {
    /// 0 or 1
    pub sign: u16,
    /// Biased exponent, 0..=31
    pub exponent: u16,
    /// Stored mantissa bits, 0..=1023
    pub fraction: u16,
}

impl Fields {
    /// Split a bit pattern into its fields
    pub fn unpack(bits: u16) -> Self {
        Self {
            sign: (bits >> (EXPONENT_BITS + FRACTION_BITS)) & ((1 << SIGN_BITS) - 1),
            exponent: (bits >> FRACTION_BITS) & EXPONENT_MAX,
            fraction: bits & FRACTION_MASK,
        }
    }

    /// Concatenate the fields, sign highest
    pub fn pack(self) -> u16 {
        debug_assert!(self.sign <= 1, "sign out of range: {}", self.sign);
        debug_assert!(self.exponent <= EXPONENT_MAX, "exponent out of range: {}", self.exponent);
        debug_assert!(self.fraction <= FRACTION_MASK, "fraction out of range: {}", self.fraction);

        let mut bits = self.sign;
        bits = (bits << EXPONENT_BITS) | self.exponent;
        bits = (bits << FRACTION_BITS) | self.fraction;
        bits
    }

    /// Decompose into unbiased exponent and mantissa.
    ///
    /// Only meaningful for finite encodings; the caller classifies first.
    pub fn parts(self) -> Parts {
        let fraction = self.fraction as f64 / FRACTION_SCALE;
        let (exponent, mantissa) = if self.exponent == 0 {
            (1 - BIAS, fraction)
        } else {
            (self.exponent as i32 - BIAS, 1.0 + fraction)
        };

        Parts {
            negative: self.sign == 1,
            exponent,
            mantissa,
        }
    }
}

/// A finite value as `(-1)^negative * mantissa * 2^exponent`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parts {
    pub negative: bool,
    pub exponent: i32,
    pub mantissa: f64,
}

impl Parts {
    /// Mantissa with the sign applied
    pub fn signed_mantissa(&self) -> f64 {
        if self.negative {
            -self.mantissa
        } else {
            self.mantissa
        }
    }

    /// Rebuild the host value
    pub fn to_f64(&self) -> f64 {
        scale(self.signed_mantissa(), self.exponent)
    }
}

/// `mantissa * 2^exponent`, dividing for negative exponents
pub(crate) fn scale(mantissa: f64, exponent: i32) -> f64 {
    let factor = 2f64.powi(exponent.saturating_abs());
    if exponent < 0 {
        mantissa / factor
    } else {
        mantissa * factor
    }
}
