//! The packed SBFP scalar

use std::ops::{Add, Mul};

use crate::layout::{Fields, EXPONENT_MAX, FRACTION_BITS, FRACTION_MASK, SIGN_MASK};

/// Special-value classification of an encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    PositiveInfinity,
    NegativeInfinity,
    NaN,
    Finite,
}

/// A 16-bit floating point value: 1 sign bit, 5 exponent bits (bias 15),
/// 10 fraction bits.
///
/// Equality and hashing compare bit patterns, so two NaN encodings with
/// different fractions are distinct values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Sbfp(u16);

impl Sbfp {
    /// Positive zero
    pub const ZERO: Sbfp = Sbfp(0x0000);

    /// 1.0
    pub const ONE: Sbfp = Sbfp(0x3C00);

    /// Largest finite value, 65504
    pub const MAX: Sbfp = Sbfp(0x7BFF);

    /// Smallest positive normalized value, 2^-14
    pub const MIN_POSITIVE: Sbfp = Sbfp(0x0400);

    /// Smallest positive denormalized value, 2^-24
    pub const MIN_POSITIVE_SUBNORMAL: Sbfp = Sbfp(0x0001);

    pub const POS_INFINITY: Sbfp = Sbfp(0x7C00);
    pub const NEG_INFINITY: Sbfp = Sbfp(0xFC00);

    /// Canonical NaN produced by every operator that synthesizes one
    pub const NAN: Sbfp = Sbfp(0x7C01);

    /// Canonical NaN with the sign bit set
    pub const NEG_NAN: Sbfp = Sbfp(0xFC01);

    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    /// Signed infinity, negative when `negative` is set
    #[inline]
    pub const fn infinity(negative: bool) -> Self {
        if negative {
            Self::NEG_INFINITY
        } else {
            Self::POS_INFINITY
        }
    }

    /// Canonical NaN, with the sign bit set when `negative` is set
    #[inline]
    pub const fn nan(negative: bool) -> Self {
        if negative {
            Self::NEG_NAN
        } else {
            Self::NAN
        }
    }

    /// Encode a host value, see [`crate::encode`]
    pub fn from_f64(value: f64) -> Self {
        crate::encode::encode(value)
    }

    /// Decode to a host value, see [`crate::decode`]
    pub fn to_f64(self) -> f64 {
        crate::decode::decode(self)
    }

    #[inline]
    pub fn fields(self) -> Fields {
        Fields::unpack(self.0)
    }

    pub fn class(self) -> Class {
        let fields = self.fields();
        match (fields.exponent == EXPONENT_MAX, fields.fraction == 0, fields.sign == 1) {
            (false, _, _) => Class::Finite,
            (true, false, _) => Class::NaN,
            (true, true, false) => Class::PositiveInfinity,
            (true, true, true) => Class::NegativeInfinity,
        }
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.class() == Class::NaN
    }

    #[inline]
    pub fn is_infinite(self) -> bool {
        matches!(self.class(), Class::PositiveInfinity | Class::NegativeInfinity)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.class() == Class::Finite
    }

    /// True for both signed zeros
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 & !SIGN_MASK == 0
    }

    /// True for denormalized nonzero values
    #[inline]
    pub const fn is_subnormal(self) -> bool {
        (self.0 >> FRACTION_BITS) & EXPONENT_MAX == 0 && self.0 & FRACTION_MASK != 0
    }

    /// Sign bit, including for zeros, infinities and NaNs
    #[inline]
    pub const fn is_sign_negative(self) -> bool {
        self.0 & SIGN_MASK != 0
    }
}

impl From<u16> for Sbfp {
    fn from(bits: u16) -> Self {
        Self::from_bits(bits)
    }
}

impl From<Sbfp> for u16 {
    fn from(value: Sbfp) -> Self {
        value.to_bits()
    }
}

impl From<Sbfp> for f64 {
    fn from(value: Sbfp) -> Self {
        value.to_f64()
    }
}

impl Add for Sbfp {
    type Output = Sbfp;

    fn add(self, rhs: Sbfp) -> Sbfp {
        crate::arith::add(self, rhs)
    }
}

impl Mul for Sbfp {
    type Output = Sbfp;

    fn mul(self, rhs: Sbfp) -> Sbfp {
        crate::arith::multiply(self, rhs)
    }
}
