//! Decode/encode sweep over every bit pattern

use sbfp::{decode, encode, Sbfp};

const NEGATIVE_ZERO: u16 = 0x8000;

/// A pattern whose decode/encode round trip produced the wrong encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMismatch {
    pub bits: u16,
    pub reencoded: u16,
}

/// Outcome of [`sweep_patterns`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Patterns that re-encoded to themselves
    pub exact: u32,
    /// NaN patterns that re-encoded to the canonical NaN of the same sign
    pub canonical_nans: u32,
    /// Negative zero, which re-encodes as positive zero
    pub normalized_zeros: u32,
    pub mismatches: Vec<PatternMismatch>,
}

impl SweepReport {
    pub fn total(&self) -> u32 {
        self.exact + self.canonical_nans + self.normalized_zeros + self.mismatches.len() as u32
    }
}

/// Decode and re-encode all 65536 patterns.
///
/// Finite patterns must come back unchanged except negative zero, which
/// encodes as positive zero. NaN patterns must come back as the canonical
/// NaN with their own sign bit, [`Sbfp::NAN`] or [`Sbfp::NEG_NAN`].
pub fn sweep_patterns() -> SweepReport {
    let mut report = SweepReport::default();

    for bits in 0..=u16::MAX {
        let value = Sbfp::from_bits(bits);
        let reencoded = encode(decode(value));

        let expected = if value.is_nan() {
            Sbfp::nan(value.is_sign_negative())
        } else if bits == NEGATIVE_ZERO {
            Sbfp::ZERO
        } else {
            value
        };

        if reencoded != expected {
            report.mismatches.push(PatternMismatch {
                bits,
                reencoded: reencoded.to_bits(),
            });
        } else if value.is_nan() && value != expected {
            report.canonical_nans += 1;
        } else if bits == NEGATIVE_ZERO {
            report.normalized_zeros += 1;
        } else {
            report.exact += 1;
        }
    }

    tracing::debug!(
        exact = report.exact,
        canonical_nans = report.canonical_nans,
        mismatches = report.mismatches.len(),
        "pattern sweep finished"
    );

    report
}
