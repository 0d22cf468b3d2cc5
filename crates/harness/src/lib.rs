//! SBFP verification harness
//!
//! Exhaustive checks over every 16-bit pattern and over the special-value
//! operator tables, used by the `verify_sbfp` binary and the integration
//! tests.

use sbfp::{Encoder, SbfpVector};

mod error;
mod sweep;
mod tables;

pub use error::{HarnessError, Result};
pub use sweep::{sweep_patterns, PatternMismatch, SweepReport};
pub use tables::{check_special_tables, expected_add, expected_multiply, Op, TableMismatch, REPRESENTATIVES};

/// Run both checks, failing if anything mismatched
pub fn verify() -> Result<SweepReport> {
    let report = sweep_patterns();
    if !report.mismatches.is_empty() {
        return Err(HarnessError::VerificationFailed {
            message: format!(
                "{} patterns failed to survive decode/encode, first: {:?}",
                report.mismatches.len(),
                report.mismatches[0]
            ),
        });
    }

    let table_mismatches = check_special_tables();
    if let Some(first) = table_mismatches.first() {
        return Err(HarnessError::VerificationFailed {
            message: format!(
                "{} operator table entries differ, first: {:?}",
                table_mismatches.len(),
                first
            ),
        });
    }

    Ok(report)
}

/// Encode `values` with `encoder` and pair each with its decoded value
pub fn sample_round_trip(values: &[f64], encoder: &Encoder) -> Result<Vec<(f64, f64)>> {
    let encoded = SbfpVector::try_from_f64_slice(values, encoder)?;
    Ok(values.iter().copied().zip(encoded.to_f64_vec()).collect())
}
