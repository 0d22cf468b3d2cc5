//! SBFP error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SbfpError {
    #[error("Non-finite input rejected by encoder: {value}")]
    NonFinite { value: f64 },

    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Invalid byte length: {0} (must be a multiple of 2)")]
    InvalidByteLength(usize),

    #[error("Invalid non-finite policy: {0:?} (expected \"propagate\" or \"reject\")")]
    InvalidPolicy(String),
}

pub type Result<T> = std::result::Result<T, SbfpError>;
