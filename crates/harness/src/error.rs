//! Harness error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("SBFP error: {0}")]
    Sbfp(#[from] sbfp::SbfpError),

    #[error("Verification failed: {message}")]
    VerificationFailed { message: String },
}

pub type Result<T> = std::result::Result<T, HarnessError>;
