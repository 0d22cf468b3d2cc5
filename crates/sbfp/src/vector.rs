//! Batches of packed values

use crate::arith::{add, multiply};
use crate::encode::{encode, Encoder};
use crate::error::{Result, SbfpError};
use crate::value::Sbfp;

/// A vector of SBFP values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SbfpVector {
    pub data: Vec<Sbfp>,
}

impl SbfpVector {
    /// Create a new vector from packed values
    pub fn from_raw(data: Vec<Sbfp>) -> Self {
        Self { data }
    }

    /// Create a vector from floating-point values, saturating and
    /// propagating non-finite values
    pub fn from_f64_slice(values: &[f64]) -> Self {
        Self {
            data: values.iter().map(|&v| encode(v)).collect(),
        }
    }

    /// Create a vector from floating-point values using an explicit encoder
    pub fn try_from_f64_slice(values: &[f64], encoder: &Encoder) -> Result<Self> {
        let data = values
            .iter()
            .map(|&v| encoder.encode(v))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { data })
    }

    /// Convert to floating-point vector
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.data.iter().map(|v| v.to_f64()).collect()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Sbfp> {
        self.data.get(index).copied()
    }

    /// Create a zero vector of given length
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![Sbfp::ZERO; len],
        }
    }

    /// Element-wise addition
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_len(other)?;
        Ok(self.zip_with(other, add))
    }

    /// Element-wise multiplication
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.check_len(other)?;
        Ok(self.zip_with(other, multiply))
    }

    /// Dot product, accumulated left to right.
    ///
    /// Every partial product and partial sum is truncated to SBFP.
    pub fn dot(&self, other: &Self) -> Result<Sbfp> {
        self.check_len(other)?;

        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .fold(Sbfp::ZERO, |acc, (&a, &b)| add(acc, multiply(a, b))))
    }

    /// Multiply each element by a scalar
    pub fn scale_by(&self, scalar: Sbfp) -> Self {
        Self {
            data: self.data.iter().map(|&x| multiply(x, scalar)).collect(),
        }
    }

    /// Encode to bytes (little-endian u16 bit patterns)
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 2);
        for val in &self.data {
            bytes.extend_from_slice(&val.to_bits().to_le_bytes());
        }
        bytes
    }

    /// Decode from bytes (little-endian u16 bit patterns)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % 2 != 0 {
            return Err(SbfpError::InvalidByteLength(bytes.len()));
        }

        let data = bytes
            .chunks_exact(2)
            .map(|chunk| Sbfp::from_bits(u16::from_le_bytes([chunk[0], chunk[1]])))
            .collect();

        Ok(Self { data })
    }

    fn check_len(&self, other: &Self) -> Result<()> {
        if self.len() != other.len() {
            tracing::debug!(
                expected = self.len(),
                got = other.len(),
                "SBFP vector length mismatch"
            );
            return Err(SbfpError::DimensionMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        Ok(())
    }

    fn zip_with(&self, other: &Self, op: fn(Sbfp, Sbfp) -> Sbfp) -> Self {
        Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| op(a, b))
                .collect(),
        }
    }
}

impl From<Vec<Sbfp>> for SbfpVector {
    fn from(data: Vec<Sbfp>) -> Self {
        Self::from_raw(data)
    }
}

impl FromIterator<Sbfp> for SbfpVector {
    fn from_iter<I: IntoIterator<Item = Sbfp>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}
