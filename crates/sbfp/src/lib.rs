//! SBFP: 16-bit Standard Binary Floating Point
//!
//! An IEEE 754 style encoding at half width: 1 sign bit, 5 exponent bits
//! biased by 15, 10 fraction bits. Conversion from `f64` truncates toward
//! zero; addition and multiplication operate on packed values and follow
//! real-arithmetic conventions for infinities and NaN.
//!
//! ```
//! use sbfp::{add, decode, encode, multiply};
//!
//! let one = encode(1.0);
//! assert_eq!(one.to_bits(), 0x3C00);
//! assert_eq!(decode(add(one, one)), 2.0);
//! assert_eq!(decode(multiply(encode(2.0), encode(3.0))), 6.0);
//! ```

mod arith;
mod config;
mod decode;
mod encode;
mod error;
pub mod layout;
mod value;
mod vector;

pub use arith::{add, multiply};
pub use config::{EncodeConfig, NonFinitePolicy, NON_FINITE_ENV};
pub use decode::decode;
pub use encode::{encode, extract_fraction, Encoder};
pub use error::{Result, SbfpError};
pub use value::{Class, Sbfp};
pub use vector::SbfpVector;
