//! This library reconstructs secrets of a (k, n) threshold secret-sharing scheme.
//!
//! Shares are points on a polynomial of degree k-1 over the prime field GF(P) with
//! P = 2^256 - 2^32 - 977. Share values arrive as digit strings in radix 2..=36; they
//! are decoded with [`decode::decode`] and the constant term is recovered by Lagrange
//! interpolation at zero with [`reconstruct::reconstruct`].
//!
//! The core (`field`, `decode`, `reconstruct`) is pure and does not log. The [`input`]
//! module reads JSON share documents for the `shamir-recover` binary.
#![deny(
  warnings,
  unused,
  future_incompatible,
  nonstandard_style,
  rust_2018_idioms,
  missing_docs
)]
#![forbid(unsafe_code)]

// public modules
pub mod decode;
pub mod errors;
pub mod field;
pub mod input;
pub mod reconstruct;
pub mod share;

pub use errors::RecoverError;
pub use field::FieldElement;
pub use input::TestCase;
pub use reconstruct::{Reconstructor, reconstruct};
pub use share::{Point, Share};
