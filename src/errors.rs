//! This module defines errors returned by the library.
use core::fmt::Debug;
use thiserror::Error;

/// Errors returned by shamir-recover
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RecoverError {
  /// returned if a radix outside [2, 36] is supplied to the decoder
  #[error("InvalidRadix: {reason}")]
  InvalidRadix {
    /// The reason the radix was rejected
    reason: String,
  },
  /// returned if a digit string contains a character that is not a digit of its radix
  #[error("InvalidDigit: {reason}")]
  InvalidDigit {
    /// The reason the digit string was rejected
    reason: String,
  },
  /// returned when a modular inverse is requested for a value congruent to zero
  #[error("NoInverse")]
  NoInverse,
  /// returned if reconstruction receives the wrong number of points or duplicate x-coordinates
  #[error("DegenerateShareSet: {reason}")]
  DegenerateShareSet {
    /// The reason the share set cannot be interpolated
    reason: String,
  },
  /// returned when two k-subsets of the supplied shares reconstruct different secrets
  #[error("InconsistentShares: expected {expected}, found {found}")]
  InconsistentShares {
    /// Secret recovered from the first k shares, in decimal
    expected: String,
    /// Secret recovered from a disagreeing subset, in decimal
    found: String,
  },
  /// returned when an input document is malformed
  #[error("InvalidInput: {reason}")]
  InvalidInput {
    /// The reason the input was rejected
    reason: String,
  },
  /// returned when an input document cannot be read
  #[error("Io: {reason}")]
  Io {
    /// The underlying I/O error
    reason: String,
  },
}
