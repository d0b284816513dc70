//! This module defines errors returned by the library.
use thiserror::Error;

/// Errors returned by lagrange
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LagrangeError {
  /// returned if the point collection is empty or is not a sequence of values,
  /// a collection of (x, y) pairs, or a position to value mapping
  #[error("InvalidInputShape: {reason}")]
  InvalidInputShape {
    /// The reason the input was rejected
    reason: String,
  },
  /// returned if the modulus is not an integer strictly greater than one
  #[error("InvalidModulus: {reason}")]
  InvalidModulus {
    /// The reason the modulus was rejected
    reason: String,
  },
  /// returned if primality verification is enabled and the modulus is composite
  #[error("CompositeModulus")]
  CompositeModulus,
  /// returned by a checked inversion of an element congruent to zero
  #[error("NotInvertible")]
  NotInvertible,
}
