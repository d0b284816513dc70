// SPDX-License-Identifier: MIT
// This file is part of the lagrange project.

//! Lagrange interpolation at zero over a prime field.
//!
//! For points `(x_i, y_i)` the secret is recovered as
//!
//! ```text
//! P(0) = Σ_i y_i · L_i(0)   with   L_i(0) = Π_{j ≠ i} (0 - x_j) / (x_i - x_j)   (mod p)
//! ```
//!
//! With the conventional positions `x_i = 1..n` this is the reconstruction step
//! of Shamir's threshold scheme.

use crate::{
  errors::LagrangeError,
  modular::{Modulus, inv},
  points::{PointMap, Points},
  primality::is_probable_prime,
};
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, trace};

/// Interpolation with optional modulus checks.
///
/// The default configuration trusts the caller that the modulus is prime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Interpolator {
  verify_primality: bool,
}

impl Interpolator {
  /// An interpolator that does not verify primality.
  pub const fn new() -> Self {
    Interpolator {
      verify_primality: false,
    }
  }

  /// Enables or disables a Miller–Rabin check of the modulus on every call.
  ///
  /// When enabled, a composite modulus fails with
  /// [`LagrangeError::CompositeModulus`] instead of producing a wrong value.
  pub const fn verify_primality(mut self, enabled: bool) -> Self {
    self.verify_primality = enabled;
    self
  }

  /// Returns `P(0) mod p` for the polynomial through `points`.
  ///
  /// # Errors
  /// Returns [`LagrangeError::InvalidInputShape`] if `points` is empty, and
  /// [`LagrangeError::CompositeModulus`] if primality verification is enabled
  /// and fails.
  pub fn interpolate(
    &self,
    points: impl Into<Points>,
    prime: &Modulus,
  ) -> Result<BigUint, LagrangeError> {
    let points = points.into().normalize()?;
    self.interpolate_map(&points, prime)
  }

  /// Same as [`Interpolator::interpolate`], for dynamically typed input.
  ///
  /// # Errors
  /// Returns [`LagrangeError::InvalidInputShape`] if `points` is not one of the
  /// shapes accepted by [`Points::from_json`] or is empty, and
  /// [`LagrangeError::InvalidModulus`] if `prime` is not an integer above 1.
  pub fn interpolate_json(
    &self,
    points: &Value,
    prime: &Value,
  ) -> Result<BigUint, LagrangeError> {
    let points = Points::from_json(points)?.normalize()?;
    let prime = Modulus::from_json(prime)?;
    self.interpolate_map(&points, &prime)
  }

  /// Interpolates an already normalized point set.
  ///
  /// # Errors
  /// Returns [`LagrangeError::CompositeModulus`] if primality verification is
  /// enabled and fails.
  pub fn interpolate_map(
    &self,
    points: &PointMap,
    prime: &Modulus,
  ) -> Result<BigUint, LagrangeError> {
    if self.verify_primality && !is_probable_prime(prime.value()) {
      return Err(LagrangeError::CompositeModulus);
    }

    let start = Instant::now();
    let coefficients = lagrange_coefficients_at_zero(points, prime);

    let p = prime.value();
    let mut value = BigUint::zero();
    for ((_, y), (_, coefficient)) in points.iter().zip(coefficients.iter()) {
      value = (value + prime.reduce(y) * coefficient) % p;
    }

    debug!(
      num_points = points.len(),
      modulus_bits = prime.bits(),
      elapsed_us = %start.elapsed().as_micros(),
      "interpolate"
    );
    Ok(value)
  }
}

/// Lagrange basis coefficients `L_i(0)` for every position `i` of `points`,
/// each in `[0, p-1]`, in ascending position order.
///
/// Two positions congruent modulo `p` make a denominator vanish; its inverse
/// is then taken as 0 and the affected coefficients collapse to 0.
pub fn lagrange_coefficients_at_zero(
  points: &PointMap,
  prime: &Modulus,
) -> Vec<(BigInt, BigUint)> {
  let p = prime.value();
  points
    .positions()
    .map(|i| {
      let mut coefficient = BigUint::one();
      for j in points.positions().filter(|&j| j != i) {
        let numerator = prime.reduce(&-j);
        let denominator = inv(&(i - j), prime);
        coefficient = (coefficient * numerator * denominator) % p;
      }
      trace!(position = %i, coefficient = %coefficient, "lagrange coefficient");
      (i.clone(), coefficient)
    })
    .collect()
}

/// Returns `P(0) mod prime`, where `P` is the polynomial of degree below
/// `n` through the `n` supplied points.
///
/// `points` may be a sequence of values (taken at positions 1..=n), a
/// collection of `(x, y)` pairs, or a position to value map; see [`Points`].
/// Positions need not be 1..=n: any distinct positions are used as the
/// x-coordinates of the interpolated polynomial.
/// `prime` is assumed prime and larger than every position; neither is
/// checked, and violating either yields a wrong value rather than an error.
///
/// # Errors
/// Returns [`LagrangeError::InvalidInputShape`] if `points` is empty and
/// [`LagrangeError::InvalidModulus`] if `prime <= 1`.
///
/// # Examples
/// ```
/// use lagrange::interpolate;
/// use num_bigint::BigUint;
///
/// assert_eq!(interpolate(vec![15, 9, 3], 17).unwrap(), BigUint::from(4u32));
/// assert_eq!(interpolate(vec![(1, 15), (2, 9), (3, 3)], 17).unwrap(), BigUint::from(4u32));
/// ```
pub fn interpolate(
  points: impl Into<Points>,
  prime: impl Into<BigInt>,
) -> Result<BigUint, LagrangeError> {
  let points = points.into().normalize()?;
  let prime = Modulus::new(prime)?;
  Interpolator::new().interpolate_map(&points, &prime)
}

/// Synonym for [`interpolate`].
pub fn lagrange(
  points: impl Into<Points>,
  prime: impl Into<BigInt>,
) -> Result<BigUint, LagrangeError> {
  interpolate(points, prime)
}
