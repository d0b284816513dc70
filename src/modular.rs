// SPDX-License-Identifier: MIT
// This file is part of the lagrange project.

//! Arithmetic modulo a prime.
//!
//! This module defines:
//! - [`Modulus`]: a validated modulus `p > 1`, assumed prime by the caller
//! - [`inv`]: the multiplicative inverse via Fermat's little theorem
//! - [`checked_inv`]: the same inverse, rejecting elements congruent to zero
//!
//! All values are arbitrary-precision, so no intermediate product can overflow.

use crate::errors::LagrangeError;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A modulus `p > 1`.
///
/// Primality is a caller obligation and is not checked here; see
/// [`crate::Interpolator::verify_primality`] for the optional check.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BigInt", into = "BigInt")]
pub struct Modulus(BigUint);

impl Modulus {
  /// Validates `p` and wraps it.
  ///
  /// # Errors
  /// Returns [`LagrangeError::InvalidModulus`] if `p <= 1`.
  pub fn new(p: impl Into<BigInt>) -> Result<Self, LagrangeError> {
    let p = p.into();
    if p <= BigInt::one() {
      return Err(LagrangeError::InvalidModulus {
        reason: format!("expected a modulus greater than 1, got {p}"),
      });
    }
    let (_, magnitude) = p.into_parts();
    Ok(Modulus(magnitude))
  }

  /// Reads a modulus from a dynamically typed JSON value.
  ///
  /// Only integral JSON numbers are accepted, of any magnitude; floats,
  /// strings and containers are rejected with [`LagrangeError::InvalidModulus`].
  pub fn from_json(value: &Value) -> Result<Self, LagrangeError> {
    match json_integer(value) {
      Some(p) => Modulus::new(p),
      None => Err(LagrangeError::InvalidModulus {
        reason: format!("expected an integer modulus, got {value}"),
      }),
    }
  }

  /// The modulus as an unsigned integer.
  pub fn value(&self) -> &BigUint {
    &self.0
  }

  /// Number of bits in the modulus.
  pub fn bits(&self) -> u64 {
    self.0.bits()
  }

  /// Canonical representative of `a` in `[0, p-1]`.
  ///
  /// Negative inputs wrap around, so `reduce(-1) == p - 1`.
  pub fn reduce(&self, a: &BigInt) -> BigUint {
    let p = BigInt::from(self.0.clone());
    // mod_floor takes the sign of the divisor, which is positive
    let (_, r) = a.mod_floor(&p).into_parts();
    r
  }
}

/// Reads an integral JSON number without losing precision.
///
/// serde_json keeps the literal digits (`arbitrary_precision`), so numbers
/// beyond 64 bits parse exactly while `17.5` and `1e3` are rejected.
pub(crate) fn json_integer(value: &Value) -> Option<BigInt> {
  match value {
    Value::Number(n) => n.to_string().parse::<BigInt>().ok(),
    _ => None,
  }
}

impl TryFrom<BigInt> for Modulus {
  type Error = LagrangeError;

  fn try_from(p: BigInt) -> Result<Self, Self::Error> {
    Modulus::new(p)
  }
}

impl From<Modulus> for BigInt {
  fn from(p: Modulus) -> Self {
    BigInt::from(p.0)
  }
}

impl fmt::Display for Modulus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Multiplicative inverse of `a` modulo the prime `p`, computed as `a^(p-2) mod p`.
///
/// If `a ≡ 0 (mod p)` no inverse exists and the result is 0. Interpolation
/// relies on this degenerate value rather than failing; use [`checked_inv`]
/// when an error is preferred.
pub fn inv(a: &BigInt, p: &Modulus) -> BigUint {
  let a = p.reduce(a);
  if a.is_zero() {
    return a;
  }
  let exponent = p.value() - 2u32;
  a.modpow(&exponent, p.value())
}

/// Multiplicative inverse of `a` modulo the prime `p`.
///
/// # Errors
/// Returns [`LagrangeError::NotInvertible`] if `a ≡ 0 (mod p)`.
pub fn checked_inv(a: &BigInt, p: &Modulus) -> Result<BigUint, LagrangeError> {
  let r = inv(a, p);
  if r.is_zero() {
    return Err(LagrangeError::NotInvertible);
  }
  Ok(r)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn modulus(p: u64) -> Modulus {
    Modulus::new(p).unwrap()
  }

  #[test]
  fn test_modulus_validation() {
    assert!(Modulus::new(2).is_ok());
    assert!(matches!(
      Modulus::new(1),
      Err(LagrangeError::InvalidModulus { .. })
    ));
    assert!(matches!(
      Modulus::new(0),
      Err(LagrangeError::InvalidModulus { .. })
    ));
    assert!(matches!(
      Modulus::new(-17),
      Err(LagrangeError::InvalidModulus { .. })
    ));
  }

  #[test]
  fn test_modulus_from_json() {
    assert_eq!(Modulus::from_json(&json!(17)).unwrap(), modulus(17));
    for bad in [
      json!(1),
      json!(-17),
      json!(17.5),
      json!("17"),
      json!([17]),
      json!(null),
      serde_json::from_str::<Value>("1e3").unwrap(),
    ] {
      assert!(matches!(
        Modulus::from_json(&bad),
        Err(LagrangeError::InvalidModulus { .. })
      ));
    }
  }

  #[test]
  fn test_modulus_from_json_beyond_64_bits() {
    // 2^127 - 1
    let literal = "170141183460469231731687303715884105727";
    let value = serde_json::from_str::<Value>(literal).unwrap();
    let p = Modulus::from_json(&value).unwrap();
    assert_eq!(p, Modulus::new((1u128 << 127) - 1).unwrap());
    assert_eq!(p.bits(), 127);
  }

  #[test]
  fn test_modulus_serde() {
    let p = modulus(15485867);
    let s = serde_json::to_string(&p).unwrap();
    assert_eq!(serde_json::from_str::<Modulus>(&s).unwrap(), p);

    // the same encoding of an out-of-range value is rejected on the way in
    let one = serde_json::to_string(&BigInt::one()).unwrap();
    assert!(serde_json::from_str::<Modulus>(&one).is_err());
  }

  #[test]
  fn test_reduce() {
    let p = modulus(17);
    assert_eq!(p.reduce(&BigInt::from(20)), BigUint::from(3u32));
    assert_eq!(p.reduce(&BigInt::from(-1)), BigUint::from(16u32));
    assert_eq!(p.reduce(&BigInt::from(-34)), BigUint::zero());
  }

  #[test]
  fn test_inverse_all_elements() {
    for p in [2u64, 3, 5, 17, 101, 257] {
      let m = modulus(p);
      for a in 1..p {
        let r = inv(&BigInt::from(a), &m);
        assert!(r < BigUint::from(p));
        assert_eq!((BigUint::from(a) * r) % p, BigUint::one(), "a={a} p={p}");
      }
    }
  }

  #[test]
  fn test_inverse_negative() {
    let m = modulus(17);
    // -1 ≡ 16 and 16 * 16 = 256 ≡ 1
    assert_eq!(inv(&BigInt::from(-1), &m), BigUint::from(16u32));
    assert_eq!(inv(&BigInt::from(-2), &m), inv(&BigInt::from(15), &m));
  }

  #[test]
  fn test_inverse_of_zero() {
    for p in [2u64, 17] {
      let m = modulus(p);
      assert_eq!(inv(&BigInt::zero(), &m), BigUint::zero());
      assert_eq!(inv(&BigInt::from(p), &m), BigUint::zero());
      assert_eq!(
        checked_inv(&BigInt::zero(), &m),
        Err(LagrangeError::NotInvertible)
      );
    }
    assert_eq!(
      checked_inv(&BigInt::from(3), &modulus(17)),
      Ok(BigUint::from(6u32))
    );
  }
}
