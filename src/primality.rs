// SPDX-License-Identifier: MIT
// This file is part of the lagrange project.

//! Miller–Rabin primality testing for moduli.
//!
//! The witness set is the first 13 primes, which makes the test deterministic
//! for every n < 3,317,044,064,679,887,385,961,981. Above that bound a
//! composite could in principle pass.

use num_bigint::BigUint;
use num_traits::{One, Zero};

const WITNESSES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// Returns `true` if `n` is prime (see the module docs for the exact guarantee).
pub fn is_probable_prime(n: &BigUint) -> bool {
  if *n < BigUint::from(2u32) {
    return false;
  }

  // trial division doubles as the small-prime fast path
  for &q in WITNESSES.iter() {
    if *n == BigUint::from(q) {
      return true;
    }
    if (n % q).is_zero() {
      return false;
    }
  }

  // n - 1 = d * 2^s with d odd
  let n_minus_one = n - 1u32;
  let s = n_minus_one.trailing_zeros().unwrap_or(0);
  let d = &n_minus_one >> s;

  WITNESSES
    .iter()
    .all(|&a| is_strong_probable_prime(&BigUint::from(a), n, &n_minus_one, &d, s))
}

fn is_strong_probable_prime(
  a: &BigUint,
  n: &BigUint,
  n_minus_one: &BigUint,
  d: &BigUint,
  s: u64,
) -> bool {
  let mut x = a.modpow(d, n);
  if x.is_one() || x == *n_minus_one {
    return true;
  }
  for _ in 1..s {
    x = (&x * &x) % n;
    if x == *n_minus_one {
      return true;
    }
    if x.is_one() {
      return false;
    }
  }
  false
}

#[cfg(test)]
mod tests {
  use super::*;

  fn check(n: u128) -> bool {
    is_probable_prime(&BigUint::from(n))
  }

  #[test]
  fn test_small_values() {
    let primes: Vec<u128> = (0..100).filter(|&n| check(n)).collect();
    assert_eq!(
      primes,
      vec![
        2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83,
        89, 97
      ]
    );
  }

  #[test]
  fn test_known_primes() {
    assert!(check(17));
    assert!(check(15485863));
    assert!(check(15485867));
    assert!(check((1 << 61) - 1));
    assert!(check((1 << 127) - 1));
  }

  #[test]
  fn test_known_composites() {
    // Carmichael numbers
    assert!(!check(561));
    assert!(!check(41041));
    // strong pseudoprime to bases 2, 3, 5 and 7
    assert!(!check(3215031751));
    assert!(!check(15485863 * 15485867));
    // 2^67 - 1 = 193707721 * 761838257287
    assert!(!check((1 << 67) - 1));
  }
}
