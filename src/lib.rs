//! This library implements Lagrange interpolation at zero over prime fields.
//! Given shares `(x_i, y_i)` of a threshold secret-sharing scheme such as Shamir's,
//! it recovers the secret `P(0) mod p` using modular Lagrange coefficients.
//!
//! ```
//! use lagrange::{Interpolator, Modulus, interpolate};
//! use num_bigint::BigUint;
//!
//! // values at the implicit positions 1, 2, 3
//! assert_eq!(interpolate(vec![15, 9, 3], 17).unwrap(), BigUint::from(4u32));
//!
//! // the same shares with the modulus checked for primality
//! let p = Modulus::new(17).unwrap();
//! let secret = Interpolator::new()
//!   .verify_primality(true)
//!   .interpolate(vec![(1, 15), (2, 9), (3, 3)], &p)
//!   .unwrap();
//! assert_eq!(secret, BigUint::from(4u32));
//! ```
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
pub mod errors;
pub mod interpolator;
pub mod modular;
pub mod points;
pub mod primality;

pub use errors::LagrangeError;
pub use interpolator::{Interpolator, interpolate, lagrange, lagrange_coefficients_at_zero};
pub use modular::{Modulus, checked_inv, inv};
pub use points::{PointMap, Points};
pub use primality::is_probable_prime;
