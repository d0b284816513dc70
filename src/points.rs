// SPDX-License-Identifier: MIT
// This file is part of the lagrange project.

//! Point-set inputs and their canonical form.
//!
//! This module defines:
//! - [`Points`]: the accepted input shapes (implicit positions, explicit pairs, a position map)
//! - [`PointMap`]: the canonical, non-empty, position-ordered map every shape normalizes into
//!
//! Shapes are chosen at compile time through the `From` impls below. The only
//! runtime shape dispatch is [`Points::from_json`], for dynamically typed input.

use crate::{errors::LagrangeError, modular::json_integer};
use num_bigint::{BigInt, BigUint};
use num_traits::One;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, btree_map};

/// A point collection in one of the accepted shapes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Points {
  /// y-values at positions 1, 2, ..., n
  ImplicitPositions(Vec<BigInt>),
  /// (x, y) pairs; a later pair overwrites an earlier one with the same x
  ExplicitPairs(Vec<(BigInt, BigInt)>),
  /// positions mapped to values
  PositionMap(BTreeMap<BigInt, BigInt>),
}

impl Points {
  /// Values at implicit positions 1..=n.
  pub fn implicit<I, T>(values: I) -> Self
  where
    I: IntoIterator<Item = T>,
    T: Into<BigInt>,
  {
    Points::ImplicitPositions(values.into_iter().map(Into::into).collect())
  }

  /// Explicit (x, y) pairs.
  pub fn pairs<I, X, Y>(pairs: I) -> Self
  where
    I: IntoIterator<Item = (X, Y)>,
    X: Into<BigInt>,
    Y: Into<BigInt>,
  {
    Points::ExplicitPairs(
      pairs
        .into_iter()
        .map(|(x, y)| (x.into(), y.into()))
        .collect(),
    )
  }

  /// A position to value mapping.
  pub fn map<I, X, Y>(entries: I) -> Self
  where
    I: IntoIterator<Item = (X, Y)>,
    X: Into<BigInt>,
    Y: Into<BigInt>,
  {
    Points::PositionMap(
      entries
        .into_iter()
        .map(|(x, y)| (x.into(), y.into()))
        .collect(),
    )
  }

  /// Reads a point collection from a dynamically typed JSON value.
  ///
  /// Accepted shapes:
  /// - an array of integers, e.g. `[15, 9, 3]`
  /// - an array of two-element integer arrays, e.g. `[[1, 15], [2, 9], [3, 3]]`
  /// - an object with integer keys, e.g. `{"1": 15, "2": 9, "3": 3}`
  ///
  /// # Errors
  /// Returns [`LagrangeError::InvalidInputShape`] for anything else.
  pub fn from_json(value: &Value) -> Result<Self, LagrangeError> {
    match value {
      Value::Array(items) => {
        if let Some(values) = items.iter().map(json_integer).collect::<Option<Vec<_>>>() {
          return Ok(Points::ImplicitPositions(values));
        }
        items
          .iter()
          .map(json_pair)
          .collect::<Option<Vec<_>>>()
          .map(Points::ExplicitPairs)
          .ok_or_else(|| invalid_shape("expected an array of integers or of [x, y] pairs"))
      }
      Value::Object(entries) => entries
        .iter()
        .map(|(k, v)| Some((k.trim().parse::<BigInt>().ok()?, json_integer(v)?)))
        .collect::<Option<BTreeMap<_, _>>>()
        .map(Points::PositionMap)
        .ok_or_else(|| invalid_shape("expected an object mapping integer positions to integers")),
      other => Err(invalid_shape(&format!(
        "expected a list of values, a list of points, or a mapping, got {other}"
      ))),
    }
  }

  /// Number of entries as supplied, before duplicate positions collapse.
  pub fn len(&self) -> usize {
    match self {
      Points::ImplicitPositions(values) => values.len(),
      Points::ExplicitPairs(pairs) => pairs.len(),
      Points::PositionMap(map) => map.len(),
    }
  }

  /// Returns `true` if there are no entries.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Converts into the canonical [`PointMap`].
  ///
  /// # Errors
  /// Returns [`LagrangeError::InvalidInputShape`] if the collection is empty.
  pub fn normalize(self) -> Result<PointMap, LagrangeError> {
    let map: BTreeMap<BigInt, BigInt> = match self {
      Points::ImplicitPositions(values) => {
        let mut position = BigInt::one();
        let mut map = BTreeMap::new();
        for value in values {
          map.insert(position.clone(), value);
          position += 1u32;
        }
        map
      }
      Points::ExplicitPairs(pairs) => pairs.into_iter().collect(),
      Points::PositionMap(map) => map,
    };
    PointMap::new(map)
  }
}

fn invalid_shape(reason: &str) -> LagrangeError {
  LagrangeError::InvalidInputShape {
    reason: reason.to_string(),
  }
}

fn json_pair(value: &Value) -> Option<(BigInt, BigInt)> {
  match value.as_array()?.as_slice() {
    [x, y] => Some((json_integer(x)?, json_integer(y)?)),
    _ => None,
  }
}

macro_rules! impl_from_values {
  ($($t:ty),*) => {
    $(
      impl From<Vec<$t>> for Points {
        fn from(values: Vec<$t>) -> Self {
          Points::implicit(values)
        }
      }

      impl From<&[$t]> for Points {
        fn from(values: &[$t]) -> Self {
          Points::implicit(values.iter().cloned())
        }
      }

      impl<const N: usize> From<[$t; N]> for Points {
        fn from(values: [$t; N]) -> Self {
          Points::implicit(values)
        }
      }
    )*
  };
}

impl_from_values!(i32, i64, i128, u32, u64, u128, usize, BigInt, BigUint);

impl<X: Into<BigInt>, Y: Into<BigInt>> From<Vec<(X, Y)>> for Points {
  fn from(pairs: Vec<(X, Y)>) -> Self {
    Points::pairs(pairs)
  }
}

impl<X, Y> From<&[(X, Y)]> for Points
where
  X: Clone + Into<BigInt>,
  Y: Clone + Into<BigInt>,
{
  fn from(pairs: &[(X, Y)]) -> Self {
    Points::pairs(pairs.iter().cloned())
  }
}

impl<X: Into<BigInt>, Y: Into<BigInt>, const N: usize> From<[(X, Y); N]> for Points {
  fn from(pairs: [(X, Y); N]) -> Self {
    Points::pairs(pairs)
  }
}

impl<X: Into<BigInt>, Y: Into<BigInt>, S> From<HashSet<(X, Y), S>> for Points {
  fn from(pairs: HashSet<(X, Y), S>) -> Self {
    Points::pairs(pairs)
  }
}

impl<X: Into<BigInt>, Y: Into<BigInt>> From<BTreeSet<(X, Y)>> for Points {
  fn from(pairs: BTreeSet<(X, Y)>) -> Self {
    Points::pairs(pairs)
  }
}

impl<X: Into<BigInt>, Y: Into<BigInt>, S> From<HashMap<X, Y, S>> for Points {
  fn from(entries: HashMap<X, Y, S>) -> Self {
    Points::map(entries)
  }
}

impl<X: Into<BigInt>, Y: Into<BigInt>> From<BTreeMap<X, Y>> for Points {
  fn from(entries: BTreeMap<X, Y>) -> Self {
    Points::map(entries)
  }
}

/// The canonical point set: a non-empty map from position to value, ordered
/// by ascending position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
  try_from = "Vec<(BigInt, BigInt)>",
  into = "Vec<(BigInt, BigInt)>"
)]
pub struct PointMap(BTreeMap<BigInt, BigInt>);

impl PointMap {
  /// Wraps a position to value map.
  ///
  /// # Errors
  /// Returns [`LagrangeError::InvalidInputShape`] if `map` is empty.
  pub fn new(map: BTreeMap<BigInt, BigInt>) -> Result<Self, LagrangeError> {
    if map.is_empty() {
      return Err(invalid_shape("expected at least one point"));
    }
    Ok(PointMap(map))
  }

  /// Number of points.
  pub fn len(&self) -> usize {
    self.0.len()
  }

  /// Returns `true` if there are no points.
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Value at `position`, if present.
  pub fn get(&self, position: &BigInt) -> Option<&BigInt> {
    self.0.get(position)
  }

  /// Positions in ascending order.
  pub fn positions(&self) -> btree_map::Keys<'_, BigInt, BigInt> {
    self.0.keys()
  }

  /// (position, value) pairs in ascending position order.
  pub fn iter(&self) -> btree_map::Iter<'_, BigInt, BigInt> {
    self.0.iter()
  }
}

impl TryFrom<Vec<(BigInt, BigInt)>> for PointMap {
  type Error = LagrangeError;

  fn try_from(pairs: Vec<(BigInt, BigInt)>) -> Result<Self, Self::Error> {
    PointMap::new(pairs.into_iter().collect())
  }
}

impl From<PointMap> for Vec<(BigInt, BigInt)> {
  fn from(points: PointMap) -> Self {
    points.0.into_iter().collect()
  }
}

impl TryFrom<Points> for PointMap {
  type Error = LagrangeError;

  fn try_from(points: Points) -> Result<Self, Self::Error> {
    points.normalize()
  }
}

impl<'a> IntoIterator for &'a PointMap {
  type Item = (&'a BigInt, &'a BigInt);
  type IntoIter = btree_map::Iter<'a, BigInt, BigInt>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
