// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the shamir-recover project.
// See the LICENSE file in the project root for full license information.

//! Arithmetic in the prime field GF(P) with P = 2^256 - 2^32 - 977.
//!
//! All operations take arbitrary (possibly negative, possibly unreduced) big integers,
//! compute the exact result, and then reduce it into `[0, P)`. The only failure mode
//! is asking for the inverse of a value congruent to zero.
//!
//! [`FieldElement`] wraps a reduced value and implements the usual operators on top
//! of the free functions in this module.
use crate::errors::RecoverError;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
  fmt,
  ops::{Add, Mul, Neg, Sub},
};

/// The field modulus P = 2^256 - 2^32 - 977.
pub static MODULUS: Lazy<BigUint> =
  Lazy::new(|| (BigUint::one() << 256u32) - (BigUint::one() << 32u32) - BigUint::from(977u32));

static MODULUS_INT: Lazy<BigInt> = Lazy::new(|| BigInt::from(MODULUS.clone()));

/// An integer in `[0, P)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldElement(BigUint);

impl FieldElement {
  /// The additive identity
  pub fn zero() -> Self {
    FieldElement(BigUint::zero())
  }

  /// The multiplicative identity
  pub fn one() -> Self {
    FieldElement(BigUint::one())
  }

  /// Returns true if this is the zero element
  pub fn is_zero(&self) -> bool {
    self.0.is_zero()
  }

  /// The canonical representative in `[0, P)`
  pub fn as_biguint(&self) -> &BigUint {
    &self.0
  }

  /// Signed view of the representative, for mixing with unreduced operands
  pub fn to_bigint(&self) -> BigInt {
    BigInt::from(self.0.clone())
  }

  /// Multiplicative inverse, see [`mod_inverse`]
  pub fn invert(&self) -> Result<FieldElement, RecoverError> {
    mod_inverse(&self.to_bigint())
  }
}

impl From<u64> for FieldElement {
  fn from(value: u64) -> Self {
    FieldElement::from(BigUint::from(value))
  }
}

impl From<BigUint> for FieldElement {
  fn from(value: BigUint) -> Self {
    if value < *MODULUS {
      FieldElement(value)
    } else {
      FieldElement(value % &*MODULUS)
    }
  }
}

impl fmt::Display for FieldElement {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

// Serialized as a decimal string; 256-bit values do not fit JSON numbers.
impl Serialize for FieldElement {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(&self.0.to_str_radix(10))
  }
}

impl<'de> Deserialize<'de> for FieldElement {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    use serde::de::Error;

    let s = String::deserialize(deserializer)?;
    let value = BigUint::parse_bytes(s.as_bytes(), 10)
      .ok_or_else(|| D::Error::custom(format!("not a decimal integer: {s:?}")))?;
    if value >= *MODULUS {
      return Err(D::Error::custom("field element is not reduced"));
    }
    Ok(FieldElement(value))
  }
}

/// Returns `a mod P` in `[0, P)`, including for negative `a`.
pub fn reduce(a: &BigInt) -> FieldElement {
  let (_, magnitude) = a.mod_floor(&MODULUS_INT).into_parts();
  FieldElement(magnitude)
}

/// `(a + b) mod P`
pub fn add(a: &BigInt, b: &BigInt) -> FieldElement {
  reduce(&(a + b))
}

/// `(a - b) mod P`
pub fn sub(a: &BigInt, b: &BigInt) -> FieldElement {
  reduce(&(a - b))
}

/// `(a * b) mod P`
pub fn mul(a: &BigInt, b: &BigInt) -> FieldElement {
  reduce(&(a * b))
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` such that `g = gcd(a, b) = a*x + b*y`. For `a == 0` this is
/// `(b, 0, 1)`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
  let (mut old_r, mut r) = (a.clone(), b.clone());
  let (mut old_x, mut x) = (BigInt::one(), BigInt::zero());
  let (mut old_y, mut y) = (BigInt::zero(), BigInt::one());

  while !r.is_zero() {
    let q = &old_r / &r;

    let next_r = &old_r - &q * &r;
    old_r = std::mem::replace(&mut r, next_r);

    let next_x = &old_x - &q * &x;
    old_x = std::mem::replace(&mut x, next_x);

    let next_y = &old_y - &q * &y;
    old_y = std::mem::replace(&mut y, next_y);
  }

  (old_r, old_x, old_y)
}

/// Returns `x` in `[0, P)` with `a * x ≡ 1 (mod P)`.
///
/// # Errors
/// Returns `RecoverError::NoInverse` if `a ≡ 0 (mod P)`.
pub fn mod_inverse(a: &BigInt) -> Result<FieldElement, RecoverError> {
  let a = reduce(a).to_bigint();
  let (g, x, _) = extended_gcd(&a, &MODULUS_INT);
  if !g.is_one() {
    return Err(RecoverError::NoInverse);
  }
  Ok(reduce(&x))
}

macro_rules! impl_binary_op {
  ($op:ident, $method:ident, $func:ident) => {
    impl $op<&FieldElement> for &FieldElement {
      type Output = FieldElement;

      fn $method(self, rhs: &FieldElement) -> FieldElement {
        $func(&self.to_bigint(), &rhs.to_bigint())
      }
    }

    impl $op<&FieldElement> for FieldElement {
      type Output = FieldElement;

      fn $method(self, rhs: &FieldElement) -> FieldElement {
        (&self).$method(rhs)
      }
    }

    impl $op<FieldElement> for FieldElement {
      type Output = FieldElement;

      fn $method(self, rhs: FieldElement) -> FieldElement {
        (&self).$method(&rhs)
      }
    }
  };
}

impl_binary_op!(Add, add, add);
impl_binary_op!(Sub, sub, sub);
impl_binary_op!(Mul, mul, mul);

impl Neg for &FieldElement {
  type Output = FieldElement;

  fn neg(self) -> FieldElement {
    sub(&BigInt::zero(), &self.to_bigint())
  }
}

impl Neg for FieldElement {
  type Output = FieldElement;

  fn neg(self) -> FieldElement {
    -&self
  }
}
