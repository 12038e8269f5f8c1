// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the shamir-recover project.
// See the LICENSE file in the project root for full license information.

//! Decoding of share values written as digit strings in radix 2..=36.
//!
//! Digits are `0-9` followed by `a-z` (case-insensitive) for values 10..=35. The whole
//! string is accumulated exactly as a [`BigUint`] and reduced into the field once at
//! the end, so digit strings of any length decode without loss.
use crate::{errors::RecoverError, field::FieldElement};
use num_bigint::BigUint;
use num_traits::Zero;

/// Smallest supported radix
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix
pub const MAX_RADIX: u32 = 36;

fn check_radix(radix: u32) -> Result<(), RecoverError> {
  if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
    return Err(RecoverError::InvalidRadix {
      reason: format!("radix {radix} is outside [{MIN_RADIX}, {MAX_RADIX}]"),
    });
  }
  Ok(())
}

/// Parses a radix given as a decimal string, as found in share documents.
pub fn parse_radix(radix: &str) -> Result<u32, RecoverError> {
  let value = radix
    .trim()
    .parse::<u32>()
    .map_err(|e| RecoverError::InvalidRadix {
      reason: format!("{radix:?} is not a radix: {e}"),
    })?;
  check_radix(value)?;
  Ok(value)
}

/// Decodes `digits` in base `radix` into a field element.
///
/// # Errors
/// Returns `RecoverError::InvalidRadix` if `radix` is outside `[2, 36]`, and
/// `RecoverError::InvalidDigit` if `digits` is empty or contains a character that is
/// not a digit of `radix`.
pub fn decode(digits: &str, radix: u32) -> Result<FieldElement, RecoverError> {
  check_radix(radix)?;
  if digits.is_empty() {
    return Err(RecoverError::InvalidDigit {
      reason: "empty digit string".to_string(),
    });
  }

  let base = BigUint::from(radix);
  let mut value = BigUint::zero();
  for (pos, c) in digits.chars().enumerate() {
    let digit = c.to_digit(radix).ok_or_else(|| RecoverError::InvalidDigit {
      reason: format!("{c:?} at position {pos} is not a base-{radix} digit"),
    })?;
    value = value * &base + digit;
  }

  Ok(FieldElement::from(value))
}

/// Renders `value` in base `radix` with lowercase digits and no leading zeros.
pub fn encode(value: &FieldElement, radix: u32) -> Result<String, RecoverError> {
  check_radix(radix)?;
  Ok(value.as_biguint().to_str_radix(radix))
}
