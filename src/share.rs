//! Shares as received from a dealer and their decoded points.
use crate::{decode::decode, errors::RecoverError, field::FieldElement};

/// One party's share: the evaluation point `index` and the value written in `radix`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Share {
  index: u64,
  radix: u32,
  digits: String,
}

/// A decoded share, i.e. a point `(x, y)` on the sharing polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
  /// x-coordinate (share index)
  pub x: FieldElement,
  /// y-coordinate (share value)
  pub y: FieldElement,
}

impl Point {
  /// Creates a point from its coordinates
  pub fn new(x: FieldElement, y: FieldElement) -> Self {
    Self { x, y }
  }
}

impl Share {
  /// Creates a share, rejecting the index 0 which would expose the secret itself.
  pub fn new(index: u64, radix: u32, digits: impl Into<String>) -> Result<Self, RecoverError> {
    if index == 0 {
      return Err(RecoverError::InvalidInput {
        reason: "share index must be positive".to_string(),
      });
    }
    Ok(Self {
      index,
      radix,
      digits: digits.into(),
    })
  }

  /// The share index
  pub fn index(&self) -> u64 {
    self.index
  }

  /// The radix of the value
  pub fn radix(&self) -> u32 {
    self.radix
  }

  /// The value as written
  pub fn digits(&self) -> &str {
    &self.digits
  }

  /// Decodes the share into a field point.
  pub fn decode(&self) -> Result<Point, RecoverError> {
    let y = decode(&self.digits, self.radix)?;
    Ok(Point::new(FieldElement::from(self.index), y))
  }
}

/// Decodes shares in order, stopping at the first invalid one.
pub fn decode_shares(shares: &[Share]) -> Result<Vec<Point>, RecoverError> {
  shares.iter().map(Share::decode).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_share_rejects_index_zero() {
    assert!(matches!(
      Share::new(0, 10, "4"),
      Err(RecoverError::InvalidInput { .. })
    ));
  }

  #[test]
  fn test_decode_shares() {
    let shares = vec![
      Share::new(1, 10, "4").unwrap(),
      Share::new(2, 2, "111").unwrap(),
      Share::new(3, 10, "12").unwrap(),
      Share::new(6, 4, "213").unwrap(),
    ];
    let points = decode_shares(&shares).unwrap();
    let expected: Vec<Point> = [(1u64, 4u64), (2, 7), (3, 12), (6, 39)]
      .into_iter()
      .map(|(x, y)| Point::new(FieldElement::from(x), FieldElement::from(y)))
      .collect();
    assert_eq!(points, expected);
  }

  #[test]
  fn test_decode_shares_reports_first_error() {
    let shares = vec![
      Share::new(1, 10, "4").unwrap(),
      Share::new(2, 2, "121").unwrap(),
      Share::new(3, 40, "12").unwrap(),
    ];
    assert!(matches!(
      decode_shares(&shares),
      Err(RecoverError::InvalidDigit { .. })
    ));
  }
}
