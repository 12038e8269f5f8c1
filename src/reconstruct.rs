// Copyright (c) Microsoft Corporation.
// SPDX-License-Identifier: MIT
// This file is part of the shamir-recover project.
// See the LICENSE file in the project root for full license information.

//! Secret reconstruction by Lagrange interpolation at x = 0.
//!
//! For points `(x_i, y_i)`, `i = 0..k`, the secret is
//!
//! ```text
//! f(0) = Σ_i y_i · L_i(0),   L_i(0) = Π_{j≠i} (0 - x_j) / (x_i - x_j)
//! ```
//!
//! Each `L_i(0)` is accumulated as a numerator and a denominator product and divided
//! once with a single field inversion. The per-point terms are independent and are
//! computed in parallel.
use crate::{errors::RecoverError, field::FieldElement, share::Point};
use itertools::Itertools;
use rayon::prelude::*;
use std::collections::HashSet;

fn check_share_set(xs: &[FieldElement]) -> Result<(), RecoverError> {
  if xs.is_empty() {
    return Err(RecoverError::DegenerateShareSet {
      reason: "no points supplied".to_string(),
    });
  }

  let mut seen = HashSet::with_capacity(xs.len());
  for x in xs {
    if !seen.insert(x) {
      return Err(RecoverError::DegenerateShareSet {
        reason: format!("duplicate x-coordinate {x}"),
      });
    }
  }
  Ok(())
}

fn basis_at_zero(xs: &[FieldElement], i: usize) -> Result<FieldElement, RecoverError> {
  let xi = &xs[i];
  let mut num = FieldElement::one();
  let mut den = FieldElement::one();
  for (j, xj) in xs.iter().enumerate() {
    if j == i {
      continue;
    }
    num = num * (-xj);
    den = den * (xi - xj);
  }
  Ok(num * den.invert()?)
}

/// Computes the Lagrange basis values `L_i(0)` for distinct x-coordinates `xs`.
///
/// The returned coefficients sum to one.
///
/// # Errors
/// Returns `RecoverError::DegenerateShareSet` if `xs` is empty or has duplicates.
pub fn lagrange_coefficients_at_zero(
  xs: &[FieldElement],
) -> Result<Vec<FieldElement>, RecoverError> {
  check_share_set(xs)?;
  (0..xs.len())
    .into_par_iter()
    .map(|i| basis_at_zero(xs, i))
    .collect()
}

/// Recovers `f(0)` for the unique polynomial of degree `points.len() - 1` through `points`.
///
/// # Errors
/// Returns `RecoverError::DegenerateShareSet` if `points` is empty or two points share an
/// x-coordinate.
pub fn reconstruct(points: &[Point]) -> Result<FieldElement, RecoverError> {
  let xs: Vec<FieldElement> = points.iter().map(|p| p.x.clone()).collect();
  let coeffs = lagrange_coefficients_at_zero(&xs)?;

  Ok(
    points
      .par_iter()
      .zip(coeffs.par_iter())
      .map(|(p, c)| &p.y * c)
      .reduce(FieldElement::zero, |acc, term| acc + term),
  )
}

/// Reconstruction for a fixed threshold `k`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reconstructor {
  threshold: usize,
}

impl Reconstructor {
  /// Creates a reconstructor for threshold `k >= 1`.
  pub fn new(threshold: usize) -> Result<Self, RecoverError> {
    if threshold == 0 {
      return Err(RecoverError::DegenerateShareSet {
        reason: "threshold must be at least 1".to_string(),
      });
    }
    Ok(Self { threshold })
  }

  /// The threshold `k`
  pub fn threshold(&self) -> usize {
    self.threshold
  }

  /// Reconstructs from exactly `k` points.
  pub fn reconstruct(&self, points: &[Point]) -> Result<FieldElement, RecoverError> {
    if points.len() != self.threshold {
      return Err(RecoverError::DegenerateShareSet {
        reason: format!("expected {} points, got {}", self.threshold, points.len()),
      });
    }
    reconstruct(points)
  }

  /// Reconstructs from the first `k` of the supplied points.
  pub fn recover(&self, points: &[Point]) -> Result<FieldElement, RecoverError> {
    if points.len() < self.threshold {
      return Err(RecoverError::DegenerateShareSet {
        reason: format!(
          "need at least {} points, got {}",
          self.threshold,
          points.len()
        ),
      });
    }
    reconstruct(&points[..self.threshold])
  }

  /// Like [`Reconstructor::recover`], but also reconstructs from up to `subsets - 1`
  /// further k-subsets (in lexicographic order of their positions) and fails if any of
  /// them disagrees with the first one.
  ///
  /// With `subsets <= 1`, or exactly `k` points, this is the same as `recover`.
  ///
  /// # Errors
  /// Returns `RecoverError::InconsistentShares` if two subsets yield different secrets.
  pub fn recover_checked(
    &self,
    points: &[Point],
    subsets: usize,
  ) -> Result<FieldElement, RecoverError> {
    let expected = self.recover(points)?;

    for positions in (0..points.len())
      .combinations(self.threshold)
      .skip(1)
      .take(subsets.saturating_sub(1))
    {
      let subset: Vec<Point> = positions.iter().map(|&i| points[i].clone()).collect();
      let found = reconstruct(&subset)?;
      if found != expected {
        return Err(RecoverError::InconsistentShares {
          expected: expected.to_string(),
          found: found.to_string(),
        });
      }
    }

    Ok(expected)
  }
}
