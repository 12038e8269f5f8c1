use num_bigint::{BigInt, RandBigInt};
use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use shamir_recover::{
  FieldElement, Point, RecoverError, Reconstructor, TestCase,
  decode::{decode, encode},
  field::{MODULUS, mod_inverse, reduce},
  reconstruct,
};
use std::{collections::HashSet, path::PathBuf};

fn fixture(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("fixtures")
    .join(name)
}

fn random_element(rng: &mut StdRng) -> FieldElement {
  FieldElement::from(rng.gen_biguint_below(&MODULUS))
}

/// Random polynomial of the given degree, constant term first.
fn random_poly(rng: &mut StdRng, degree: usize) -> Vec<FieldElement> {
  (0..=degree).map(|_| random_element(rng)).collect()
}

fn evaluate(poly: &[FieldElement], x: &FieldElement) -> FieldElement {
  poly
    .iter()
    .rev()
    .fold(FieldElement::zero(), |acc, c| acc * x + c)
}

/// `count` points on `poly` at distinct nonzero x-coordinates.
fn sample_points(rng: &mut StdRng, poly: &[FieldElement], count: usize) -> Vec<Point> {
  let mut seen = HashSet::new();
  let mut points = Vec::with_capacity(count);
  while points.len() < count {
    let x = FieldElement::from(rng.gen_range(1..u64::MAX));
    if seen.insert(x.clone()) {
      let y = evaluate(poly, &x);
      points.push(Point::new(x, y));
    }
  }
  points
}

#[test]
fn fixture_small_case() {
  let case = TestCase::from_path(&fixture("testcase1.json")).unwrap();
  assert_eq!((case.n, case.k), (4, 3));

  let points = case.points().unwrap();
  let expected: Vec<Point> = [(1u64, 4u64), (2, 7), (3, 12), (6, 39)]
    .into_iter()
    .map(|(x, y)| Point::new(FieldElement::from(x), FieldElement::from(y)))
    .collect();
  assert_eq!(points, expected);

  assert_eq!(case.secret(1).unwrap(), FieldElement::from(3u64));
  // every share lies on x^2 + 3
  assert_eq!(case.secret(usize::MAX).unwrap(), FieldElement::from(3u64));
}

#[test]
fn fixture_large_case() {
  let case = TestCase::from_path(&fixture("testcase2.json")).unwrap();
  assert_eq!((case.n, case.k), (10, 7));
  assert_eq!(case.secret(1).unwrap(), FieldElement::from(79836264049851u64));

  // share 8 is not on the same polynomial as the others
  assert!(matches!(
    case.secret(2),
    Err(RecoverError::InconsistentShares { .. })
  ));

  let good: Vec<Point> = case
    .shares
    .iter()
    .filter(|s| s.index() != 8)
    .map(|s| s.decode().unwrap())
    .collect();
  let reconstructor = Reconstructor::new(case.k).unwrap();
  assert_eq!(
    reconstructor.recover_checked(&good, usize::MAX).unwrap(),
    FieldElement::from(79836264049851u64)
  );
}

#[test]
fn long_base3_value_survives_round_trip() {
  let case = TestCase::from_path(&fixture("testcase2.json")).unwrap();
  for share in case.shares.iter().filter(|s| s.radix() == 3) {
    assert!(share.digits().len() >= 40);
    let value = decode(share.digits(), 3).unwrap();
    assert_eq!(
      encode(&value, 3).unwrap(),
      share.digits().trim_start_matches('0')
    );
  }
}

#[test]
fn duplicate_x_is_rejected() {
  let mut rng = StdRng::seed_from_u64(3);
  let poly = random_poly(&mut rng, 2);
  let mut points = sample_points(&mut rng, &poly, 3);
  points[2] = Point::new(points[0].x.clone(), random_element(&mut rng));
  assert!(matches!(
    reconstruct(&points),
    Err(RecoverError::DegenerateShareSet { .. })
  ));
}

#[test]
fn zero_has_no_inverse() {
  assert_eq!(
    mod_inverse(&BigInt::from(MODULUS.clone())),
    Err(RecoverError::NoInverse)
  );
}

proptest! {
  #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]

  #[test]
  fn any_k_points_recover_constant_term(k in 1usize..=12, seed in any::<u64>()) {
    let mut rng = StdRng::seed_from_u64(seed);
    let poly = random_poly(&mut rng, k - 1);
    let points = sample_points(&mut rng, &poly, k);
    prop_assert_eq!(reconstruct(&points).unwrap(), poly[0].clone());
  }

  #[test]
  fn k_subsets_agree(k in 1usize..=8, seed in any::<u64>()) {
    let mut rng = StdRng::seed_from_u64(seed);
    let poly = random_poly(&mut rng, k - 1);
    let mut points = sample_points(&mut rng, &poly, 2 * k + 1);
    let reconstructor = Reconstructor::new(k).unwrap();

    let first = reconstructor.reconstruct(&points[..k]).unwrap();
    let last = reconstructor.reconstruct(&points[k + 1..]).unwrap();
    prop_assert_eq!(&first, &last);

    points.shuffle(&mut rng);
    prop_assert_eq!(&reconstructor.recover(&points).unwrap(), &first);
    prop_assert_eq!(&reconstructor.recover_checked(&points, 16).unwrap(), &first);
    prop_assert_eq!(first, poly[0].clone());
  }

  #[test]
  fn decode_inverts_encode(seed in any::<u64>(), radix in 2u32..=36) {
    let mut rng = StdRng::seed_from_u64(seed);
    let value = random_element(&mut rng);
    let digits = encode(&value, radix).unwrap();
    prop_assert_eq!(decode(&digits, radix).unwrap(), value.clone());
    prop_assert_eq!(decode(&digits.to_uppercase(), radix).unwrap(), value);
  }

  #[test]
  fn inverse_law(seed in any::<u64>()) {
    let mut rng = StdRng::seed_from_u64(seed);
    let a = random_element(&mut rng);
    prop_assume!(!a.is_zero());
    prop_assert_eq!(&a * &a.invert().unwrap(), FieldElement::one());
  }

  #[test]
  fn reduce_is_idempotent(seed in any::<u64>(), bits in 1u64..600) {
    let mut rng = StdRng::seed_from_u64(seed);
    let a = rng.gen_bigint(bits);
    let once = reduce(&a);
    prop_assert!(*once.as_biguint() < *MODULUS);
    prop_assert_eq!(reduce(&once.to_bigint()), once);
  }
}
