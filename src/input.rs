//! JSON share documents.
//!
//! A document lists the scheme parameters under `"keys"` and one entry per share,
//! keyed by the decimal share index:
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! `base` may be a string or a number.
use crate::{
  decode::parse_radix,
  errors::RecoverError,
  field::FieldElement,
  reconstruct::Reconstructor,
  share::{Point, Share, decode_shares},
};
use serde::Deserialize;
use std::{collections::BTreeMap, path::Path};
use tracing::debug;

#[derive(Deserialize)]
struct RawKeys {
  n: usize,
  k: usize,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRadix {
  Number(u32),
  Text(String),
}

#[derive(Deserialize)]
struct RawShare {
  base: RawRadix,
  value: String,
}

#[derive(Deserialize)]
struct RawDocument {
  keys: RawKeys,
  #[serde(flatten)]
  shares: BTreeMap<String, RawShare>,
}

/// A parsed share document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
  /// Total number of shares issued
  pub n: usize,
  /// Number of shares needed to reconstruct
  pub k: usize,
  /// Shares present in the document, ordered by index
  pub shares: Vec<Share>,
}

impl TestCase {
  /// Parses a share document.
  pub fn from_json(json: &str) -> Result<Self, RecoverError> {
    let raw: RawDocument =
      serde_json::from_str(json).map_err(|e| RecoverError::InvalidInput {
        reason: e.to_string(),
      })?;

    let RawKeys { n, k } = raw.keys;
    if k == 0 || k > n {
      return Err(RecoverError::InvalidInput {
        reason: format!("invalid threshold: k = {k}, n = {n}"),
      });
    }

    let mut shares = Vec::with_capacity(raw.shares.len());
    for (index, share) in raw.shares {
      let index = index
        .parse::<u64>()
        .map_err(|_| RecoverError::InvalidInput {
          reason: format!("share key {index:?} is not a positive integer"),
        })?;
      let radix = match share.base {
        RawRadix::Number(radix) => radix,
        RawRadix::Text(radix) => parse_radix(&radix)?,
      };
      shares.push(Share::new(index, radix, share.value)?);
    }
    shares.sort_by_key(Share::index);

    if shares.len() != n {
      debug!(n, present = shares.len(), "share count differs from n");
    }

    Ok(Self { n, k, shares })
  }

  /// Reads and parses a share document from `path`.
  pub fn from_path(path: &Path) -> Result<Self, RecoverError> {
    let json = std::fs::read_to_string(path).map_err(|e| RecoverError::Io {
      reason: format!("{}: {e}", path.display()),
    })?;
    debug!(path = %path.display(), bytes = json.len(), "read share document");
    Self::from_json(&json)
  }

  /// Decodes every share in the document.
  pub fn points(&self) -> Result<Vec<Point>, RecoverError> {
    decode_shares(&self.shares)
  }

  /// Recovers the secret from the first `k` shares.
  ///
  /// With `check_subsets > 1`, that many k-subsets of the shares must agree, see
  /// [`Reconstructor::recover_checked`].
  pub fn secret(&self, check_subsets: usize) -> Result<FieldElement, RecoverError> {
    let points = self.points()?;
    let reconstructor = Reconstructor::new(self.k)?;
    if check_subsets > 1 {
      reconstructor.recover_checked(&points, check_subsets)
    } else {
      reconstructor.recover(&points)
    }
  }
}
