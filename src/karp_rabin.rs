use std::num::NonZeroU64;

use crate::common::is_degenerate;
use crate::rolling_hash::{DEFAULT_PRIME, RollingHash, hash};
use crate::*;

/// Karp-Rabin search with a rolling hash.
///
/// Every window costs exactly one (hash) comparison, so a scan reports `n - m + 1` comparisons.
/// Equal hashes are only candidates: a candidate is counted after the window bytes are compared
/// with the pattern, and that verification is not counted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KarpRabin {
  prime: NonZeroU64,
}

impl KarpRabin {
  pub const fn with_prime(prime: NonZeroU64) -> Self {
    Self { prime }
  }

  pub fn prime(&self) -> NonZeroU64 {
    self.prime
  }
}

impl Default for KarpRabin {
  fn default() -> Self {
    Self::with_prime(DEFAULT_PRIME)
  }
}

impl StringMatcher for KarpRabin {
  fn name(&self) -> &'static str {
    Algorithm::KarpRabin.as_str()
  }

  fn search(&self, text: &[u8], pattern: &[u8]) -> SearchOutcome {
    if is_degenerate(text, pattern) {
      return SearchOutcome::default();
    }

    let m = pattern.len();
    let last = text.len() - m;
    let pattern_hash = hash(pattern, self.prime);
    let mut window = RollingHash::new(&text[..m], self.prime);
    let mut outcome = SearchOutcome::default();

    for shift in 0..=last {
      outcome.comparisons += 1;
      if window.value() == pattern_hash && &text[shift..shift + m] == pattern {
        outcome.matches += 1;
      }
      if shift < last {
        window.roll(text[shift], text[shift + m]);
      }
    }
    outcome
  }
}
