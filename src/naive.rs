use crate::common::is_degenerate;

use crate::*;

/// Tries every alignment of the pattern, left to right.
/// One comparison is counted per character pair inspected; an alignment stops at its first mismatch.
/// runtime: O(n*m)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BruteForce;

impl StringMatcher for BruteForce {
  fn name(&self) -> &'static str {
    Algorithm::BruteForce.as_str()
  }

  fn search(&self, text: &[u8], pattern: &[u8]) -> SearchOutcome {
    if is_degenerate(text, pattern) {
      return SearchOutcome::default();
    }

    let mut outcome = SearchOutcome::default();
    for shift in 0..=text.len() - pattern.len() {
      let mut matched = true;
      for (t, p) in text[shift..].iter().zip(pattern) {
        outcome.comparisons += 1;
        if t != p {
          matched = false;
          break;
        }
      }
      if matched {
        outcome.matches += 1;
      }
    }
    outcome
  }
}

#[cfg(test)]
mod tests {
  use test_case::test_case;
  use super::*;

  #[test_case("this is a simple example text for testing", "example", 1, 45)]
  #[test_case("this is a simple example text for testing", "simple", 1, 43)]
  #[test_case("aaaa", "aa", 3, 6 ; "overlapping")]
  #[test_case("aaaa", "b", 0, 4 ; "single byte no occ")]
  #[test_case("abc", "abc", 1, 3 ; "whole text")]
  fn simple(text: &str, pattern: &str, matches: u64, comparisons: u64) {
    assert_eq!(SearchOutcome::new(matches, comparisons), BruteForce.search(text.as_bytes(), pattern.as_bytes()));
  }

  #[test]
  fn worst_case_is_quadratic() {
    // every alignment but the last fails on its final byte
    let text = [b"a".repeat(9), b"b".to_vec()].concat();
    let outcome = BruteForce.search(&text, b"aaab");
    assert_eq!(SearchOutcome::new(1, 7 * 4), outcome);
  }
}
