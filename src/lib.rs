//! Exact string matching engines with comparison counting.
//! Every engine counts the (possibly overlapping) occurrences of a pattern in a text and
//! reports how many character or hash comparisons the scan performed, so the engines can be
//! compared against each other on the same input.
//! The `tsp` module holds a set of Traveling Salesman solvers built on the same crate stack.

use std::fmt;
use std::str::FromStr;

mod common;
pub mod naive;
pub mod morris_pratt;
pub mod rolling_hash;
pub mod karp_rabin;
pub mod boyer_moore;
pub mod batch;
pub mod tsp;
pub mod config;
pub mod error;

pub use common::{lps_table, smallest_period};
pub use naive::BruteForce;
pub use morris_pratt::{KnuthMorrisPratt, MorrisPratt};
pub use karp_rabin::KarpRabin;
pub use boyer_moore::{AbsentChar, BoyerMoore, BoyerMooreOptimized, MatchShift};
pub use error::{Error, Result};


#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SearchOutcome {
  /// number of start offsets where the pattern occurs
  pub matches: u64,
  /// instrumentation counter, its meaning depends on the engine
  pub comparisons: u64,
}

impl SearchOutcome {
  pub const fn new(matches: u64, comparisons: u64) -> Self {
    Self { matches, comparisons }
  }
}

impl From<SearchOutcome> for (u64, u64) {
  fn from(outcome: SearchOutcome) -> Self {
    (outcome.matches, outcome.comparisons)
  }
}

pub trait StringMatcher {
  fn name(&self) -> &'static str;

  // counts every occurrence of pattern in text, overlapping ones included
  // returns (0, 0) when the pattern is empty, the text is empty or the pattern is longer than the text
  fn search(&self, text: &[u8], pattern: &[u8]) -> SearchOutcome;
}


#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
  BruteForce,
  MorrisPratt,
  KnuthMorrisPratt,
  KarpRabin,
  BoyerMoore,
  BoyerMooreOptimized,
}

impl Algorithm {
  pub const ALL: [Algorithm; 6] = [
    Algorithm::BruteForce,
    Algorithm::MorrisPratt,
    Algorithm::KnuthMorrisPratt,
    Algorithm::KarpRabin,
    Algorithm::BoyerMoore,
    Algorithm::BoyerMooreOptimized,
  ];

  pub const fn as_str(self) -> &'static str {
    match self {
      Algorithm::BruteForce => "brute-force",
      Algorithm::MorrisPratt => "morris-pratt",
      Algorithm::KnuthMorrisPratt => "knuth-morris-pratt",
      Algorithm::KarpRabin => "karp-rabin",
      Algorithm::BoyerMoore => "boyer-moore",
      Algorithm::BoyerMooreOptimized => "boyer-moore-optimized",
    }
  }

  /// Runs the default configuration of the engine.
  pub fn search(self, text: &[u8], pattern: &[u8]) -> SearchOutcome {
    match self {
      Algorithm::BruteForce => BruteForce.search(text, pattern),
      Algorithm::MorrisPratt => MorrisPratt.search(text, pattern),
      Algorithm::KnuthMorrisPratt => KnuthMorrisPratt.search(text, pattern),
      Algorithm::KarpRabin => KarpRabin::default().search(text, pattern),
      Algorithm::BoyerMoore => BoyerMoore::default().search(text, pattern),
      Algorithm::BoyerMooreOptimized => BoyerMooreOptimized.search(text, pattern),
    }
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Algorithm {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
    Algorithm::ALL
      .into_iter()
      .find(|algorithm| algorithm.as_str() == wanted)
      .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
  }
}

#[cfg(test)]
mod tests {
  use proptest::prelude::*;
  use test_case::test_case;
  use super::*;

  const SENTENCE: &str = "this is a simple example text for testing";

  // expected (matches, brute force, morris-pratt/knuth-morris-pratt, karp-rabin, boyer-moore, boyer-moore optimized)
  #[test_case("THIS IS A SIMPLE EXAMPLE", "SIMPLE", 1, 26, 26, 19, 15, 14)]
  #[test_case("AAAAAAAAAAH", "AAAAH", 1, 35, 17, 7, 12, 11)]
  #[test_case("THIS IS MY NEW STRING AAAAHHHH", "NEW", 1, 31, 31, 28, 13, 12)]
  #[test_case("THIS TEST WILL HAVE MULTIPLE MATCHES, SO THAT WE CAN TEST. ONE MORE TEST.", "TEST", 3, 86, 81, 70, 36, 33)]
  #[test_case("COMPUTER SCIENCE IS NO MORE ABOUT COMPUTERS THAN ASTRONOMY IS ABOUT TELESCOPES", "NO", 2, 81, 80, 77, 47, 45)]
  #[test_case("NO COMPUTER IS EVER GOING TO ASK A NEW, REASONABLE QUESTION. IT TAKES TRAINED PEOPLE TO DO THAT.", "TRAINED", 1, 102, 104, 90, 23, 22)]
  #[test_case("WE CAN ONLY SEE A SHORT DISTANCE AHEAD, BUT WE CAN SEE PLENTY THERE THAT NEEDS TO BE DONE.", "DISTANCE", 1, 92, 93, 83, 25, 22)]
  #[test_case("QAZQAZQAZQAZZQAZZQAZZQAZZZZZZZZQQQQQQQZZZZZQAQAQAQAQAZZZQAAAAAZZZQAZZZZZZZQQQQQAAAZZZ", "QAZZZ", 3, 137, 108, 81, 63, 55)]
  #[test_case("COMPUTER SCIENCE IS THE OPERATING SYSTEM FOR ALL INNOVATION.", "NOVA", 1, 63, 64, 57, 20, 19)]
  #[test_case("WWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWKWWWWWKWWWWK", "WWWK", 3, 216, 108, 57, 63, 60)]
  #[test_case("aaaaaaabaaaaaaabaaaaaaabaaaaaaabaaaaaaabmatchhereaaaaaaab", "aaaaaaabmatch", 1, 195, 61, 45, 22, 21)]
  #[test_case("ababababababababababababababababx", "abababababababx", 1, 159, 42, 19, 25, 24)]
  #[test_case("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaab", "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaab", 1, 38, 38, 1, 39, 38)]
  #[test_case("lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod", "eiusmod", 1, 75, 75, 63, 21, 19)]
  #[test_case(SENTENCE, "example", 1, 45, 45, 35, 18, 17)]
  #[test_case(SENTENCE, "simple", 1, 43, 44, 36, 18, 17)]
  #[test_case("a quick brown fox jumps over the lazy dog", "fox", 1, 41, 41, 39, 17, 16)]
  #[test_case("aaaa", "aa", 3, 6, 4, 3, 9, 6 ; "overlapping")]
  #[test_case("abababab", "abab", 3, 14, 8, 5, 15, 12 ; "overlapping with border")]
  fn comparison_counts(text: &str, pattern: &str, matches: u64, brute: u64, prefix: u64, hashed: u64, bad_char: u64, optimized: u64) {
    let (text, pattern) = (text.as_bytes(), pattern.as_bytes());
    assert_eq!(SearchOutcome::new(matches, brute), BruteForce.search(text, pattern));
    assert_eq!(SearchOutcome::new(matches, prefix), MorrisPratt.search(text, pattern));
    assert_eq!(SearchOutcome::new(matches, prefix), KnuthMorrisPratt.search(text, pattern));
    assert_eq!(SearchOutcome::new(matches, hashed), KarpRabin::default().search(text, pattern));
    assert_eq!(SearchOutcome::new(matches, bad_char), BoyerMoore::default().search(text, pattern));
    assert_eq!(SearchOutcome::new(matches, optimized), BoyerMooreOptimized.search(text, pattern));
    assert!(optimized <= bad_char);
  }

  #[test_case("", "x" ; "empty text")]
  #[test_case("x", "" ; "empty pattern")]
  #[test_case("", "" ; "both empty")]
  #[test_case("ab", "abc" ; "pattern too long")]
  fn degenerate_inputs(text: &str, pattern: &str) {
    for algorithm in Algorithm::ALL {
      assert_eq!(SearchOutcome::default(), algorithm.search(text.as_bytes(), pattern.as_bytes()), "{algorithm}");
    }
  }

  #[test]
  fn algorithm_names() {
    for algorithm in Algorithm::ALL {
      assert_eq!(Ok(algorithm), algorithm.to_string().parse::<Algorithm>().map_err(|e| e.to_string()));
    }
    assert_eq!(Algorithm::BoyerMooreOptimized, "Boyer_Moore_Optimized".parse::<Algorithm>().unwrap());
    assert!(matches!("z-algorithm".parse::<Algorithm>(), Err(Error::UnknownAlgorithm(name)) if name == "z-algorithm"));
  }

  #[test]
  fn matcher_names() {
    let matchers: [&dyn StringMatcher; 6] = [
      &BruteForce,
      &MorrisPratt,
      &KnuthMorrisPratt,
      &KarpRabin::default(),
      &BoyerMoore::default(),
      &BoyerMooreOptimized,
    ];
    for (matcher, algorithm) in matchers.into_iter().zip(Algorithm::ALL) {
      assert_eq!(algorithm.as_str(), matcher.name());
    }
  }

  #[test]
  fn outcome_into_pair() {
    let pair: (u64, u64) = BruteForce.search(SENTENCE.as_bytes(), b"example").into();
    assert_eq!((1, 45), pair);
  }

  fn naive_count(text: &[u8], pattern: &[u8]) -> u64 {
    if pattern.is_empty() {
      return 0;
    }
    text.windows(pattern.len()).filter(|window| *window == pattern).count() as u64
  }

  proptest! {
    #[test]
    fn engines_agree(text in "[ab]{1,40}", pattern in "[ab]{1,6}") {
      let expected = naive_count(text.as_bytes(), pattern.as_bytes());
      for algorithm in Algorithm::ALL {
        prop_assert_eq!(expected, algorithm.search(text.as_bytes(), pattern.as_bytes()).matches, "{}", algorithm);
      }
    }

    #[test]
    fn engines_agree_on_wider_alphabet(text in "[ACGT]{0,64}", pattern in "[ACGT]{0,5}") {
      let expected = naive_count(text.as_bytes(), pattern.as_bytes());
      for algorithm in Algorithm::ALL {
        prop_assert_eq!(expected, algorithm.search(text.as_bytes(), pattern.as_bytes()).matches, "{}", algorithm);
      }
    }

    #[test]
    fn self_match(pattern in "[a-z ]{1,30}") {
      for algorithm in Algorithm::ALL {
        prop_assert_eq!(1, algorithm.search(pattern.as_bytes(), pattern.as_bytes()).matches, "{}", algorithm);
      }
    }
  }
}
