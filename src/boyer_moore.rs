//! Boyer-Moore search, with the bad character rule alone and with the bad character and good suffix
//! rules combined.
//!
//! Both engines align the pattern against a window of the text and compare right to left.

use std::cmp::max;

use crate::common::{is_degenerate, smallest_period};
use crate::*;

mod tables;
pub use tables::{BadCharTable, good_suffix_table};

/// Index assumed for a mismatched text byte that does not occur in the pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AbsentChar {
  /// index -1: the pattern moves past the mismatch position entirely
  #[default]
  BeforePattern,
  /// index 0: the pattern start moves up to the mismatch position.
  /// Shifts one less than needed; paired with [`MatchShift::PatternLength`] it gives the classic textbook counts.
  AtPatternStart,
}

/// Shift after a full match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MatchShift {
  /// smallest period of the pattern, overlapping occurrences are found
  #[default]
  Period,
  /// the whole pattern length, occurrences that overlap a previous one are skipped
  PatternLength,
}

/// Boyer-Moore with the bad character rule only.
///
/// Counts one comparison when a window is opened and one per matched byte.
/// On a mismatch at pattern index `j` the window moves by `max(1, j - last(c))`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoyerMoore {
  pub absent: AbsentChar,
  pub after_match: MatchShift,
}

/// Boyer-Moore with the bad character and the strong good suffix rule.
///
/// Counts one comparison per matched byte and one per mismatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoyerMooreOptimized;

// shift proposed by the bad character rule for a mismatch of text byte `byte` at pattern index `mismatch`
// not clamped, can be 0 when the last occurrence lies right of the mismatch
fn bad_char_shift(table: &BadCharTable, byte: u8, mismatch: usize, absent: AbsentChar) -> usize {
  return match (table.last_occurrence(byte), absent) {
    (Some(last), _) => mismatch.saturating_sub(last),
    (None, AbsentChar::BeforePattern) => mismatch + 1,
    (None, AbsentChar::AtPatternStart) => mismatch,
  };
}

// returns the number of pattern bytes left unmatched in front of the mismatch,
// 0 means the window matches
// calls `on_match` for every byte pair that compares equal
fn unmatched_prefix(window: &[u8], pattern: &[u8], mut on_match: impl FnMut()) -> usize {
  let mut j = pattern.len();
  while j > 0 && window[j-1] == pattern[j-1] {
    on_match();
    j -= 1;
  }
  j
}

impl BoyerMoore {
  pub const fn new(absent: AbsentChar, after_match: MatchShift) -> Self {
    Self { absent, after_match }
  }
}

impl StringMatcher for BoyerMoore {
  fn name(&self) -> &'static str {
    Algorithm::BoyerMoore.as_str()
  }

  fn search(&self, text: &[u8], pattern: &[u8]) -> SearchOutcome {
    if is_degenerate(text, pattern) {
      return SearchOutcome::default();
    }

    let m = pattern.len();
    let bad_char = BadCharTable::new(pattern);
    let match_shift = match self.after_match {
      MatchShift::Period => smallest_period(pattern),
      MatchShift::PatternLength => m,
    };

    let mut outcome = SearchOutcome::default();
    let mut shift = 0;
    while shift <= text.len() - m {
      outcome.comparisons += 1;
      let unmatched = unmatched_prefix(&text[shift..shift + m], pattern, || outcome.comparisons += 1);

      if unmatched == 0 {
        outcome.matches += 1;
        shift += match_shift;
      } else {
        let mismatch = unmatched - 1;
        shift += max(1, bad_char_shift(&bad_char, text[shift + mismatch], mismatch, self.absent));
      }
    }
    outcome
  }
}

impl StringMatcher for BoyerMooreOptimized {
  fn name(&self) -> &'static str {
    Algorithm::BoyerMooreOptimized.as_str()
  }

  fn search(&self, text: &[u8], pattern: &[u8]) -> SearchOutcome {
    if is_degenerate(text, pattern) {
      return SearchOutcome::default();
    }

    let m = pattern.len();
    let bad_char = BadCharTable::new(pattern);
    let good_suffix = good_suffix_table(pattern);

    let mut outcome = SearchOutcome::default();
    let mut shift = 0;
    while shift <= text.len() - m {
      let unmatched = unmatched_prefix(&text[shift..shift + m], pattern, || outcome.comparisons += 1);

      if unmatched == 0 {
        outcome.matches += 1;
        shift += good_suffix[0];
      } else {
        outcome.comparisons += 1;
        let mismatch = unmatched - 1;
        let by_bad_char = bad_char_shift(&bad_char, text[shift + mismatch], mismatch, AbsentChar::BeforePattern);
        shift += max(1, max(by_bad_char, good_suffix[mismatch + 1]));
      }
    }
    outcome
  }
}

#[cfg(test)]
mod tests {
  use test_case::test_case;
  use super::*;

  const SENTENCE: &[u8] = b"this is a simple example text for testing";

  #[test_case(AbsentChar::BeforePattern, MatchShift::Period, 18)]
  #[test_case(AbsentChar::BeforePattern, MatchShift::PatternLength, 18)]
  #[test_case(AbsentChar::AtPatternStart, MatchShift::Period, 22)]
  #[test_case(AbsentChar::AtPatternStart, MatchShift::PatternLength, 20 ; "textbook conventions")]
  fn conventions(absent: AbsentChar, after_match: MatchShift, comparisons: u64) {
    let outcome = BoyerMoore::new(absent, after_match).search(SENTENCE, b"example");
    assert_eq!(SearchOutcome::new(1, comparisons), outcome);
  }

  // counts taken with a zero index for absent bytes and a full pattern length shift after a match
  #[test_case("this is a simple example text for testing", "simple", 1, 20)]
  #[test_case("a quick brown fox jumps over the lazy dog", "fox", 1, 24)]
  #[test_case("THIS IS A SIMPLE EXAMPLE", "SIMPLE", 1, 16)]
  #[test_case("THIS TEST WILL HAVE MULTIPLE MATCHES, SO THAT WE CAN TEST. ONE MORE TEST.", "TEST", 3, 42)]
  #[test_case("COMPUTER SCIENCE IS NO MORE ABOUT COMPUTERS THAN ASTRONOMY IS ABOUT TELESCOPES", "NO", 2, 86)]
  #[test_case("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaab", "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaab", 1, 39)]
  fn textbook_counts(text: &str, pattern: &str, matches: u64, comparisons: u64) {
    let textbook = BoyerMoore::new(AbsentChar::AtPatternStart, MatchShift::PatternLength);
    assert_eq!(SearchOutcome::new(matches, comparisons), textbook.search(text.as_bytes(), pattern.as_bytes()));
  }

  #[test]
  fn pattern_length_shift_skips_overlaps() {
    let skipping = BoyerMoore::new(AbsentChar::BeforePattern, MatchShift::PatternLength);
    assert_eq!(2, skipping.search(b"aaaa", b"aa").matches);
    assert_eq!(3, BoyerMoore::default().search(b"aaaa", b"aa").matches);
    assert_eq!(3, BoyerMooreOptimized.search(b"aaaa", b"aa").matches);
  }

  #[test_case(3, 'z', 4 ; "absent byte")]
  #[test_case(3, 'a', 3 ; "first byte")]
  #[test_case(1, 'd', 0 ; "occurs right of the mismatch")]
  fn test_bad_char_shift(mismatch: usize, byte: char, expected: usize) {
    let table = BadCharTable::new(b"abcd");
    assert_eq!(expected, bad_char_shift(&table, byte as u8, mismatch, AbsentChar::BeforePattern));
  }

  #[test]
  fn absent_byte_at_pattern_start_shifts_one_less() {
    let table = BadCharTable::new(b"abcd");
    assert_eq!(3, bad_char_shift(&table, b'z', 3, AbsentChar::AtPatternStart));
  }

  #[test]
  fn skips_through_foreign_text() {
    // no byte of the text occurs in the pattern, every window is rejected after one comparison
    let text = b"zzzzzzzzzzzzzzzzzzzz";
    assert_eq!(SearchOutcome::new(0, 5), BoyerMoore::default().search(text, b"abcd"));
    assert_eq!(SearchOutcome::new(0, 5), BoyerMooreOptimized.search(text, b"abcd"));
  }
}
