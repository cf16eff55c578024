use crate::common::{is_degenerate, lps_table};
use crate::*;

/// Morris-Pratt search driven by the LPS table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MorrisPratt;

/// Knuth-Morris-Pratt search.
/// Shares the scan of [`MorrisPratt`], so both report the same comparison counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KnuthMorrisPratt;

impl StringMatcher for MorrisPratt {
  fn name(&self) -> &'static str {
    Algorithm::MorrisPratt.as_str()
  }

  fn search(&self, text: &[u8], pattern: &[u8]) -> SearchOutcome {
    border_scan(text, pattern)
  }
}

impl StringMatcher for KnuthMorrisPratt {
  fn name(&self) -> &'static str {
    Algorithm::KnuthMorrisPratt.as_str()
  }

  fn search(&self, text: &[u8], pattern: &[u8]) -> SearchOutcome {
    border_scan(text, pattern)
  }
}

// single left to right pass over the text
// one comparison is counted per text/pattern character pair inspected
// after a full match the pattern index falls back to the widest border, so overlapping occurrences are counted
// runtime: O(n+m)
fn border_scan(text: &[u8], pattern: &[u8]) -> SearchOutcome {
  if is_degenerate(text, pattern) {
    return SearchOutcome::default();
  }

  let lps = lps_table(pattern);
  let mut outcome = SearchOutcome::default();

  let mut text_index = 0;
  let mut pattern_index = 0;

  while text_index < text.len() {
    outcome.comparisons += 1;
    if text[text_index] == pattern[pattern_index] {
      text_index += 1;
      pattern_index += 1;

      if pattern_index == pattern.len() {
        outcome.matches += 1;
        pattern_index = lps[pattern_index-1];
      }
    } else if pattern_index > 0 {
      pattern_index = lps[pattern_index-1];
    } else {
      text_index += 1;
    }
  }
  outcome
}
