// true when no engine has anything to scan
// every engine checks this before computing `text.len() - pattern.len()`
pub(crate) fn is_degenerate(text: &[u8], pattern: &[u8]) -> bool {
  pattern.is_empty() || text.is_empty() || pattern.len() > text.len()
}

// computes the longest-proper-prefix-which-is-also-suffix table of the pattern
// lps[i] is the length of the longest proper prefix of pattern[0..=i] that also ends at i
// runtime: linear in pattern length
pub fn lps_table<A>(pattern: &[A]) -> Vec<usize>
where A: Eq
{
  let mut lps = vec![0; pattern.len()];
  let mut length = 0;
  let mut i = 1;

  while i < pattern.len() {
    if pattern[i] == pattern[length] {
      length += 1;
      lps[i] = length;
      i += 1;
    } else if length != 0 {
      // fall back to the next shorter border, i stays
      length = lps[length-1];
    } else {
      lps[i] = 0;
      i += 1;
    }
  }
  lps
}

// smallest shift at which the pattern can overlap itself
// returns 0 for the empty pattern
pub fn smallest_period<A>(pattern: &[A]) -> usize
where A: Eq
{
  return match lps_table(pattern).last() {
    Some(border) => pattern.len() - border,
    None => 0,
  };
}
