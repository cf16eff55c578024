const ALPHABET_SIZE: usize = 256;

/// Last occurrence of every byte value in the pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadCharTable {
  last: [Option<usize>; ALPHABET_SIZE],
}

impl BadCharTable {
  pub fn new(pattern: &[u8]) -> Self {
    let mut last = [None; ALPHABET_SIZE];
    // later occurrences overwrite earlier ones
    for (i, &byte) in pattern.iter().enumerate() {
      last[byte as usize] = Some(i);
    }
    Self { last }
  }

  /// `None` when the byte does not occur in the pattern at all.
  pub fn last_occurrence(&self, byte: u8) -> Option<usize> {
    self.last[byte as usize]
  }
}

// shift table for the strong good suffix rule, indexed by (mismatch position + 1)
// entry 0 is the shift after a full match
// runtime: linear in pattern length
pub fn good_suffix_table(pattern: &[u8]) -> Vec<usize> {
  let m = pattern.len();
  if m == 0 {
    return vec![0];
  }

  let mut shift = vec![0; m + 1];
  // border[i]: start of the widest border of pattern[i..]
  let mut border = vec![0; m + 1];

  let mut i = m;
  let mut j = m + 1;
  border[i] = j;

  // first pass: borders of every suffix
  while i > 0 {
    while j <= m && pattern[i-1] != pattern[j-1] {
      // first write wins
      if shift[j] == 0 {
        shift[j] = j - i;
      }
      j = border[j];
    }
    i -= 1;
    j -= 1;
    border[i] = j;
  }

  // second pass: remaining slots use the widest border of the whole pattern
  j = border[0];
  for i in 0..=m {
    if shift[i] == 0 {
      shift[i] = j;
    }
    if i == j {
      j = border[j];
    }
  }

  shift
}
