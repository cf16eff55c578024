//! Runs many independent searches over one text on the rayon pool.

use itertools::Itertools;
use rayon::prelude::*;
use tracing::debug;

use crate::*;

/// One finished search, tagged with what it searched for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchResult {
  pub algorithm: Algorithm,
  /// index into the `patterns` given to [`search_batch`]
  pub pattern: usize,
  pub outcome: SearchOutcome,
}

// one task per (algorithm, pattern) pair, all tasks run to completion before the results are returned
// results are ordered by algorithm, then by pattern index
pub fn search_batch<P>(text: &[u8], patterns: &[P], algorithms: &[Algorithm]) -> Vec<BatchResult>
where P: AsRef<[u8]> + Sync
{
  let jobs = algorithms
    .iter()
    .copied()
    .cartesian_product(0..patterns.len())
    .collect::<Vec<_>>();

  debug!(jobs = jobs.len(), text_len = text.len(), "dispatching searches");

  jobs
    .into_par_iter()
    .map(|(algorithm, pattern)| BatchResult {
      algorithm,
      pattern,
      outcome: algorithm.search(text, patterns[pattern].as_ref()),
    })
    .collect()
}
