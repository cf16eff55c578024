use itertools::Itertools;
use rayon::prelude::*;
use tracing::debug;

use super::*;

// every ordering of the cities 1..n behind the fixed start city 0
fn candidate_orders(cities: usize) -> impl Iterator<Item = Vec<usize>> {
  (1..cities)
    .permutations(cities - 1)
    .map(|rest| std::iter::once(0).chain(rest).collect())
}

// exact, evaluates all (n-1)! tours starting in city 0
// runtime O(n!)
pub fn solve_brute_force(matrix: &DistanceMatrix) -> Tour {
  if matrix.is_empty() {
    return Tour::empty();
  }

  let best = candidate_orders(matrix.len())
    .map(|order| Tour::closed(order, matrix))
    .reduce(Tour::shorter);

  debug!(cities = matrix.len(), "evaluated all tours");
  best.unwrap_or_else(Tour::empty)
}

// same enumeration, tours are measured on the rayon pool and reduced to the shortest
// which of several equally short tours is returned is not specified
pub fn solve_brute_force_concurrent(matrix: &DistanceMatrix) -> Tour {
  if matrix.is_empty() {
    return Tour::empty();
  }

  let best = candidate_orders(matrix.len())
    .par_bridge()
    .map(|order| Tour::closed(order, matrix))
    .reduce_with(Tour::shorter);

  debug!(cities = matrix.len(), "evaluated all tours concurrently");
  best.unwrap_or_else(Tour::empty)
}
