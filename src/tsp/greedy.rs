use rayon::prelude::*;
use tracing::trace;

use super::*;

// nearest neighbor tour from `start`: always go to the closest unvisited city, then return
// ties go to the lower city index
// runtime O(n^2)
pub fn nearest_neighbor_from(matrix: &DistanceMatrix, start: usize) -> Tour {
  let cities = matrix.len();
  if start >= cities {
    return Tour::empty();
  }

  let mut visited = vec![false; cities];
  let mut order = Vec::with_capacity(cities + 1);
  visited[start] = true;
  order.push(start);
  let mut current = start;

  while order.len() < cities {
    let next = (0..cities)
      .filter(|&city| !visited[city])
      .min_by(|&a, &b| matrix.distance(current, a).total_cmp(&matrix.distance(current, b)));
    let Some(next) = next else { break };

    visited[next] = true;
    order.push(next);
    current = next;
  }

  trace!(start, "nearest neighbor tour built");
  Tour::closed(order, matrix)
}

pub fn solve_nearest_neighbor(matrix: &DistanceMatrix) -> Tour {
  nearest_neighbor_from(matrix, 0)
}

// one greedy tour per start city on the rayon pool, the shortest wins
pub fn solve_nearest_neighbor_concurrent(matrix: &DistanceMatrix) -> Tour {
  (0..matrix.len())
    .into_par_iter()
    .map(|start| nearest_neighbor_from(matrix, start))
    .reduce_with(Tour::shorter)
    .unwrap_or_else(Tour::empty)
}
