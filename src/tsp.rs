//! Traveling Salesman solvers over a dense distance matrix.
//!
//! Every solver returns a closed [`Tour`]: the route starts and ends in the same city and the
//! distance includes the edge back to it. An empty matrix yields an empty route of distance 0.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use rand::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use serde::Deserialize;

mod exact;
mod greedy;
mod genetic;
mod annealing;

pub use exact::{solve_brute_force, solve_brute_force_concurrent};
pub use greedy::{nearest_neighbor_from, solve_nearest_neighbor, solve_nearest_neighbor_concurrent};
pub use genetic::{GeneticConfig, solve_genetic};
pub use annealing::{AnnealingConfig, solve_annealing};

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum TspError {
  #[error("row {row} has {len} entries, expected {expected}")]
  NotSquare { row: usize, len: usize, expected: usize },

  #[error("distance from {from} to {to} is {value}, distances must be finite and non-negative")]
  InvalidDistance { from: usize, to: usize, value: f64 },

  #[error("invalid solver parameter: {0}")]
  InvalidParameter(&'static str),
}

/// Square matrix of finite, non-negative distances; `distance(a, b)` need not equal `distance(b, a)`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>")]
pub struct DistanceMatrix {
  cities: usize,
  weights: Vec<f64>,
}

impl DistanceMatrix {
  pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, TspError> {
    let cities = rows.len();
    let mut weights = Vec::with_capacity(cities * cities);

    for (from, row) in rows.into_iter().enumerate() {
      if row.len() != cities {
        return Err(TspError::NotSquare { row: from, len: row.len(), expected: cities });
      }
      for (to, value) in row.into_iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
          return Err(TspError::InvalidDistance { from, to, value });
        }
        weights.push(value);
      }
    }
    Ok(Self { cities, weights })
  }

  pub fn len(&self) -> usize {
    self.cities
  }

  pub fn is_empty(&self) -> bool {
    self.cities == 0
  }

  // panics on cities outside the matrix
  pub fn distance(&self, from: usize, to: usize) -> f64 {
    self.weights[from * self.cities + to]
  }

  // sum of the edges between consecutive cities of the route
  pub fn route_length(&self, route: &[usize]) -> f64 {
    route.windows(2).map(|edge| self.distance(edge[0], edge[1])).sum()
  }

  // length of the cycle visiting `order` and returning to its first city
  pub(crate) fn cycle_length(&self, order: &[usize]) -> f64 {
    match (order.first(), order.last()) {
      (Some(&first), Some(&last)) => self.route_length(order) + self.distance(last, first),
      _ => 0.0,
    }
  }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
  type Error = TspError;

  fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, TspError> {
    Self::new(rows)
  }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
  pub route: Vec<usize>,
  pub distance: f64,
}

impl Tour {
  pub fn empty() -> Self {
    Self { route: vec![], distance: 0.0 }
  }

  // closes the cycle given by `order`
  pub(crate) fn closed(order: Vec<usize>, matrix: &DistanceMatrix) -> Self {
    let distance = matrix.cycle_length(&order);
    let mut route = order;
    if let Some(&first) = route.first() {
      route.push(first);
    }
    Self { route, distance }
  }

  // closes the cycle given by `order` after rotating it to begin in city 0
  pub(crate) fn closed_from_first_city(mut order: Vec<usize>, matrix: &DistanceMatrix) -> Self {
    if let Some(position) = order.iter().position(|&city| city == 0) {
      order.rotate_left(position);
    }
    Self::closed(order, matrix)
  }

  // the shorter of two tours, the first one on ties
  pub(crate) fn shorter(self, other: Self) -> Self {
    if other.distance < self.distance { other } else { self }
  }
}

impl fmt::Display for Tour {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} (cost {:.2})", self.route.iter().join(" -> "), self.distance)
  }
}

// deterministic when seeded, from entropy otherwise
pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
  match seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  }
}

// a uniformly shuffled visiting order of all cities
pub(crate) fn random_order(cities: usize, rng: &mut StdRng) -> Vec<usize> {
  let mut order = (0..cities).collect::<Vec<_>>();
  order.shuffle(rng);
  order
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Solver {
  BruteForce,
  ConcurrentBruteForce,
  NearestNeighbor,
  ConcurrentNearestNeighbor,
  Genetic,
  Annealing,
}

impl Solver {
  pub const ALL: [Solver; 6] = [
    Solver::BruteForce,
    Solver::ConcurrentBruteForce,
    Solver::NearestNeighbor,
    Solver::ConcurrentNearestNeighbor,
    Solver::Genetic,
    Solver::Annealing,
  ];

  pub const fn as_str(self) -> &'static str {
    match self {
      Solver::BruteForce => "brute-force",
      Solver::ConcurrentBruteForce => "concurrent-brute-force",
      Solver::NearestNeighbor => "nearest-neighbor",
      Solver::ConcurrentNearestNeighbor => "concurrent-nearest-neighbor",
      Solver::Genetic => "genetic",
      Solver::Annealing => "annealing",
    }
  }

  pub fn solve(self, matrix: &DistanceMatrix, genetic: &GeneticConfig, annealing: &AnnealingConfig) -> Result<Tour, TspError> {
    return match self {
      Solver::BruteForce => Ok(solve_brute_force(matrix)),
      Solver::ConcurrentBruteForce => Ok(solve_brute_force_concurrent(matrix)),
      Solver::NearestNeighbor => Ok(solve_nearest_neighbor(matrix)),
      Solver::ConcurrentNearestNeighbor => Ok(solve_nearest_neighbor_concurrent(matrix)),
      Solver::Genetic => solve_genetic(matrix, genetic),
      Solver::Annealing => solve_annealing(matrix, annealing),
    };
  }
}

impl fmt::Display for Solver {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Solver {
  type Err = crate::Error;

  fn from_str(s: &str) -> crate::Result<Self> {
    let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
    Solver::ALL
      .into_iter()
      .find(|solver| solver.as_str() == wanted)
      .ok_or_else(|| crate::Error::UnknownSolver(s.to_string()))
  }
}

#[cfg(test)]
pub(crate) mod tests {
  use super::*;
  use test_case::test_case;

  pub(crate) fn sample() -> DistanceMatrix {
    DistanceMatrix::new(vec![
      vec![0.0, 10.0, 15.0, 20.0],
      vec![10.0, 0.0, 35.0, 25.0],
      vec![15.0, 35.0, 0.0, 30.0],
      vec![20.0, 25.0, 30.0, 0.0],
    ]).unwrap()
  }

  pub(crate) fn asymmetric() -> DistanceMatrix {
    DistanceMatrix::new(vec![
      vec![0.0, 2.0, 9.0, 10.0],
      vec![1.0, 0.0, 6.0, 4.0],
      vec![15.0, 7.0, 0.0, 8.0],
      vec![6.0, 3.0, 12.0, 0.0],
    ]).unwrap()
  }

  // closed, starts and ends in the same city, visits every city exactly once
  pub(crate) fn assert_valid_tour(tour: &Tour, matrix: &DistanceMatrix) {
    assert_eq!(matrix.len() + 1, tour.route.len());
    assert_eq!(tour.route.first(), tour.route.last());
    let mut visited = tour.route[..matrix.len()].to_vec();
    visited.sort();
    assert_eq!((0..matrix.len()).collect::<Vec<_>>(), visited);
    assert!((matrix.route_length(&tour.route) - tour.distance).abs() < 1e-9);
  }

  #[test]
  fn rejects_ragged_rows() {
    let err = DistanceMatrix::new(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
    assert_eq!(TspError::NotSquare { row: 1, len: 1, expected: 2 }, err);
  }

  #[test_case(-1.0 ; "negative")]
  #[test_case(f64::NAN ; "not a number")]
  #[test_case(f64::INFINITY ; "infinite")]
  fn rejects_bad_distances(value: f64) {
    let err = DistanceMatrix::new(vec![vec![0.0, value], vec![1.0, 0.0]]).unwrap_err();
    assert!(matches!(err, TspError::InvalidDistance { from: 0, to: 1, .. }));
  }

  #[test]
  fn route_and_cycle_length() {
    let matrix = sample();
    assert_eq!(80.0, matrix.route_length(&[0, 1, 3, 2, 0]));
    assert_eq!(80.0, matrix.cycle_length(&[0, 1, 3, 2]));
    assert_eq!(0.0, matrix.cycle_length(&[]));
  }

  #[test]
  fn deserializes_from_rows() {
    let matrix: DistanceMatrix = toml::from_str::<std::collections::HashMap<String, DistanceMatrix>>("m = [[0.0, 1.0], [2.0, 0.0]]")
      .unwrap()
      .remove("m")
      .unwrap();
    assert_eq!(2.0, matrix.distance(1, 0));
    assert!(toml::from_str::<std::collections::HashMap<String, DistanceMatrix>>("m = [[0.0, 1.0]]").is_err());
  }

  #[test]
  fn displays_route() {
    let tour = Tour::closed(vec![0, 1, 3, 2], &sample());
    assert_eq!("0 -> 1 -> 3 -> 2 -> 0 (cost 80.00)", tour.to_string());
  }

  #[test]
  fn every_solver_on_the_sample() {
    let matrix = sample();
    for solver in Solver::ALL {
      let genetic = GeneticConfig { seed: Some(7), ..GeneticConfig::default() };
      let annealing = AnnealingConfig { seed: Some(7), ..AnnealingConfig::default() };
      let tour = solver.solve(&matrix, &genetic, &annealing).unwrap();
      assert_valid_tour(&tour, &matrix);
      assert!(tour.distance >= 80.0, "{solver}");
      assert_eq!(Ok(solver), solver.to_string().parse::<Solver>().map_err(|e| e.to_string()));
    }
  }

  #[test]
  fn every_solver_on_an_empty_matrix() {
    let matrix = DistanceMatrix::new(vec![]).unwrap();
    for solver in Solver::ALL {
      let tour = solver.solve(&matrix, &GeneticConfig::default(), &AnnealingConfig::default()).unwrap();
      assert_eq!(Tour::empty(), tour, "{solver}");
    }
  }
}
