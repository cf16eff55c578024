use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::{debug, trace};

use super::*;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
  pub generations: usize,
  /// at least 2, the better half survives every generation
  pub population_size: usize,
  pub seed: Option<u64>,
}

impl Default for GeneticConfig {
  fn default() -> Self {
    Self { generations: 100, population_size: 10, seed: None }
  }
}

// a visiting order together with the length of its closed cycle (its fitness, lower is better)
#[derive(Clone, Debug)]
struct Individual {
  order: Vec<usize>,
  length: f64,
}

impl Individual {
  fn new(order: Vec<usize>, matrix: &DistanceMatrix) -> Self {
    let length = matrix.cycle_length(&order);
    Self { order, length }
  }
}

// first half of `first`, then the missing cities in the order they appear in `second`
fn crossover(first: &[usize], second: &[usize]) -> Vec<usize> {
  let half = first.len() / 2;
  let mut used = vec![false; first.len()];
  let mut child = Vec::with_capacity(first.len());

  for &city in &first[..half] {
    used[city] = true;
    child.push(city);
  }
  child.extend(second.iter().copied().filter(|&city| !used[city]));
  child
}

// swaps two random cities, possibly the same one
fn mutate(order: &mut [usize], rng: &mut StdRng) {
  let i = rng.gen_range(0..order.len());
  let j = rng.gen_range(0..order.len());
  order.swap(i, j);
}

fn sort_by_length(population: &mut [Individual]) {
  population.sort_by(|a, b| a.length.total_cmp(&b.length));
}

// evolves random visiting orders: every generation keeps the shorter half and refills the
// population with mutated crossovers of two random survivors
pub fn solve_genetic(matrix: &DistanceMatrix, config: &GeneticConfig) -> Result<Tour, TspError> {
  if config.population_size < 2 {
    return Err(TspError::InvalidParameter("population size must be at least 2"));
  }
  if matrix.is_empty() {
    return Ok(Tour::empty());
  }

  let mut rng = seeded_rng(config.seed);
  let mut population = (0..config.population_size)
    .map(|_| Individual::new(random_order(matrix.len(), &mut rng), matrix))
    .collect::<Vec<_>>();
  let survivors = config.population_size / 2;

  for generation in 0..config.generations {
    sort_by_length(&mut population);
    population.truncate(survivors);

    while population.len() < config.population_size {
      let first = &population[rng.gen_range(0..survivors)];
      let second = &population[rng.gen_range(0..survivors)];
      let mut child = crossover(&first.order, &second.order);
      mutate(&mut child, &mut rng);
      population.push(Individual::new(child, matrix));
    }
    trace!(generation, best = population[0].length, "generation done");
  }

  sort_by_length(&mut population);
  let best = population.swap_remove(0);
  debug!(generations = config.generations, length = best.length, "genetic search finished");
  Ok(Tour::closed_from_first_city(best.order, matrix))
}
