use rand::prelude::*;
use tracing::debug;

use super::*;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnnealingConfig {
  /// must be positive
  pub initial_temperature: f64,
  /// temperature factor per iteration, in (0, 1]
  pub cooling_rate: f64,
  pub max_iterations: usize,
  pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
  fn default() -> Self {
    Self { initial_temperature: 1000.0, cooling_rate: 0.995, max_iterations: 1000, seed: None }
  }
}

impl AnnealingConfig {
  fn validate(&self) -> Result<(), TspError> {
    if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
      return Err(TspError::InvalidParameter("initial temperature must be positive"));
    }
    if !(self.cooling_rate > 0.0 && self.cooling_rate <= 1.0) {
      return Err(TspError::InvalidParameter("cooling rate must be in (0, 1]"));
    }
    Ok(())
  }
}

// random walk over visiting orders: a move swaps two random cities, shorter orders are always taken,
// longer ones with probability exp(-increase / temperature)
// returns the shortest order seen
pub fn solve_annealing(matrix: &DistanceMatrix, config: &AnnealingConfig) -> Result<Tour, TspError> {
  config.validate()?;
  if matrix.is_empty() {
    return Ok(Tour::empty());
  }

  let mut rng = seeded_rng(config.seed);
  let mut current = random_order(matrix.len(), &mut rng);
  let mut current_length = matrix.cycle_length(&current);
  let mut best = current.clone();
  let mut best_length = current_length;
  let mut temperature = config.initial_temperature;
  let mut accepted = 0;

  for _ in 0..config.max_iterations {
    let mut candidate = current.clone();
    let i = rng.gen_range(0..candidate.len());
    let j = rng.gen_range(0..candidate.len());
    candidate.swap(i, j);
    let candidate_length = matrix.cycle_length(&candidate);

    if candidate_length < current_length || rng.r#gen::<f64>() < ((current_length - candidate_length) / temperature).exp() {
      accepted += 1;
      current = candidate;
      current_length = candidate_length;
      if current_length < best_length {
        best.clone_from(&current);
        best_length = current_length;
      }
    }
    temperature *= config.cooling_rate;
  }

  debug!(iterations = config.max_iterations, accepted, length = best_length, "annealing finished");
  Ok(Tour::closed_from_first_city(best, matrix))
}
