//! Errors of the fallible surfaces: name parsing, configuration and the TSP solvers.
//! The matching engines themselves cannot fail.

use std::path::PathBuf;

use crate::tsp::TspError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("unknown algorithm: {0}")]
  UnknownAlgorithm(String),

  #[error("unknown solver: {0}")]
  UnknownSolver(String),

  #[error(transparent)]
  Tsp(#[from] TspError),

  #[error("failed to read {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid configuration: {0}")]
  Config(#[from] toml::de::Error),

  #[error("failed to build thread pool: {0}")]
  ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
