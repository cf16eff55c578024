//! Settings of the demo driver, read from a TOML file.
//!
//! ```toml
//! threads = 4
//!
//! [[case]]
//! text = "a quick brown fox jumps over the lazy dog"
//! patterns = ["fox", "dog"]
//!
//! [tsp]
//! matrix = [[0.0, 2.0], [1.0, 0.0]]
//! genetic = { generations = 200, population_size = 20, seed = 7 }
//! annealing = { initial_temperature = 500.0 }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::tsp::{AnnealingConfig, DistanceMatrix, GeneticConfig};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  /// size of the rayon pool, all cores when unset
  pub threads: Option<usize>,
  #[serde(rename = "case")]
  pub cases: Vec<SearchCase>,
  pub tsp: Option<TspConfig>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchCase {
  pub text: String,
  pub patterns: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TspConfig {
  pub matrix: DistanceMatrix,
  #[serde(default)]
  pub genetic: GeneticConfig,
  #[serde(default)]
  pub annealing: AnnealingConfig,
}

impl TspConfig {
  /// Four cities with a shortest round trip of 80.
  pub fn sample() -> Result<Self> {
    let matrix = DistanceMatrix::new(vec![
      vec![0.0, 10.0, 15.0, 20.0],
      vec![10.0, 0.0, 35.0, 25.0],
      vec![15.0, 35.0, 0.0, 30.0],
      vec![20.0, 25.0, 30.0, 0.0],
    ])?;
    Ok(Self { matrix, genetic: GeneticConfig::default(), annealing: AnnealingConfig::default() })
  }
}

impl Config {
  pub fn parse(source: &str) -> Result<Self> {
    Ok(toml::from_str(source)?)
  }

  pub fn read(path: &Path) -> Result<Self> {
    let source = fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    let config = Self::parse(&source)?;
    info!(path = %path.display(), cases = config.cases.len(), "configuration loaded");
    Ok(config)
  }

  /// Demo cases used when no configuration file is given.
  pub fn builtin() -> Result<Self> {
    let case = |text: &str, patterns: &[&str]| SearchCase {
      text: text.to_string(),
      patterns: patterns.iter().map(|p| p.to_string()).collect(),
    };

    Ok(Self {
      threads: None,
      cases: vec![
        case("this is a simple example text for testing", &["example", "simple", "test"]),
        case("a quick brown fox jumps over the lazy dog", &["fox", "the", "cat"]),
        case("THIS TEST WILL HAVE MULTIPLE MATCHES, SO THAT WE CAN TEST. ONE MORE TEST.", &["TEST", "MORE"]),
        case("WWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWWKWWWWWKWWWWK", &["WWWK", "WK"]),
        case("ababababababababababababababababx", &["abababababababx", "abab"]),
      ],
      tsp: Some(TspConfig::sample()?),
    })
  }

  /// Reads `path` when given, the built-in demo otherwise.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    match path {
      Some(path) => Self::read(path),
      None => Self::builtin(),
    }
  }
}
