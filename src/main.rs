//! Command line driver: runs the matching engines and the TSP solvers on demo or configured inputs.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use string_matching::batch::search_batch;
use string_matching::config::{Config, TspConfig};
use string_matching::tsp::Solver;
use string_matching::{Algorithm, Error, Result};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
  /// Worker threads of the rayon pool, all cores by default
  #[arg(short, long, global = true)]
  threads: Option<usize>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Count a pattern in a text with every selected engine
  Search {
    #[arg(long)]
    text: String,

    #[arg(long)]
    pattern: String,

    /// Engine to run, may be repeated, all engines when absent
    #[arg(short, long = "algorithm")]
    algorithms: Vec<Algorithm>,
  },

  /// Run every configured case through every engine
  Suite {
    /// TOML file with the cases, built-in demo cases when absent
    #[arg(short, long)]
    config: Option<PathBuf>,
  },

  /// Solve the configured distance matrix
  Tsp {
    /// TOML file with the matrix, the built-in 4 city sample when absent
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Solver to run, may be repeated, all solvers when absent
    #[arg(short, long = "solver")]
    solvers: Vec<Solver>,
  },
}

fn init_logging() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();
}

fn all_if_empty<T: Copy>(selected: Vec<T>, all: &[T]) -> Vec<T> {
  if selected.is_empty() { all.to_vec() } else { selected }
}

fn run_search(text: &str, pattern: &str, algorithms: Vec<Algorithm>) {
  println!("{:<24}{:>10}{:>14}", "algorithm", "matches", "comparisons");
  for algorithm in all_if_empty(algorithms, &Algorithm::ALL) {
    let outcome = algorithm.search(text.as_bytes(), pattern.as_bytes());
    println!("{:<24}{:>10}{:>14}", algorithm, outcome.matches, outcome.comparisons);
  }
}

fn run_suite(config: &Config) {
  for case in &config.cases {
    let started = Instant::now();
    let results = search_batch(case.text.as_bytes(), &case.patterns, &Algorithm::ALL);
    info!(text_len = case.text.len(), patterns = case.patterns.len(), elapsed = ?started.elapsed(), "case finished");

    println!("text: {}", case.text);
    println!("{:<24}{:<20}{:>10}{:>14}", "algorithm", "pattern", "matches", "comparisons");
    for result in results {
      let pattern = &case.patterns[result.pattern];
      println!("{:<24}{:<20}{:>10}{:>14}", result.algorithm, pattern, result.outcome.matches, result.outcome.comparisons);
    }
    println!();
  }
}

fn run_tsp(tsp: &TspConfig, solvers: Vec<Solver>) -> Result<()> {
  for solver in all_if_empty(solvers, &Solver::ALL) {
    let started = Instant::now();
    let tour = solver.solve(&tsp.matrix, &tsp.genetic, &tsp.annealing)?;
    info!(%solver, elapsed = ?started.elapsed(), "solver finished");
    println!("{:<28}{}", solver, tour);
  }
  Ok(())
}

fn run(args: Args) -> Result<()> {
  let config = match &args.command {
    Command::Suite { config } | Command::Tsp { config, .. } => Config::load(config.as_deref())?,
    Command::Search { .. } => Config::default(),
  };

  let mut pool = rayon::ThreadPoolBuilder::new();
  if let Some(threads) = args.threads.or(config.threads) {
    pool = pool.num_threads(threads);
  }
  let pool = pool.build()?;

  pool.install(|| match args.command {
    Command::Search { text, pattern, algorithms } => {
      run_search(&text, &pattern, algorithms);
      Ok(())
    }
    Command::Suite { .. } => {
      run_suite(&config);
      Ok(())
    }
    Command::Tsp { solvers, .. } => {
      let tsp = match config.tsp {
        Some(tsp) => tsp,
        None => TspConfig::sample()?,
      };
      run_tsp(&tsp, solvers)
    }
  })
}

fn main() -> ExitCode {
  init_logging();
  let args = Args::parse();

  match run(args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err @ (Error::Io { .. } | Error::Config(_))) => {
      error!("{err}");
      ExitCode::from(2)
    }
    Err(err) => {
      error!("{err}");
      ExitCode::FAILURE
    }
  }
}
