//! Benchmark command
//!
//! Tests solver performance across a random sample of secret codes.

use super::solve::run_to_completion;
use crate::core::Code;
use crate::solver::{GameConfig, Solver};
use log::info;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_codes: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Pick `count` secrets uniformly at random (with replacement) from the code space
///
/// A fixed `seed` makes the sample reproducible.
#[must_use]
pub fn sample_secrets(space: &[Code], count: usize, seed: Option<u64>) -> Vec<Code> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    (0..count)
        .filter_map(|_| space.choose(&mut rng).cloned())
        .collect()
}

/// Run benchmark on a set of secret codes
///
/// # Errors
///
/// Returns an error if the game parameters are invalid.
pub fn run_benchmark(game: &GameConfig, secrets: &[Code]) -> Result<BenchmarkResult, String> {
    let template = Solver::from_config(game).map_err(|e| format!("Invalid game: {e}"))?;
    info!(target: "benchmark", "benchmarking {} secrets ({game})", secrets.len());

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for secret in secrets {
        let mut solver = template.clone();
        let (_, steps) = run_to_completion(&mut solver, secret, None);
        let guesses = steps.len();

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_codes = secrets.len();

    Ok(BenchmarkResult {
        total_codes,
        total_guesses,
        average_guesses: if total_codes > 0 {
            total_guesses as f64 / total_codes as f64
        } else {
            0.0
        },
        min_guesses: if total_codes > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        codes_per_second: total_codes as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> GameConfig {
        GameConfig::new("RGBYOP", 4, false)
    }

    #[test]
    fn benchmark_runs() {
        let space = Solver::from_config(&game()).unwrap().candidates().to_vec();
        let secrets = sample_secrets(&space, 10, Some(7));
        let result = run_benchmark(&game(), &secrets).unwrap();

        assert_eq!(result.total_codes, 10);
        assert!(result.total_guesses >= 10);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses >= result.min_guesses);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let space = Solver::from_config(&game()).unwrap().candidates().to_vec();
        let secrets = sample_secrets(&space, 20, Some(1));
        let result = run_benchmark(&game(), &secrets).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_codes);
    }

    #[test]
    fn seeded_sample_is_reproducible() {
        let space = Solver::from_config(&game()).unwrap().candidates().to_vec();
        let a = sample_secrets(&space, 15, Some(42));
        let b = sample_secrets(&space, 15, Some(42));

        assert_eq!(a, b);
        assert!(a.iter().all(|code| space.contains(code)));
    }

    #[test]
    fn sample_from_empty_space_is_empty() {
        assert!(sample_secrets(&[], 5, Some(0)).is_empty());
    }

    #[test]
    fn benchmark_empty_input() {
        let result = run_benchmark(&game(), &[]).unwrap();
        assert_eq!(result.total_codes, 0);
        assert_eq!(result.min_guesses, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_invalid_game() {
        assert!(run_benchmark(&GameConfig::new("", 4, false), &[]).is_err());
    }
}
