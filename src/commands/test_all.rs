//! Test all codes - comprehensive solver evaluation
//!
//! Runs the solver against every possible secret and generates statistics.

use super::solve::run_to_completion;
use crate::core::Code;
use crate::solver::{GameConfig, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct CodeTestResult {
    pub secret: String,
    pub guesses: Vec<String>,
    pub num_guesses: usize,
    pub success: bool,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    /// Hardest secrets with the guesses played for each
    pub worst_codes: Vec<(String, Vec<String>)>,
}

fn test_one(template: &Solver, secret: &Code) -> CodeTestResult {
    let mut solver = template.clone();
    let (success, steps) = run_to_completion(&mut solver, secret, None);

    CodeTestResult {
        secret: secret.to_string(),
        num_guesses: steps.len(),
        guesses: steps.into_iter().map(|step| step.code).collect(),
        success,
    }
}

/// Run the solver on every code of the game (or the first `limit` codes)
///
/// Secrets are solved in parallel; results keep generation order.
///
/// # Errors
///
/// Returns an error if the game parameters are invalid.
pub fn run_test_all(
    game: &GameConfig,
    limit: Option<usize>,
) -> Result<TestAllStatistics, String> {
    let template = Solver::from_config(game).map_err(|e| format!("Invalid game: {e}"))?;
    let secrets: Vec<&Code> = template
        .candidates()
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    info!(target: "test_all", "testing {} secrets ({game})", secrets.len());

    let pb = ProgressBar::new(secrets.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let total_start = Instant::now();

    let results: Vec<CodeTestResult> = secrets
        .par_iter()
        .map(|secret| {
            let result = test_one(&template, secret);
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    Ok(summarize(&results, total_start.elapsed()))
}

/// Aggregate per-secret results into statistics
#[must_use]
pub fn summarize(results: &[CodeTestResult], total_time: Duration) -> TestAllStatistics {
    let solved: Vec<&CodeTestResult> = results.iter().filter(|r| r.success).collect();
    let solved_count = solved.len();

    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    for r in &solved {
        *guess_distribution.entry(r.num_guesses).or_insert(0) += 1;
    }

    let total_guesses: usize = solved.iter().map(|r| r.num_guesses).sum();
    let average_guesses = if solved_count > 0 {
        total_guesses as f64 / solved_count as f64
    } else {
        0.0
    };

    let max_guesses = solved.iter().map(|r| r.num_guesses).max().unwrap_or(0);
    let min_guesses = solved.iter().map(|r| r.num_guesses).min().unwrap_or(0);

    let mut worst_codes: Vec<(String, Vec<String>)> = solved
        .iter()
        .filter(|r| r.num_guesses == max_guesses)
        .map(|r| (r.secret.clone(), r.guesses.clone()))
        .collect();
    worst_codes.truncate(10);

    TestAllStatistics {
        total_codes: results.len(),
        solved: solved_count,
        failed: results.len() - solved_count,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        worst_codes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_solves_every_code() {
        let game = GameConfig::new("RGBY", 4, false);
        let stats = run_test_all(&game, None).unwrap();

        assert_eq!(stats.total_codes, 24);
        assert_eq!(stats.solved, 24);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.min_guesses, 1);
        assert!(stats.max_guesses >= 2);

        let distribution_sum: usize = stats.guess_distribution.values().sum();
        assert_eq!(distribution_sum, 24);
    }

    #[test]
    fn test_all_respects_limit() {
        let game = GameConfig::new("RGBYOP", 4, true);
        let stats = run_test_all(&game, Some(5)).unwrap();
        assert_eq!(stats.total_codes, 5);
        assert_eq!(stats.solved, 5);
    }

    #[test]
    fn worst_codes_use_max_guesses() {
        let game = GameConfig::new("ABC", 3, true);
        let stats = run_test_all(&game, None).unwrap();

        assert!(!stats.worst_codes.is_empty());
        for (secret, guesses) in &stats.worst_codes {
            assert_eq!(guesses.len(), stats.max_guesses);
            assert_eq!(guesses.last(), Some(secret));
        }
    }

    #[test]
    fn summarize_counts_failures() {
        let results = vec![
            CodeTestResult {
                secret: "AB".to_string(),
                guesses: vec!["AB".to_string()],
                num_guesses: 1,
                success: true,
            },
            CodeTestResult {
                secret: "BA".to_string(),
                guesses: vec!["AB".to_string(), "AA".to_string()],
                num_guesses: 2,
                success: false,
            },
        ];

        let stats = summarize(&results, Duration::from_millis(5));
        assert_eq!(stats.solved, 1);
        assert_eq!(stats.failed, 1);
        assert!((stats.average_guesses - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_all_invalid_game() {
        assert!(run_test_all(&GameConfig::new("RGBY", 0, false), None).is_err());
    }
}
