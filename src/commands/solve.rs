//! Code solving command
//!
//! Plays the solver against a known secret and returns the solution path.

use crate::core::{Code, Feedback};
use crate::solver::{GameConfig, Solver};

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub max_guesses: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_guesses: None,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: String,
    pub code_length: usize,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub code: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a secret code under the given game parameters
///
/// # Errors
///
/// Returns an error if:
/// - The game parameters are invalid
/// - The secret does not fit the game (wrong length, unknown or repeated color)
pub fn solve_code(config: SolveConfig, game: &GameConfig) -> Result<SolveResult, String> {
    let mut solver = Solver::from_config(game).map_err(|e| format!("Invalid game: {e}"))?;
    let secret = Code::from(config.secret.as_str());
    solver
        .validate_code(&secret)
        .map_err(|e| format!("Invalid secret code: {e}"))?;

    let (success, guesses) = run_to_completion(&mut solver, &secret, config.max_guesses);

    Ok(SolveResult {
        success,
        guesses,
        secret: config.secret,
        code_length: game.code_length,
    })
}

/// Feed the solver honest feedback for `secret` until it guesses it
///
/// Returns whether the secret was guessed and the steps taken.
pub(crate) fn run_to_completion(
    solver: &mut Solver,
    secret: &Code,
    max_guesses: Option<usize>,
) -> (bool, Vec<GuessStep>) {
    let mut guesses = Vec::new();
    let limit = max_guesses.unwrap_or(usize::MAX);

    while guesses.len() < limit {
        let Some(guess) = solver.next_guess().cloned() else {
            break;
        };

        let candidates_before = solver.possible_codes();
        let feedback = Feedback::calculate(secret, &guess);

        // A solved solver refuses further feedback; its guess is the answer
        if solver.is_solved() {
            guesses.push(GuessStep {
                code: guess.to_string(),
                feedback,
                candidates_before,
                candidates_after: candidates_before,
            });
            return (guess == *secret, guesses);
        }

        if solver.give(feedback).is_err() {
            break;
        }

        guesses.push(GuessStep {
            code: guess.to_string(),
            feedback,
            candidates_before,
            candidates_after: solver.possible_codes(),
        });

        if guess == *secret {
            return (true, guesses);
        }
    }

    (false, guesses)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_code_succeeds() {
        let game = GameConfig::new("RGBYOP", 4, false);
        let result = solve_code(SolveConfig::new("POYB".to_string()), &game).unwrap();

        assert!(result.success);
        let last = result.guesses.last().unwrap();
        assert_eq!(last.code, "POYB");
        assert!(last.feedback.is_perfect(4));
    }

    #[test]
    fn first_guess_hit_takes_one_step() {
        let game = GameConfig::new("RGBY", 4, false);
        let result = solve_code(SolveConfig::new("RGBY".to_string()), &game).unwrap();

        assert!(result.success);
        assert_eq!(result.guesses.len(), 1);
        assert_eq!(result.guesses[0].candidates_before, 24);
        assert_eq!(result.guesses[0].candidates_after, 1);
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let game = GameConfig::new("RGBYOP", 4, true);
        let result = solve_code(SolveConfig::new("OOGR".to_string()), &game).unwrap();

        assert!(result.success);
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let game = GameConfig::new("RGBY", 4, false);

        assert!(solve_code(SolveConfig::new("RGB".to_string()), &game).is_err());
        assert!(solve_code(SolveConfig::new("RGBX".to_string()), &game).is_err());
        assert!(solve_code(SolveConfig::new("RRGB".to_string()), &game).is_err());
    }

    #[test]
    fn solve_invalid_game_returns_error() {
        let game = GameConfig::new("RGRY", 4, false);
        assert!(solve_code(SolveConfig::new("RGBY".to_string()), &game).is_err());
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let game = GameConfig::new("RGBYOP", 4, true);
        let mut config = SolveConfig::new("PPPP".to_string());
        config.max_guesses = Some(1);

        let result = solve_code(config, &game).unwrap();

        assert!(!result.success);
        assert_eq!(result.guesses.len(), 1);
    }
}
