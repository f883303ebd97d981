//! Deduction engine
//!
//! Holds the set of codes still consistent with all feedback received and
//! narrows it each round.

use super::config::GameConfig;
use super::error::SolverError;
use super::generator::{CodeSpace, MAX_CODES, generate_codes};
use crate::core::{Code, ColorAlphabet, Feedback};
use log::debug;
use std::fmt;

/// Lifecycle state of a solving session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// More than one candidate remains
    Active,
    /// Exactly one candidate remains
    Solved,
    /// No candidate is consistent with the feedback
    Unsolveable,
}

impl fmt::Display for SolverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::Solved => write!(f, "Solved"),
            Self::Unsolveable => write!(f, "Unsolveable"),
        }
    }
}

/// Solver for a single round of the code breaking game
///
/// Always suggests the first remaining candidate in generation order. The
/// candidate set only ever shrinks; start a new `Solver` for a new game.
#[derive(Debug, Clone)]
pub struct Solver {
    alphabet: ColorAlphabet,
    code_length: usize,
    allow_duplicates: bool,
    total_codes: usize,
    candidates: Vec<Code>,
    history: Vec<(Code, Feedback)>,
}

impl Solver {
    /// Create a solver and generate every possible code
    ///
    /// # Errors
    /// Returns `SolverError` if:
    /// - `colors` is empty, whitespace-only or repeats a color (`InvalidArgument`)
    /// - `code_length` is 0 (`OutOfRange`)
    /// - the game has more than [`MAX_CODES`] possible codes (`OutOfRange`)
    ///
    /// # Examples
    /// ```
    /// use codebreaker_solver::solver::Solver;
    ///
    /// let solver = Solver::new("RGBY", 4, false).unwrap();
    /// assert_eq!(solver.possible_codes(), 24);
    /// assert_eq!(solver.next_guess().unwrap().to_string(), "RGBY");
    /// ```
    pub fn new(
        colors: &str,
        code_length: usize,
        allow_duplicates: bool,
    ) -> Result<Self, SolverError> {
        let alphabet = ColorAlphabet::new(colors)?;

        if code_length < 1 {
            return Err(SolverError::CodeLengthOutOfRange(code_length));
        }
        match CodeSpace::expected_count(alphabet.len(), code_length, allow_duplicates) {
            Some(count) if count <= MAX_CODES => {}
            _ => return Err(SolverError::TooManyCodes(MAX_CODES)),
        }

        let candidates = generate_codes(alphabet.colors(), code_length, allow_duplicates);
        debug!(
            target: "solver",
            "new game: colours={alphabet} pegs={code_length} dups={allow_duplicates} codes={}",
            candidates.len()
        );

        Ok(Self {
            alphabet,
            code_length,
            allow_duplicates,
            total_codes: candidates.len(),
            candidates,
            history: Vec::new(),
        })
    }

    /// Create a solver from a `GameConfig`
    ///
    /// # Errors
    /// Same as [`Solver::new`].
    pub fn from_config(config: &GameConfig) -> Result<Self, SolverError> {
        Self::new(&config.colors, config.code_length, config.allow_duplicates)
    }

    /// True while at least one candidate remains
    #[inline]
    #[must_use]
    pub fn is_solveable(&self) -> bool {
        !self.candidates.is_empty()
    }

    /// True when exactly one candidate remains
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.candidates.len() == 1
    }

    /// Number of candidates remaining
    #[inline]
    #[must_use]
    pub fn possible_codes(&self) -> usize {
        self.candidates.len()
    }

    /// The guess to play next; the answer once solved, `None` once unsolveable
    #[inline]
    #[must_use]
    pub fn next_guess(&self) -> Option<&Code> {
        self.candidates.first()
    }

    #[must_use]
    pub fn state(&self) -> SolverState {
        match self.candidates.len() {
            0 => SolverState::Unsolveable,
            1 => SolverState::Solved,
            _ => SolverState::Active,
        }
    }

    /// Remaining candidates in generation order
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// Every (guess, feedback) pair accepted so far
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Code, Feedback)] {
        &self.history
    }

    /// Size of the candidate set before any feedback
    #[inline]
    #[must_use]
    pub const fn total_codes(&self) -> usize {
        self.total_codes
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    #[inline]
    #[must_use]
    pub const fn allow_duplicates(&self) -> bool {
        self.allow_duplicates
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &ColorAlphabet {
        &self.alphabet
    }

    /// Accept feedback from the game for the last suggested guess
    ///
    /// Contradictory feedback is not an error: it leaves the solver
    /// unsolveable.
    ///
    /// # Errors
    /// Returns `SolverError::Finished` if the code is already solved or no
    /// longer solveable.
    pub fn give_feedback(
        &mut self,
        black_pegs: usize,
        white_pegs: usize,
    ) -> Result<(), SolverError> {
        self.give(Feedback::new(black_pegs, white_pegs))
    }

    /// Accept a `Feedback` value for the last suggested guess
    ///
    /// # Errors
    /// Same as [`Solver::give_feedback`].
    pub fn give(&mut self, feedback: Feedback) -> Result<(), SolverError> {
        self.ensure_active()?;

        let guess = self.candidates[0].clone();
        self.apply(guess, feedback);
        Ok(())
    }

    /// Accept feedback for a guess other than the suggested one
    ///
    /// # Errors
    /// Returns `SolverError` if:
    /// - The session is already solved or unsolveable (`InvalidOperation`)
    /// - The guess has the wrong length or an unknown color (`InvalidArgument`)
    pub fn give_feedback_for(
        &mut self,
        guess: &Code,
        feedback: Feedback,
    ) -> Result<(), SolverError> {
        self.ensure_active()?;

        if guess.len() != self.code_length {
            return Err(SolverError::GuessLength {
                expected: self.code_length,
                actual: guess.len(),
            });
        }
        if let Some(&peg) = guess.pegs().iter().find(|&&p| !self.alphabet.contains(p)) {
            return Err(SolverError::UnknownColor(peg));
        }

        self.apply(guess.clone(), feedback);
        Ok(())
    }

    /// Check that a code could be the secret for this game
    ///
    /// # Errors
    /// Returns `SolverError` if the code has the wrong length, uses an unknown
    /// color, or repeats a color when duplicates are not allowed.
    pub fn validate_code(&self, code: &Code) -> Result<(), SolverError> {
        if code.len() != self.code_length {
            return Err(SolverError::GuessLength {
                expected: self.code_length,
                actual: code.len(),
            });
        }
        for (i, &peg) in code.pegs().iter().enumerate() {
            if !self.alphabet.contains(peg) {
                return Err(SolverError::UnknownColor(peg));
            }
            if !self.allow_duplicates && code.pegs()[..i].contains(&peg) {
                return Err(SolverError::RepeatedColor(peg));
            }
        }
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), SolverError> {
        match self.state() {
            SolverState::Active => Ok(()),
            finished => Err(SolverError::Finished(finished)),
        }
    }

    fn apply(&mut self, guess: Code, feedback: Feedback) {
        let before = self.candidates.len();
        self.candidates
            .retain(|candidate| Feedback::calculate(candidate, &guess) == feedback);

        debug!(
            target: "solver",
            "feedback {feedback} for {guess}: {before} -> {} candidates",
            self.candidates.len()
        );

        self.history.push((guess, feedback));
    }
}
