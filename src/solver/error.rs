//! Solver error types

use super::SolverState;
use crate::core::AlphabetError;
use std::fmt;

/// Broad category of a solver error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input (bad alphabet, mismatched guess)
    InvalidArgument,
    /// Code length outside the accepted range
    OutOfRange,
    /// Operation not allowed in the current state
    InvalidOperation,
}

/// Errors raised by the deduction engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The color alphabet was rejected
    Alphabet(AlphabetError),
    /// Code length must be at least 1
    CodeLengthOutOfRange(usize),
    /// The game has more possible codes than the given limit
    TooManyCodes(usize),
    /// An explicit guess has the wrong number of pegs
    GuessLength { expected: usize, actual: usize },
    /// An explicit guess uses a color outside the alphabet
    UnknownColor(char),
    /// A code repeats a color although duplicates are not allowed
    RepeatedColor(char),
    /// Feedback was given after the session ended
    Finished(SolverState),
}

impl SolverError {
    /// Map this error to its category
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Alphabet(_)
            | Self::GuessLength { .. }
            | Self::UnknownColor(_)
            | Self::RepeatedColor(_) => {
                ErrorKind::InvalidArgument
            }
            Self::CodeLengthOutOfRange(_) | Self::TooManyCodes(_) => ErrorKind::OutOfRange,
            Self::Finished(_) => ErrorKind::InvalidOperation,
        }
    }
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alphabet(e) => write!(f, "{e}"),
            Self::CodeLengthOutOfRange(len) => write!(
                f,
                "Number of code pegs must be greater than or equal to 1, got {len}"
            ),
            Self::TooManyCodes(limit) => write!(
                f,
                "Too many possible codes: at most {limit} are supported, use fewer colours or pegs"
            ),
            Self::GuessLength { expected, actual } => {
                write!(f, "Guess must have exactly {expected} pegs, got {actual}")
            }
            Self::UnknownColor(c) => write!(f, "Code uses unknown colour '{c}'"),
            Self::RepeatedColor(c) => {
                write!(f, "Colour '{c}' is repeated but duplicates are not allowed")
            }
            Self::Finished(SolverState::Solved) => {
                write!(f, "The solver has already solved the code")
            }
            Self::Finished(_) => write!(f, "The code is no longer solveable"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Alphabet(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AlphabetError> for SolverError {
    fn from(e: AlphabetError) -> Self {
        Self::Alphabet(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds() {
        assert_eq!(
            SolverError::Alphabet(AlphabetError::Empty).kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            SolverError::UnknownColor('X').kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            SolverError::CodeLengthOutOfRange(0).kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            SolverError::TooManyCodes(16).kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(
            SolverError::Finished(SolverState::Solved).kind(),
            ErrorKind::InvalidOperation
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            SolverError::Finished(SolverState::Unsolveable).to_string(),
            "The code is no longer solveable"
        );
        assert_eq!(
            SolverError::GuessLength {
                expected: 4,
                actual: 3
            }
            .to_string(),
            "Guess must have exactly 4 pegs, got 3"
        );
        assert!(
            SolverError::TooManyCodes(16)
                .to_string()
                .starts_with("Too many possible codes: at most 16")
        );
    }
}
