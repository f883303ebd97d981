//! Peg color alphabet
//!
//! The ordered set of symbols a code may be built from. Input order decides
//! generation order and nothing else.

use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for invalid alphabets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// No colors supplied, or only whitespace
    Empty,
    /// The same color appears more than once
    DuplicateColor(char),
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "You must supply code peg colours"),
            Self::DuplicateColor(c) => {
                write!(f, "Code peg colours are not unique: '{c}' appears more than once")
            }
        }
    }
}

impl std::error::Error for AlphabetError {}

/// Ordered set of distinct peg colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorAlphabet {
    colors: Vec<char>,
}

impl ColorAlphabet {
    /// Build an alphabet from a string of distinct characters
    ///
    /// # Errors
    /// Returns `AlphabetError` if:
    /// - The string is empty or contains only whitespace
    /// - Any character appears more than once
    ///
    /// # Examples
    /// ```
    /// use codebreaker_solver::core::ColorAlphabet;
    ///
    /// let alphabet = ColorAlphabet::new("RGBY").unwrap();
    /// assert_eq!(alphabet.len(), 4);
    ///
    /// assert!(ColorAlphabet::new("   ").is_err());
    /// assert!(ColorAlphabet::new("RGR").is_err());
    /// ```
    pub fn new(colors: &str) -> Result<Self, AlphabetError> {
        if colors.trim().is_empty() {
            return Err(AlphabetError::Empty);
        }

        let mut seen = FxHashSet::default();
        for c in colors.chars() {
            if !seen.insert(c) {
                return Err(AlphabetError::DuplicateColor(c));
            }
        }

        Ok(Self {
            colors: colors.chars().collect(),
        })
    }

    /// Colors in input order
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[char] {
        &self.colors
    }

    /// Number of colors
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed alphabet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Check whether a color belongs to the alphabet
    #[inline]
    #[must_use]
    pub fn contains(&self, color: char) -> bool {
        self.colors.contains(&color)
    }
}

impl fmt::Display for ColorAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.colors {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
