//! Code representation
//!
//! A Code is an ordered, fixed-length sequence of peg colors.

use std::fmt;

/// An immutable sequence of peg colors
///
/// Equality and ordering are by peg sequence.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    pegs: Box<[char]>,
}

impl Code {
    /// Create a code from its pegs
    ///
    /// # Examples
    /// ```
    /// use codebreaker_solver::core::Code;
    ///
    /// let code = Code::new(vec!['R', 'G', 'B', 'Y']);
    /// assert_eq!(code.len(), 4);
    /// assert_eq!(code.to_string(), "RGBY");
    /// ```
    #[must_use]
    pub fn new(pegs: impl Into<Box<[char]>>) -> Self {
        Self { pegs: pegs.into() }
    }

    /// Pegs in position order
    #[inline]
    #[must_use]
    pub fn pegs(&self) -> &[char] {
        &self.pegs
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pegs.len()
    }

    /// True for a zero-length code
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pegs.is_empty()
    }

    /// Get the peg at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn peg_at(&self, position: usize) -> char {
        self.pegs[position]
    }

    /// Check whether any color appears more than once
    #[must_use]
    pub fn has_repeats(&self) -> bool {
        self.pegs
            .iter()
            .enumerate()
            .any(|(i, peg)| self.pegs[i + 1..].contains(peg))
    }
}

impl From<&str> for Code {
    fn from(text: &str) -> Self {
        Self::new(text.chars().collect::<Vec<_>>())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in &self.pegs {
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_from_str() {
        let code = Code::from("RGBY");
        assert_eq!(code.pegs(), &['R', 'G', 'B', 'Y']);
        assert_eq!(code.peg_at(2), 'B');
    }

    #[test]
    fn code_display_round_trips_text() {
        assert_eq!(format!("{}", Code::from("YYRB")), "YYRB");
    }

    #[test]
    fn code_has_repeats() {
        assert!(!Code::from("RGBY").has_repeats());
        assert!(Code::from("RGBR").has_repeats());
        assert!(Code::from("RR").has_repeats());
        assert!(!Code::from("R").has_repeats());
    }

    #[test]
    fn code_ordering_is_by_sequence() {
        let mut codes = vec![Code::from("BA"), Code::from("AB"), Code::from("AA")];
        codes.sort();
        assert_eq!(
            codes,
            vec![Code::from("AA"), Code::from("AB"), Code::from("BA")]
        );
    }
}
