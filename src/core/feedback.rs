//! Feedback peg calculation and representation
//!
//! Feedback for a guess is a pair of counts:
//! - black: right color in the right position
//! - white: right color in the wrong position
//!
//! Every peg, in the code or in the guess, contributes to at most one feedback peg.

use super::Code;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// Black/white feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    pub black: usize,
    pub white: usize,
}

impl Feedback {
    /// Create feedback from raw counts
    #[inline]
    #[must_use]
    pub const fn new(black: usize, white: usize) -> Self {
        Self { black, white }
    }

    /// All-black feedback for a code of the given length
    #[inline]
    #[must_use]
    pub const fn perfect(code_length: usize) -> Self {
        Self::new(code_length, 0)
    }

    /// Total number of feedback pegs
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.black + self.white
    }

    /// Check if this is a full match for a code of the given length
    #[inline]
    #[must_use]
    pub const fn is_perfect(self, code_length: usize) -> bool {
        self.black == code_length && self.white == 0
    }

    /// Calculate the feedback `code` would produce for `guess`
    ///
    /// The result is symmetric in its arguments.
    ///
    /// # Algorithm
    /// 1. Count positions where both pegs match (black)
    /// 2. Scan the guess against a working multiset of the code's pegs,
    ///    consuming one occurrence per match
    /// 3. White is the total match count minus black
    ///
    /// # Examples
    /// ```
    /// use codebreaker_solver::core::{Code, Feedback};
    ///
    /// let code = Code::from("RGBY");
    /// let guess = Code::from("RBGG");
    ///
    /// // R black, B and one G white, second G unmatched
    /// assert_eq!(Feedback::calculate(&code, &guess), Feedback::new(1, 2));
    /// ```
    #[must_use]
    pub fn calculate(code: &Code, guess: &Code) -> Self {
        let black = code
            .pegs()
            .iter()
            .zip(guess.pegs())
            .filter(|(c, g)| c == g)
            .count();

        let mut available: FxHashMap<char, usize> = FxHashMap::default();
        for &peg in code.pegs() {
            *available.entry(peg).or_insert(0) += 1;
        }

        let mut matches = 0;
        for peg in guess.pegs() {
            if let Some(count) = available.get_mut(peg)
                && *count > 0
            {
                *count -= 1;
                matches += 1;
            }
        }

        Self::new(black, matches - black)
    }

    /// Render as peg characters: `●` black, `○` white, `·` empty
    #[must_use]
    pub fn to_pegs(self, code_length: usize) -> String {
        let empty = code_length.saturating_sub(self.total());
        format!(
            "{}{}{}",
            "●".repeat(self.black),
            "○".repeat(self.white),
            "·".repeat(empty)
        )
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B {}W", self.black, self.white)
    }
}

/// Parses either two counts (`"2 1"`, `"2,1"`, `"2/1"`) or a peg string
/// (`"BBW"`, `"●●○"`, with `-`/`_`/`·` allowed as empty slots).
impl FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty feedback".to_string());
        }

        let counts: Vec<&str> = s
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        if counts.len() == 2 && counts.iter().all(|part| part.chars().all(|c| c.is_ascii_digit())) {
            let black = counts[0]
                .parse()
                .map_err(|e| format!("Invalid black count '{}': {e}", counts[0]))?;
            let white = counts[1]
                .parse()
                .map_err(|e| format!("Invalid white count '{}': {e}", counts[1]))?;
            return Ok(Self::new(black, white));
        }

        let mut feedback = Self::default();
        for ch in s.chars() {
            match ch {
                'B' | 'b' | '●' => feedback.black += 1,
                'W' | 'w' | '○' => feedback.white += 1,
                '-' | '_' | '·' => {}
                _ => return Err(format!("Invalid feedback: {s}")),
            }
        }
        Ok(feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(code: &str, guess: &str) -> Feedback {
        Feedback::calculate(&Code::from(code), &Code::from(guess))
    }

    #[test]
    fn feedback_self_match_is_all_black() {
        for code in ["RGBY", "RRRR", "A", "ABAB"] {
            let len = code.chars().count();
            assert_eq!(score(code, code), Feedback::perfect(len));
            assert!(score(code, code).is_perfect(len));
        }
    }

    #[test]
    fn feedback_no_common_colors() {
        assert_eq!(score("RGBY", "OOPP"), Feedback::new(0, 0));
    }

    #[test]
    fn feedback_all_white() {
        assert_eq!(score("RGBY", "YBGR"), Feedback::new(0, 4));
    }

    #[test]
    fn feedback_code_peg_matched_once() {
        // One R in the code can satisfy only one of the guessed Rs
        assert_eq!(score("RGBY", "ORRR"), Feedback::new(0, 1));
        assert_eq!(score("RGBY", "RRRR"), Feedback::new(1, 0));
    }

    #[test]
    fn feedback_guess_peg_matched_once() {
        assert_eq!(score("RRBB", "RBOO"), Feedback::new(1, 1));
        assert_eq!(score("RRBB", "BBRR"), Feedback::new(0, 4));
        assert_eq!(score("AABB", "ABAB"), Feedback::new(2, 2));
    }

    #[test]
    fn feedback_is_symmetric_and_bounded() {
        let codes = ["RGBY", "RRGG", "YYYY", "BRGR", "GBYR", "RGRG"];
        for a in codes {
            for b in codes {
                let ab = score(a, b);
                assert_eq!(ab, score(b, a), "{a} vs {b}");
                assert!(ab.total() <= 4, "{a} vs {b} gave {ab}");
            }
        }
    }

    #[test]
    fn feedback_parse_counts() {
        assert_eq!("2 1".parse::<Feedback>(), Ok(Feedback::new(2, 1)));
        assert_eq!("2,1".parse::<Feedback>(), Ok(Feedback::new(2, 1)));
        assert_eq!(" 0 / 4 ".parse::<Feedback>(), Ok(Feedback::new(0, 4)));
    }

    #[test]
    fn feedback_parse_pegs() {
        assert_eq!("BBW".parse::<Feedback>(), Ok(Feedback::new(2, 1)));
        assert_eq!("●○○·".parse::<Feedback>(), Ok(Feedback::new(1, 2)));
        assert_eq!("--".parse::<Feedback>(), Ok(Feedback::new(0, 0)));
    }

    #[test]
    fn feedback_parse_invalid() {
        assert!("".parse::<Feedback>().is_err());
        assert!("2 x".parse::<Feedback>().is_err());
        assert!("BXW".parse::<Feedback>().is_err());
        assert!("-1 2".parse::<Feedback>().is_err());
    }

    #[test]
    fn feedback_to_pegs() {
        assert_eq!(Feedback::new(2, 1).to_pegs(4), "●●○·");
        assert_eq!(Feedback::new(0, 0).to_pegs(3), "···");
        assert_eq!(Feedback::new(3, 2).to_pegs(4), "●●●○○");
    }

    #[test]
    fn feedback_display() {
        assert_eq!(Feedback::new(1, 2).to_string(), "1B 2W");
    }
}
