//! Candidate space enumeration
//!
//! Yields every code of a given length over an alphabet in lexicographic
//! order of the alphabet's input order (leftmost position varies slowest).

use crate::core::Code;

/// Largest code space a solver will enumerate
pub const MAX_CODES: usize = 1 << 22;

/// Lazy enumerator of all codes for a set of game parameters
///
/// Walks the code tree depth-first with an explicit stack of color indices.
pub struct CodeSpace<'a> {
    colors: &'a [char],
    code_length: usize,
    allow_duplicates: bool,
    stack: Vec<usize>,
    in_use: Vec<bool>,
    started: bool,
    exhausted: bool,
}

impl<'a> CodeSpace<'a> {
    #[must_use]
    pub fn new(colors: &'a [char], code_length: usize, allow_duplicates: bool) -> Self {
        let exhausted = colors.is_empty() || (!allow_duplicates && code_length > colors.len());

        Self {
            colors,
            code_length,
            allow_duplicates,
            stack: Vec::with_capacity(code_length),
            in_use: vec![false; colors.len()],
            started: false,
            exhausted,
        }
    }

    /// Number of codes this space will yield, or `None` on overflow
    ///
    /// `a^n` with duplicates, `a!/(a-n)!` without (0 when `n > a`).
    ///
    /// # Examples
    /// ```
    /// use codebreaker_solver::solver::CodeSpace;
    ///
    /// assert_eq!(CodeSpace::expected_count(4, 4, true), Some(256));
    /// assert_eq!(CodeSpace::expected_count(4, 4, false), Some(24));
    /// assert_eq!(CodeSpace::expected_count(3, 4, false), Some(0));
    /// ```
    #[must_use]
    pub fn expected_count(
        colors: usize,
        code_length: usize,
        allow_duplicates: bool,
    ) -> Option<usize> {
        if allow_duplicates {
            let exp = u32::try_from(code_length).ok()?;
            return colors.checked_pow(exp);
        }

        if code_length > colors {
            return Some(0);
        }

        (colors - code_length + 1..=colors).try_fold(1usize, usize::checked_mul)
    }

    fn available(&self, index: usize) -> bool {
        self.allow_duplicates || !self.in_use[index]
    }

    fn push(&mut self, index: usize) {
        self.stack.push(index);
        self.in_use[index] = true;
    }

    fn pop(&mut self) -> Option<usize> {
        let index = self.stack.pop()?;
        // With duplicates the flag is never consulted, so stale values are harmless
        self.in_use[index] = false;
        Some(index)
    }

    /// Replace the deepest peg with its next available color, backtracking
    /// as far as needed. Returns false once the tree is exhausted.
    fn bump(&mut self) -> bool {
        while let Some(last) = self.pop() {
            if let Some(next) = (last + 1..self.colors.len()).find(|&i| self.available(i)) {
                self.push(next);
                return true;
            }
        }
        false
    }

    /// Extend the stack to a full code with the lowest available colors.
    fn fill(&mut self) -> bool {
        while self.stack.len() < self.code_length {
            match (0..self.colors.len()).find(|&i| self.available(i)) {
                Some(first) => self.push(first),
                None => {
                    if !self.bump() {
                        return false;
                    }
                }
            }
        }
        true
    }
}

impl Iterator for CodeSpace<'_> {
    type Item = Code;

    fn next(&mut self) -> Option<Code> {
        if self.exhausted {
            return None;
        }

        let found = if self.started {
            self.bump() && self.fill()
        } else {
            self.started = true;
            self.fill()
        };

        if !found {
            self.exhausted = true;
            return None;
        }

        let pegs: Vec<char> = self.stack.iter().map(|&i| self.colors[i]).collect();
        Some(Code::new(pegs))
    }
}

/// Collect the full candidate space into a vector
#[must_use]
pub fn generate_codes(colors: &[char], code_length: usize, allow_duplicates: bool) -> Vec<Code> {
    // Capacity is a hint only; cap it so an overflowing count cannot abort the allocation
    let capacity = CodeSpace::expected_count(colors.len(), code_length, allow_duplicates)
        .unwrap_or(0)
        .min(1 << 20);

    let mut codes = Vec::with_capacity(capacity);
    codes.extend(CodeSpace::new(colors, code_length, allow_duplicates));
    log::trace!(target: "generator", "generated {} codes", codes.len());
    codes
}
