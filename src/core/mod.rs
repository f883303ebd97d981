//! Core domain types for the code breaking game
//!
//! This module contains the fundamental value types: the color alphabet,
//! codes, and black/white feedback. All types here are pure and testable.

mod alphabet;
mod code;
mod feedback;

pub use alphabet::{AlphabetError, ColorAlphabet};
pub use code::Code;
pub use feedback::Feedback;
