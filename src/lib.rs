//! Code Breaker Solver
//!
//! A Mastermind-style code breaker solver. It keeps every code still
//! consistent with the feedback received and always suggests the first one.
//!
//! # Quick Start
//!
//! ```rust
//! use codebreaker_solver::solver::Solver;
//!
//! let mut solver = Solver::new("RGBY", 4, false).unwrap();
//! assert_eq!(solver.possible_codes(), 24);
//!
//! // The game answered the suggested guess with 4 black pegs
//! solver.give_feedback(4, 0).unwrap();
//! assert!(solver.is_solved());
//! println!("The code is {}", solver.next_guess().unwrap());
//! ```

// Core domain types
pub mod core;

// Deduction engine
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
