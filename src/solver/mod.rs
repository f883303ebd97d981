//! Code breaking deduction engine
//!
//! Candidate generation, feedback filtering and session state.

mod config;
mod engine;
mod error;
mod generator;

pub use config::GameConfig;
pub use engine::{Solver, SolverState};
pub use error::{ErrorKind, SolverError};
pub use generator::{CodeSpace, MAX_CODES, generate_codes};
