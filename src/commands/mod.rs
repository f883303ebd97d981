//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_secrets};
pub use simple::{run_simple, run_simple_with};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_code};
pub use test_all::{TestAllStatistics, run_test_all};
