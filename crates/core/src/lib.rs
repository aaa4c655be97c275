//! hanoi-sim-core: Towers-of-Hanoi move engine and experiment harness
//!
//! This library provides the core components for a learning-focused system that:
//! - Generates the optimal move sequence for an N-disk instance recursively
//! - Counts moves and times the solve, comparing against the 2^N - 1 bound
//! - Sweeps N over a range to characterize exponential growth
//! - Assembles reports (table, CSV, Markdown) as plain data for the app layer
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `towers`: pegs, moves, the move-sink capability, and a peg-state simulator
//! - `solver`: the recursive engine plus the single-run wrapper
//! - `sweep`: the experiment driver (one timed engine call per N)
//! - `report`: run results and their console/CSV/Markdown renderings
//!
//! # Design Principles
//!
//! - **No panics**: All errors are structured and recoverable
//! - **Pure engine**: The solver's only side effect is the caller's move sink;
//!   timing brackets the engine call alone, never I/O
//! - **Bounded**: An explicit disk limit guards counter overflow and recursion depth
//! - **Verifiable**: The closed form is computed independently of the engine,
//!   and emitted sequences can be replayed through real peg state

pub mod error;
pub mod report;
pub mod solver;
pub mod sweep;
pub mod towers;

// Re-export commonly used types
pub use error::{Error, Result};
