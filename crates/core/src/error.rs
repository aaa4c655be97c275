//! Error types for the hanoi-sim system.
//!
//! All operations return structured errors rather than panicking.
//! Every error here is recoverable: the interactive loop in the app
//! renders the message and re-prompts, it never terminates over one.

use crate::towers::Peg;
use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Solver: invalid disk counts or peg assignments
/// - Sweep: invalid experiment bounds
/// - Towers: illegal moves detected while replaying a sequence
/// - I/O: file system operations (report files)
#[derive(Debug, Error)]
pub enum Error {
    /// Solver input validation failed (e.g., too many disks)
    #[error("solver error: {0}")]
    Solver(#[from] SolverError),

    /// Experiment sweep configuration error (e.g., non-positive bound)
    #[error("sweep error: {0}")]
    Sweep(#[from] SweepError),

    /// Illegal move detected while applying a sequence to peg state
    #[error("tower state error: {0}")]
    Towers(#[from] TowersError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Move-engine input errors.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Caller supplied a negative disk count (zero is a valid no-op)
    #[error("disk count must be non-negative, got {n}")]
    NegativeDiskCount { n: i64 },

    /// Disk count exceeds the overflow-safe maximum.
    ///
    /// Detected before any work: 2^n move counts past the limit would
    /// wrap the counter, and recursion depth grows with n. The count is
    /// carried as u64 so callers can report oversized user input exactly.
    #[error("disk count {n} exceeds supported maximum {max}")]
    TooManyDisks { n: u64, max: u32 },

    /// The (source, destination, auxiliary) triple repeats a peg
    #[error("source, destination and auxiliary pegs must be pairwise distinct")]
    DistinctPegsRequired,
}

/// Experiment-driver errors.
#[derive(Debug, Error)]
pub enum SweepError {
    /// Sweep upper bound is not a positive integer
    #[error("sweep bound must be at least 1, got {max_n}")]
    InvalidBound { max_n: i64 },
}

/// Illegal moves rejected by the peg-state simulator.
#[derive(Debug, Error)]
pub enum TowersError {
    /// Move names a source peg that holds no disks
    #[error("cannot move from empty peg {peg}")]
    EmptyPeg { peg: Peg },

    /// Move names a disk that is not on top of its source peg
    #[error("disk {disk} is not on top of peg {peg}")]
    NotOnTop { disk: u32, peg: Peg },

    /// Move would place a disk onto a smaller one
    #[error("cannot place disk {disk} onto smaller disk {top} on peg {peg}")]
    LargerOntoSmaller { disk: u32, top: u32, peg: Peg },

    /// Move targets the peg it departs from
    #[error("move of disk {disk} targets its own source peg {peg}")]
    SamePeg { disk: u32, peg: Peg },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
