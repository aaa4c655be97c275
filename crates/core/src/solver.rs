//! Recursive move engine for the Towers-of-Hanoi puzzle.
//!
//! The engine is pure: its only side effect is invoking the caller-supplied
//! [`MoveSink`] once per move, and it performs no I/O. That purity is what
//! lets the sweep driver time the engine call alone, with rendering and file
//! writing kept strictly outside the bracket.
//!
//! # Complexity
//!
//! An n-disk instance requires exactly 2^n - 1 moves, and 2^n - 1 is a proven
//! lower bound for any correct solver. Time and move count are therefore both
//! Θ(2^n); there is no asymptotically faster algorithm, only faster constants.
//!
//! # Recursion depth
//!
//! One stack frame per disk. [`MAX_DISKS`] bounds both the move counter
//! (2^62 - 1 fits comfortably in 63 bits) and the recursion depth, so the
//! depth never exceeds 62 frames.

use crate::error::{Result, SolverError};
use crate::report::{RunResult, SingleRun};
use crate::towers::{CountOnly, Move, MoveSink, Peg, Recorder};
use std::time::Instant;

/// Default upper bound on disk count.
///
/// 2^62 - 1 moves is the largest count that stays within a signed 64-bit
/// range, which keeps counts safe for any downstream consumer that treats
/// them as signed (CSV readers, plotting scripts).
pub const MAX_DISKS: u32 = 62;

/// Default move-print threshold for single runs (matches the interactive
/// behavior of printing full sequences only for small instances).
pub const DEFAULT_MOVE_DISPLAY_THRESHOLD: u32 = 5;

/// Closed-form minimum move count: 2^n - 1.
///
/// Computed independently of the recursion so tests (and the sweep report)
/// can detect divergence between the engine's count and the theory.
pub fn theoretical_moves(n: u32) -> Result<u64> {
    theoretical_moves_bounded(n, MAX_DISKS)
}

/// Like [`theoretical_moves`], with a caller-chosen disk limit.
///
/// Limits above [`MAX_DISKS`] are clamped: the counter range is a hard
/// ceiling regardless of configuration.
pub fn theoretical_moves_bounded(n: u32, max_disks: u32) -> Result<u64> {
    let max = max_disks.min(MAX_DISKS);
    if n > max {
        return Err(SolverError::TooManyDisks {
            n: u64::from(n),
            max,
        }
        .into());
    }
    Ok((1u64 << n) - 1)
}

/// Solve an n-disk instance, emitting each move through `sink`.
///
/// Returns the total move count, exactly 2^n - 1. With n = 0 no moves are
/// made and the count is 0; that is a valid no-op, not an error.
///
/// # Errors
/// - [`SolverError::TooManyDisks`] if n exceeds [`MAX_DISKS`]
/// - [`SolverError::DistinctPegsRequired`] if the peg triple repeats a peg
pub fn solve(n: u32, from: Peg, to: Peg, aux: Peg, sink: &mut dyn MoveSink) -> Result<u64> {
    solve_bounded(n, MAX_DISKS, from, to, aux, sink)
}

/// Like [`solve`], with a caller-chosen disk limit (clamped to [`MAX_DISKS`]).
pub fn solve_bounded(
    n: u32,
    max_disks: u32,
    from: Peg,
    to: Peg,
    aux: Peg,
    sink: &mut dyn MoveSink,
) -> Result<u64> {
    let max = max_disks.min(MAX_DISKS);
    if n > max {
        return Err(SolverError::TooManyDisks {
            n: u64::from(n),
            max,
        }
        .into());
    }
    if from == to || from == aux || to == aux {
        return Err(SolverError::DistinctPegsRequired.into());
    }

    let mut moves = 0u64;
    solve_rec(n, from, to, aux, &mut moves, sink);
    Ok(moves)
}

/// The divide-and-conquer core.
///
/// Move n-1 disks out of the way onto the auxiliary peg, move disk n to the
/// destination, then move the n-1 disks on top of it. This ordering is the
/// canonical optimal sequence for the given (from, to, aux) triple.
fn solve_rec(n: u32, from: Peg, to: Peg, aux: Peg, moves: &mut u64, sink: &mut dyn MoveSink) {
    if n == 0 {
        return;
    }

    solve_rec(n - 1, from, aux, to, moves, sink);

    *moves += 1;
    sink.on_move(Move { disk: n, from, to });

    solve_rec(n - 1, aux, to, from, moves, sink);
}

/// Options for a single interactive solve.
#[derive(Debug, Clone, Copy)]
pub struct SingleRunOptions {
    /// Record and return the move sequence only when n is at or below this.
    ///
    /// Presentation policy, not correctness: it bounds output volume, the
    /// count and timing are identical either way.
    pub move_display_threshold: u32,

    /// Disk limit for this run (clamped to [`MAX_DISKS`]).
    pub max_disks: u32,
}

impl Default for SingleRunOptions {
    fn default() -> Self {
        Self {
            move_display_threshold: DEFAULT_MOVE_DISPLAY_THRESHOLD,
            max_disks: MAX_DISKS,
        }
    }
}

/// Solve one instance on the canonical pegs (A -> C via B), timing the
/// engine call and comparing against the closed form.
///
/// For n at or below the display threshold the full move sequence is
/// recorded and returned; above it the run is count-only, since the
/// sequence length doubles with every disk.
pub fn solve_single(n: u32, opts: &SingleRunOptions) -> Result<SingleRun> {
    let (from, to, aux) = (Peg::A, Peg::C, Peg::B);
    let theoretical = theoretical_moves_bounded(n, opts.max_disks)?;

    if n <= opts.move_display_threshold {
        let mut recorder = Recorder::new();
        let start = Instant::now();
        let actual = solve_bounded(n, opts.max_disks, from, to, aux, &mut recorder)?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

        Ok(SingleRun {
            result: RunResult {
                n,
                actual_moves: actual,
                theoretical_moves: theoretical,
                elapsed_ms,
            },
            moves: Some(recorder.into_moves()),
        })
    } else {
        let mut sink = CountOnly;
        let start = Instant::now();
        let actual = solve_bounded(n, opts.max_disks, from, to, aux, &mut sink)?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

        Ok(SingleRun {
            result: RunResult {
                n,
                actual_moves: actual,
                theoretical_moves: theoretical,
                elapsed_ms,
            },
            moves: None,
        })
    }
}
