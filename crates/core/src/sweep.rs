//! Experiment driver: characterize move-count and time growth across N.
//!
//! Runs the engine once per N in 1..=max_n, count-only, timing exactly the
//! engine call with a monotonic clock. The closed-form 2^N - 1 is computed
//! independently for every row so a diverging engine shows up in the report
//! (and in tests) instead of silently agreeing with itself.
//!
//! The driver renders nothing; it returns the [`ExperimentReport`] and the
//! app layer decides how to present it.

use crate::error::{Result, SweepError};
use crate::report::{ExperimentReport, RunResult};
use crate::solver::{self, MAX_DISKS};
use crate::towers::{CountOnly, Peg};
use std::time::Instant;

/// Sweep N from 1 to `max_n` inclusive on the canonical pegs (A -> C via B).
///
/// # Errors
/// - [`SweepError::InvalidBound`] if `max_n` is 0 (recoverable: the caller
///   renders the message and re-prompts; no rows are produced)
/// - [`crate::error::SolverError::TooManyDisks`] if the range would exceed
///   the disk limit (rejected up front, before any work)
pub fn run_sweep(max_n: u32) -> Result<ExperimentReport> {
    run_sweep_bounded(max_n, MAX_DISKS)
}

/// Like [`run_sweep`], with a caller-chosen disk limit.
pub fn run_sweep_bounded(max_n: u32, max_disks: u32) -> Result<ExperimentReport> {
    if max_n == 0 {
        return Err(SweepError::InvalidBound { max_n: 0 }.into());
    }

    // Reject the whole range up front so a sweep never fails halfway through.
    solver::theoretical_moves_bounded(max_n, max_disks)?;

    let mut results = Vec::with_capacity(max_n as usize);

    for n in 1..=max_n {
        let theoretical = solver::theoretical_moves_bounded(n, max_disks)?;

        let mut sink = CountOnly;
        let start = Instant::now();
        let actual = solver::solve_bounded(n, max_disks, Peg::A, Peg::C, Peg::B, &mut sink)?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

        results.push(RunResult {
            n,
            actual_moves: actual,
            theoretical_moves: theoretical,
            elapsed_ms,
        });
    }

    Ok(ExperimentReport::new(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, SweepError};

    #[test]
    fn test_sweep_of_five() {
        let report = run_sweep(5).unwrap();
        assert_eq!(report.len(), 5);

        let actual: Vec<u64> = report.results().iter().map(|r| r.actual_moves).collect();
        assert_eq!(actual, vec![1, 3, 7, 15, 31]);

        for row in report.results() {
            assert!(row.matches_theory(), "n = {}", row.n);
        }
    }

    #[test]
    fn test_rows_ascend_in_n() {
        let report = run_sweep(8).unwrap();
        for (i, row) in report.results().iter().enumerate() {
            assert_eq!(row.n as usize, i + 1);
        }
    }

    #[test]
    fn test_zero_bound_is_invalid() {
        let result = run_sweep(0);
        match result {
            Err(Error::Sweep(SweepError::InvalidBound { max_n })) => assert_eq!(max_n, 0),
            other => panic!("expected InvalidBound, got {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn test_out_of_range_bound_rejected_up_front() {
        assert!(run_sweep(63).is_err());
        assert!(run_sweep_bounded(11, 10).is_err());
    }

    #[test]
    fn test_determinism_across_runs() {
        let a = run_sweep(12).unwrap();
        let b = run_sweep(12).unwrap();

        for (x, y) in a.results().iter().zip(b.results().iter()) {
            assert_eq!(x.n, y.n);
            assert_eq!(x.actual_moves, y.actual_moves);
            assert_eq!(x.theoretical_moves, y.theoretical_moves);
            // elapsed_ms may differ between runs
        }
    }

    #[test]
    fn test_monotone_growth() {
        let report = run_sweep(20).unwrap();
        let rows = report.results();
        for pair in rows.windows(2) {
            assert_eq!(pair[1].actual_moves, 2 * pair[0].actual_moves + 1);
        }
    }
}
