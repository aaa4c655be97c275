//! Pegs, moves, and the move-emission capability.
//!
//! The solver never materializes its output: it pushes each move through a
//! [`MoveSink`] supplied by the caller. Move counts grow as 2^n, so a caller
//! that wants the full sequence opts into it explicitly with a [`Recorder`];
//! everything else (sweeps, large single runs) uses [`CountOnly`].
//!
//! The module also provides [`Towers`], an explicit peg-state simulator that
//! validates move legality. It is how tests (and curious callers) verify that
//! an emitted sequence actually solves the puzzle instead of trusting the
//! solver's own bookkeeping.

use crate::error::{Result, TowersError};
use std::fmt;

/// One of the three puzzle pegs.
///
/// Pegs carry no state of their own; they only label the endpoints of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Peg {
    A,
    B,
    C,
}

impl Peg {
    /// All pegs, in label order.
    pub const ALL: [Peg; 3] = [Peg::A, Peg::B, Peg::C];

    /// Stable index for array-backed peg state (A=0, B=1, C=2).
    pub fn index(self) -> usize {
        match self {
            Peg::A => 0,
            Peg::B => 1,
            Peg::C => 2,
        }
    }

    /// Single-letter display name.
    pub fn name(self) -> &'static str {
        match self {
            Peg::A => "A",
            Peg::B => "B",
            Peg::C => "C",
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single move: take the disk on top of `from` and place it on `to`.
///
/// `disk` is 1-indexed with 1 = smallest; at the root call the largest disk
/// moved is n. Every move the solver emits satisfies `from != to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Which disk is moved (1 = smallest)
    pub disk: u32,

    /// Peg the disk departs from
    pub from: Peg,

    /// Peg the disk lands on
    pub to: Peg,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "disk {}: {} -> {}", self.disk, self.from, self.to)
    }
}

/// Receives moves from the solver in strict move order.
///
/// Implemented for any `FnMut(Move)` closure, so ad-hoc consumers don't need
/// a named type.
pub trait MoveSink {
    /// Called once per move, in the order the moves must be performed.
    fn on_move(&mut self, mv: Move);
}

impl<F: FnMut(Move)> MoveSink for F {
    fn on_move(&mut self, mv: Move) {
        self(mv)
    }
}

/// Sink that discards every move. Used for count-only runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct CountOnly;

impl MoveSink for CountOnly {
    fn on_move(&mut self, _mv: Move) {}
}

/// Sink that retains the full move sequence.
///
/// Only sensible for small n: the sequence has 2^n - 1 entries.
#[derive(Debug, Default)]
pub struct Recorder {
    moves: Vec<Move>,
}

impl Recorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves recorded so far, in emission order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Consume the recorder, yielding the recorded sequence.
    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }
}

impl MoveSink for Recorder {
    fn on_move(&mut self, mv: Move) {
        self.moves.push(mv);
    }
}

/// Explicit peg state: three stacks of disks.
///
/// Each stack is stored bottom-to-top, so the last element is the top disk.
/// [`Towers::apply`] enforces the puzzle rules and returns a typed error for
/// any illegal move, which makes replaying a solver-emitted sequence a real
/// verification rather than a formality.
#[derive(Debug, Clone)]
pub struct Towers {
    stacks: [Vec<u32>; 3],
    disks: u32,
}

impl Towers {
    /// All `n` disks stacked on `start`, largest at the bottom.
    pub fn new(n: u32, start: Peg) -> Self {
        let mut stacks: [Vec<u32>; 3] = [Vec::new(), Vec::new(), Vec::new()];
        stacks[start.index()] = (1..=n).rev().collect();
        Self { stacks, disks: n }
    }

    /// Number of disks in play.
    pub fn disks(&self) -> u32 {
        self.disks
    }

    /// Number of disks currently on `peg`.
    pub fn height(&self, peg: Peg) -> usize {
        self.stacks[peg.index()].len()
    }

    /// Disk on top of `peg`, if any.
    pub fn top(&self, peg: Peg) -> Option<u32> {
        self.stacks[peg.index()].last().copied()
    }

    /// Apply one move, rejecting it if it breaks the puzzle rules.
    pub fn apply(&mut self, mv: Move) -> Result<()> {
        if mv.from == mv.to {
            return Err(TowersError::SamePeg {
                disk: mv.disk,
                peg: mv.from,
            }
            .into());
        }

        let top = self
            .top(mv.from)
            .ok_or(TowersError::EmptyPeg { peg: mv.from })?;
        if top != mv.disk {
            return Err(TowersError::NotOnTop {
                disk: mv.disk,
                peg: mv.from,
            }
            .into());
        }

        if let Some(dest_top) = self.top(mv.to) {
            if dest_top < mv.disk {
                return Err(TowersError::LargerOntoSmaller {
                    disk: mv.disk,
                    top: dest_top,
                    peg: mv.to,
                }
                .into());
            }
        }

        self.stacks[mv.from.index()].pop();
        self.stacks[mv.to.index()].push(mv.disk);
        Ok(())
    }

    /// True when every disk sits on `dest`.
    ///
    /// Ordering on the peg is implied: `apply` never lets a larger disk land
    /// on a smaller one, so a full peg is necessarily sorted.
    pub fn is_solved(&self, dest: Peg) -> bool {
        self.stacks[dest.index()].len() as u32 == self.disks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let towers = Towers::new(3, Peg::A);
        assert_eq!(towers.disks(), 3);
        assert_eq!(towers.height(Peg::A), 3);
        assert_eq!(towers.height(Peg::B), 0);
        assert_eq!(towers.height(Peg::C), 0);
        assert_eq!(towers.top(Peg::A), Some(1)); // smallest on top
        assert!(towers.is_solved(Peg::A));
        assert!(!towers.is_solved(Peg::C));
    }

    #[test]
    fn test_zero_disks_solved_everywhere() {
        let towers = Towers::new(0, Peg::A);
        assert_eq!(towers.disks(), 0);
        for peg in Peg::ALL {
            assert!(towers.is_solved(peg));
        }
    }

    #[test]
    fn test_legal_move() {
        let mut towers = Towers::new(2, Peg::A);
        towers
            .apply(Move {
                disk: 1,
                from: Peg::A,
                to: Peg::B,
            })
            .unwrap();
        assert_eq!(towers.top(Peg::B), Some(1));
        assert_eq!(towers.top(Peg::A), Some(2));
    }

    #[test]
    fn test_empty_source_rejected() {
        let mut towers = Towers::new(1, Peg::A);
        let result = towers.apply(Move {
            disk: 1,
            from: Peg::B,
            to: Peg::C,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_non_top_disk_rejected() {
        let mut towers = Towers::new(2, Peg::A);
        // Disk 2 is under disk 1
        let result = towers.apply(Move {
            disk: 2,
            from: Peg::A,
            to: Peg::C,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_larger_onto_smaller_rejected() {
        let mut towers = Towers::new(2, Peg::A);
        towers
            .apply(Move {
                disk: 1,
                from: Peg::A,
                to: Peg::C,
            })
            .unwrap();
        let result = towers.apply(Move {
            disk: 2,
            from: Peg::A,
            to: Peg::C,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_same_peg_rejected() {
        let mut towers = Towers::new(1, Peg::A);
        let result = towers.apply(Move {
            disk: 1,
            from: Peg::A,
            to: Peg::A,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_closure_is_a_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |mv: Move| seen.push(mv.disk);
            sink.on_move(Move {
                disk: 7,
                from: Peg::A,
                to: Peg::B,
            });
        }
        assert_eq!(seen, vec![7]);
    }

    #[test]
    fn test_move_display() {
        let mv = Move {
            disk: 3,
            from: Peg::A,
            to: Peg::C,
        };
        assert_eq!(mv.to_string(), "disk 3: A -> C");
    }
}
