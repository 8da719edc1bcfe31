//! Colored Tower of Hanoi Solver
//!
//! This library solves a constrained Tower of Hanoi variant where disks carry
//! both a size and a color: a disk may only be placed on a disk that is at
//! least as large and differently colored. The search is the classical three-phase
//! recursion with a one-level rollback on an illegal pivot move; it is
//! deliberately not a complete backtracking search.

pub mod config;
pub mod hanoi;
pub mod solver;
pub mod utils;

pub use config::Settings;
pub use hanoi::{InputError, Move, PegId, Puzzle};
pub use solver::{HanoiProblem, Outcome, Solution};

use anyhow::Result;

/// Main entry point for solving a configured puzzle.
/// `Ok(None)` means the puzzle is infeasible under the fixed strategy.
pub fn solve_puzzle(settings: Settings) -> Result<Option<Solution>> {
    let mut problem = HanoiProblem::new(settings)?;
    problem.solve()
}
