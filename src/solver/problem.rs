//! Colored Hanoi problem definition

use super::engine::{self, Outcome};
use super::{MoveValidator, Solution};
use crate::config::Settings;
use crate::hanoi::{load_puzzle_from_file, Puzzle};
use anyhow::{Context, Result};
use itertools::Itertools;
use std::time::Instant;

/// A configured puzzle instance ready to solve
pub struct HanoiProblem {
    settings: Settings,
    puzzle: Puzzle,
}

impl HanoiProblem {
    /// Create a new problem from settings, loading the configured puzzle file
    pub fn new(settings: Settings) -> Result<Self> {
        let puzzle = load_puzzle_from_file(&settings.input.puzzle_file)
            .context("Failed to load puzzle file")?;

        Self::with_puzzle(settings, puzzle)
    }

    /// Create a problem with an explicit puzzle (useful for testing)
    pub fn with_puzzle(settings: Settings, puzzle: Puzzle) -> Result<Self> {
        if puzzle.disk_count() > settings.solver.max_disks {
            anyhow::bail!(
                "Puzzle has {} disks, exceeding the configured limit of {}",
                puzzle.disk_count(),
                settings.solver.max_disks
            );
        }

        Ok(Self { settings, puzzle })
    }

    /// Solve the puzzle. `Ok(None)` means the fixed search strategy found no
    /// legal move sequence; errors are reserved for faults, never for
    /// structural infeasibility.
    pub fn solve(&mut self) -> Result<Option<Solution>> {
        let start_time = Instant::now();

        let outcome = engine::solve(&self.puzzle);
        let solve_time = start_time.elapsed();

        let moves = match outcome {
            Outcome::Solved(moves) => moves,
            Outcome::Infeasible => return Ok(None),
        };

        // Replay the sequence independently; the history doubles as the
        // step-by-step record stored on the solution
        let replay = MoveValidator::validate(&self.puzzle, &moves);
        if self.settings.solver.validate_moves && !replay.is_valid {
            anyhow::bail!(
                "Solver produced an invalid move sequence: {}",
                replay
                    .error_message
                    .unwrap_or_else(|| "unknown violation".to_string())
            );
        }

        Ok(Some(Solution::new(
            self.puzzle.clone(),
            moves,
            replay.peg_history,
            solve_time,
        )))
    }

    /// Get the puzzle
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Get the problem settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Check if the puzzle is likely solvable before running the search
    pub fn estimate_solvability(&self) -> SolvabilityEstimate {
        let disks = self.puzzle.disks();

        // The final stack repeats the input order on peg C, so two adjacent
        // disks sharing a color make the target configuration itself illegal
        let same_color_adjacent: Vec<usize> = disks
            .iter()
            .tuple_windows()
            .enumerate()
            .filter(|(_, (below, above))| below.color == above.color)
            .map(|(i, _)| i)
            .collect();

        let unordered_sizes = disks
            .iter()
            .tuple_windows()
            .any(|(below, above)| above.size > below.size);

        let likelihood = if !same_color_adjacent.is_empty() {
            SolvabilityLikelihood::Impossible
        } else if self.puzzle.distinct_colors() <= 2 {
            // Pairwise-distinct colors from a two-color palette alternate
            // strictly, so the color gate never fires mid-recursion
            SolvabilityLikelihood::High
        } else {
            // The single-path strategy may still fail a legal target
            SolvabilityLikelihood::Medium
        };

        let recommendations =
            self.generate_recommendations(&same_color_adjacent, unordered_sizes);

        SolvabilityEstimate {
            likelihood,
            disk_count: self.puzzle.disk_count(),
            distinct_colors: self.puzzle.distinct_colors(),
            classical_bound: self.puzzle.move_upper_bound(),
            recommendations,
        }
    }

    fn generate_recommendations(
        &self,
        same_color_adjacent: &[usize],
        unordered_sizes: bool,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        for &i in same_color_adjacent {
            let color = self.puzzle.color_name(self.puzzle.disks()[i].color);
            recommendations.push(format!(
                "Disks {} and {} are both {}; the final stack cannot be assembled",
                i,
                i + 1,
                color
            ));
        }

        if unordered_sizes {
            recommendations.push(
                "Disk sizes are not ordered largest to smallest; the solver assumes \
                 bottom-first ordering and will not re-sort"
                    .to_string(),
            );
        }

        if self.puzzle.disk_count() > 20 {
            recommendations
                .push("Move sequences grow as 2^n - 1; expect long output".to_string());
        }

        if recommendations.is_empty() {
            recommendations.push("Puzzle looks reasonable to solve".to_string());
        }

        recommendations
    }
}

/// Estimate of puzzle solvability
#[derive(Debug, Clone)]
pub struct SolvabilityEstimate {
    pub likelihood: SolvabilityLikelihood,
    pub disk_count: usize,
    pub distinct_colors: usize,
    pub classical_bound: u128,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolvabilityLikelihood {
    High,
    Medium,
    /// The target configuration itself is illegal; no strategy can solve it
    Impossible,
}

impl std::fmt::Display for SolvabilityEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solvability Estimate:")?;
        writeln!(f, "  Likelihood: {:?}", self.likelihood)?;
        writeln!(f, "  Disks: {}", self.disk_count)?;
        writeln!(f, "  Distinct colors: {}", self.distinct_colors)?;
        writeln!(f, "  Classical move bound: {}", self.classical_bound)?;
        writeln!(f, "  Recommendations:")?;
        for rec in &self.recommendations {
            writeln!(f, "    - {}", rec)?;
        }
        Ok(())
    }
}
