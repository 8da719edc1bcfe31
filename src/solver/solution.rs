//! Solution representation for solved puzzles

use crate::hanoi::{Disk, Move, PegId, Puzzle};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The three peg stacks at one point in a replay, top = last element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PegSnapshot {
    pub pegs: [Vec<Disk>; 3],
}

impl PegSnapshot {
    /// Initial configuration for a puzzle: everything on peg A
    pub fn initial(puzzle: &Puzzle) -> Self {
        Self {
            pegs: [puzzle.disks().to_vec(), Vec::new(), Vec::new()],
        }
    }

    pub fn peg(&self, id: PegId) -> &[Disk] {
        &self.pegs[id.index()]
    }
}

/// A complete solved puzzle: the validated move sequence plus replay history
/// and metadata. Infeasible runs never produce a `Solution`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// The puzzle that was solved
    pub puzzle: Puzzle,
    /// The full legal move sequence, in order
    pub moves: Vec<Move>,
    /// Peg configurations from the initial state through every move
    pub peg_history: Vec<PegSnapshot>,
    /// Time taken to find this solution
    #[serde(skip)]
    pub solve_time: Duration,
    /// Metadata about the solution
    pub metadata: SolutionMetadata,
}

/// Metadata about a solution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionMetadata {
    /// Number of disks in the puzzle
    pub disk_count: usize,
    /// Number of moves in the sequence
    pub move_count: usize,
    /// Classical upper bound for this disk count: 2^n - 1
    pub classical_bound: u128,
    /// Number of distinct colors in the puzzle
    pub distinct_colors: usize,
}

impl Solution {
    pub fn new(
        puzzle: Puzzle,
        moves: Vec<Move>,
        peg_history: Vec<PegSnapshot>,
        solve_time: Duration,
    ) -> Self {
        let metadata = SolutionMetadata {
            disk_count: puzzle.disk_count(),
            move_count: moves.len(),
            classical_bound: puzzle.move_upper_bound(),
            distinct_colors: puzzle.distinct_colors(),
        };

        Self {
            puzzle,
            moves,
            peg_history,
            solve_time,
            metadata,
        }
    }

    /// Final peg configuration, if the history was recorded
    pub fn final_state(&self) -> Option<&PegSnapshot> {
        self.peg_history.last()
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Create from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Save to file
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from file
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

impl std::fmt::Display for SolutionMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} disks, {} colors, {} moves (bound {})",
            self.disk_count, self.distinct_colors, self.move_count, self.classical_bound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_solution() -> Solution {
        let puzzle =
            Puzzle::from_specs(3, &[(3, "red"), (2, "blue"), (1, "red")]).unwrap();
        let moves = match crate::solver::engine::solve(&puzzle) {
            crate::solver::Outcome::Solved(moves) => moves,
            crate::solver::Outcome::Infeasible => panic!("reference puzzle must solve"),
        };
        let history = vec![PegSnapshot::initial(&puzzle)];
        Solution::new(puzzle, moves, history, Duration::from_millis(1))
    }

    #[test]
    fn test_metadata() {
        let solution = reference_solution();
        assert_eq!(solution.metadata.disk_count, 3);
        assert_eq!(solution.metadata.move_count, 7);
        assert_eq!(solution.metadata.classical_bound, 7);
        assert_eq!(solution.metadata.distinct_colors, 2);
        assert!(solution.final_state().is_some());
    }

    #[test]
    fn test_json_round_trip() {
        let solution = reference_solution();
        let json = solution.to_json().unwrap();
        let restored = Solution::from_json(&json).unwrap();

        assert_eq!(restored.moves, solution.moves);
        assert_eq!(restored.puzzle, solution.puzzle);
        assert_eq!(restored.metadata.move_count, solution.metadata.move_count);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solution.json");

        let solution = reference_solution();
        solution.save_to_file(&path).unwrap();
        let loaded = Solution::load_from_file(&path).unwrap();

        assert_eq!(loaded.moves, solution.moves);
    }

    #[test]
    fn test_initial_snapshot() {
        let puzzle = Puzzle::from_specs(2, &[(2, "red"), (1, "blue")]).unwrap();
        let snapshot = PegSnapshot::initial(&puzzle);

        assert_eq!(snapshot.peg(PegId::A), puzzle.disks());
        assert!(snapshot.peg(PegId::B).is_empty());
        assert!(snapshot.peg(PegId::C).is_empty());
    }
}
