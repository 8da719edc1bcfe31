//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::solver::{PegSnapshot, Solution};
use crate::hanoi::{PegId, Puzzle};
use anyhow::Result;
use itertools::Itertools;
use std::path::Path;

/// Format solutions for display
pub struct SolutionFormatter;

impl SolutionFormatter {
    /// Format a single solution for console output
    pub fn format_solution(solution: &Solution, show_steps: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!("=== Solution ({}) ===\n", solution.metadata));
        output.push_str(&format!(
            "Solve Time: {:.3}ms\n",
            solution.solve_time.as_secs_f64() * 1000.0
        ));
        output.push('\n');

        if show_steps {
            output.push_str("Steps:\n");
            output.push_str("Initial:\n");
            if let Some(initial) = solution.peg_history.first() {
                output.push_str(&Self::format_peg_snapshot(initial, &solution.puzzle));
            }
            for (i, mv) in solution.moves.iter().enumerate() {
                output.push_str(&format!("\nMove {}: {}\n", i + 1, mv));
                if let Some(snapshot) = solution.peg_history.get(i + 1) {
                    output.push_str(&Self::format_peg_snapshot(snapshot, &solution.puzzle));
                }
            }
        } else {
            output.push_str("Moves:\n");
            output.push_str(&Self::format_move_sequence(solution));
            output.push('\n');
        }

        output
    }

    /// Format the move sequence as a single line of `(size, from, to)` tuples
    pub fn format_move_sequence(solution: &Solution) -> String {
        format!(
            "[{}]",
            solution.moves.iter().map(|m| m.to_string()).join(", ")
        )
    }

    /// Render the three pegs, one per line, bottom to top
    pub fn format_peg_snapshot(snapshot: &PegSnapshot, puzzle: &Puzzle) -> String {
        let mut output = String::new();
        for peg in [PegId::A, PegId::B, PegId::C] {
            let disks = snapshot
                .peg(peg)
                .iter()
                .map(|&disk| puzzle.describe_disk(disk))
                .join(" ");
            output.push_str(&format!("{} | {}\n", peg, disks));
        }
        output
    }

    /// One-line summary of a solution
    pub fn format_summary(solution: &Solution) -> String {
        format!(
            "{} in {:.3}ms",
            solution.metadata,
            solution.solve_time.as_secs_f64() * 1000.0
        )
    }

    /// Save a solution to the output directory in the configured format
    pub fn save_solution<P: AsRef<Path>>(
        solution: &Solution,
        output_dir: P,
        format: &OutputFormat,
    ) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)?;

        match format {
            OutputFormat::Text => {
                let filepath = output_dir.join("solution.txt");
                std::fs::write(filepath, Self::format_solution(solution, false))?;
            }
            OutputFormat::Json => {
                let filepath = output_dir.join("solution.json");
                solution.save_to_file(filepath)?;
            }
            OutputFormat::Visual => {
                let filepath = output_dir.join("solution_steps.txt");
                std::fs::write(filepath, Self::format_solution(solution, true))?;
            }
        }

        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::engine::{solve, Outcome};
    use crate::solver::MoveValidator;
    use std::time::Duration;

    fn reference_solution() -> Solution {
        let puzzle =
            Puzzle::from_specs(3, &[(3, "red"), (2, "blue"), (1, "red")]).unwrap();
        let moves = match solve(&puzzle) {
            Outcome::Solved(moves) => moves,
            Outcome::Infeasible => panic!("reference puzzle must solve"),
        };
        let replay = MoveValidator::validate(&puzzle, &moves);
        Solution::new(puzzle, moves, replay.peg_history, Duration::from_millis(1))
    }

    #[test]
    fn test_move_sequence_format() {
        let solution = reference_solution();
        let line = SolutionFormatter::format_move_sequence(&solution);
        assert_eq!(
            line,
            "[(1, A, C), (2, A, B), (1, C, B), (3, A, C), (1, B, A), (2, B, C), (1, A, C)]"
        );
    }

    #[test]
    fn test_peg_snapshot_format() {
        let solution = reference_solution();
        let initial = solution.peg_history.first().unwrap();
        let rendered = SolutionFormatter::format_peg_snapshot(initial, &solution.puzzle);

        assert!(rendered.contains("A | 3:red 2:blue 1:red"));
        assert!(rendered.contains("B | \n"));
        assert!(rendered.contains("C | \n"));
    }

    #[test]
    fn test_step_output_covers_every_move() {
        let solution = reference_solution();
        let steps = SolutionFormatter::format_solution(&solution, true);
        assert!(steps.contains("Move 1:"));
        assert!(steps.contains("Move 7:"));
    }

    #[test]
    fn test_save_solution_formats() {
        let dir = tempfile::tempdir().unwrap();
        let solution = reference_solution();

        SolutionFormatter::save_solution(&solution, dir.path(), &OutputFormat::Text).unwrap();
        assert!(dir.path().join("solution.txt").exists());

        SolutionFormatter::save_solution(&solution, dir.path(), &OutputFormat::Json).unwrap();
        let loaded = Solution::load_from_file(dir.path().join("solution.json")).unwrap();
        assert_eq!(loaded.moves, solution.moves);

        SolutionFormatter::save_solution(&solution, dir.path(), &OutputFormat::Visual).unwrap();
        assert!(dir.path().join("solution_steps.txt").exists());
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Should either be colored or plain text
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
