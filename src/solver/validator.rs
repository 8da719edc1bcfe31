//! Independent replay validation of move sequences
//!
//! Re-checks every recorded move against the placement rules from scratch,
//! without trusting anything the planner did. Used both on freshly produced
//! solutions and on solution files loaded from disk.

use super::solution::PegSnapshot;
use crate::hanoi::{Move, PegId, PlacementRules, Puzzle};

/// Validates move sequences against a puzzle
pub struct MoveValidator;

/// Result of replaying a move sequence
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Peg configurations from the initial state through every applied move
    pub peg_history: Vec<PegSnapshot>,
    pub error_message: Option<String>,
    pub details: ValidationDetails,
}

/// Detailed validation information
#[derive(Debug, Clone)]
pub struct ValidationDetails {
    pub moves_checked: usize,
    pub within_classical_bound: bool,
    pub final_stack_matches: bool,
    pub violations: Vec<MoveViolation>,
}

/// A single illegal step found during replay
#[derive(Debug, Clone)]
pub struct MoveViolation {
    pub move_index: usize,
    pub mv: Move,
    pub description: String,
}

impl MoveValidator {
    /// Replay `moves` from the puzzle's initial configuration.
    ///
    /// The replay stops at the first violation, since peg state is undefined
    /// past an illegal move. A valid sequence must also end with every disk
    /// on peg C in the same bottom-to-top order as the input, and stay within
    /// the classical 2^n - 1 move bound.
    pub fn validate(puzzle: &Puzzle, moves: &[Move]) -> ValidationResult {
        let mut state = PegSnapshot::initial(puzzle);
        let mut peg_history = vec![state.clone()];
        let mut violations = Vec::new();

        let within_classical_bound = (moves.len() as u128) <= puzzle.move_upper_bound();

        let mut moves_checked = 0;
        for (move_index, &mv) in moves.iter().enumerate() {
            moves_checked += 1;

            if let Some(description) = Self::check_move(&state, mv) {
                violations.push(MoveViolation {
                    move_index,
                    mv,
                    description,
                });
                break;
            }

            // check_move verified the source peg is non-empty
            if let Some(disk) = state.pegs[mv.from.index()].pop() {
                state.pegs[mv.to.index()].push(disk);
            }
            peg_history.push(state.clone());
        }

        let final_stack_matches = violations.is_empty()
            && state.peg(PegId::A).is_empty()
            && state.peg(PegId::B).is_empty()
            && state.peg(PegId::C) == puzzle.disks();

        let is_valid = violations.is_empty() && final_stack_matches && within_classical_bound;

        let details = ValidationDetails {
            moves_checked,
            within_classical_bound,
            final_stack_matches,
            violations,
        };

        let error_message = if !is_valid {
            Some(Self::describe_failure(&details))
        } else {
            None
        };

        ValidationResult {
            is_valid,
            peg_history,
            error_message,
            details,
        }
    }

    /// Check one move against the current state; `None` means legal
    fn check_move(state: &PegSnapshot, mv: Move) -> Option<String> {
        let top = match state.peg(mv.from).last() {
            Some(&top) => top,
            None => return Some(format!("Source peg {} is empty", mv.from)),
        };

        if top.size != mv.disk_size {
            return Some(format!(
                "Top of peg {} has size {}, move recorded size {}",
                mv.from, top.size, mv.disk_size
            ));
        }

        if !PlacementRules::can_place(top, state.peg(mv.to)) {
            return Some(format!(
                "Disk {} may not be placed on peg {}",
                mv.disk_size, mv.to
            ));
        }

        None
    }

    fn describe_failure(details: &ValidationDetails) -> String {
        let mut message = String::new();

        if !details.within_classical_bound {
            message.push_str("Move count exceeds the classical bound. ");
        }

        for violation in &details.violations {
            message.push_str(&format!(
                "Move {} {}: {}. ",
                violation.move_index, violation.mv, violation.description
            ));
        }

        if details.violations.is_empty() && !details.final_stack_matches {
            message.push_str("Final state does not place all disks on peg C in input order.");
        }

        message.trim_end().to_string()
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Validation Result: {}",
            if self.is_valid { "VALID" } else { "INVALID" }
        )?;

        if let Some(ref error) = self.error_message {
            writeln!(f, "Error: {}", error)?;
        }

        writeln!(f, "Moves checked: {}", self.details.moves_checked)?;
        writeln!(
            f,
            "Within classical bound: {}",
            self.details.within_classical_bound
        )?;
        writeln!(
            f,
            "Final stack matches: {}",
            self.details.final_stack_matches
        )?;
        writeln!(f, "Violations: {}", self.details.violations.len())?;

        Ok(())
    }
}
