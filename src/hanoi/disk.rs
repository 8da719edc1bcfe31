//! Core value types: disks, pegs, moves and validated puzzles

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Interned color token. Colors only ever need equality comparison, so the
/// original token string is kept once in the puzzle's palette and disks carry
/// a small id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorId(pub u32);

/// A single disk. Immutable after creation; only its peg membership changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disk {
    pub size: u32,
    pub color: ColorId,
}

/// Identity of one of the three pegs: A = source, B = auxiliary, C = target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PegId {
    A,
    B,
    C,
}

impl PegId {
    /// Index into a `[_; 3]` peg array
    #[inline]
    pub fn index(self) -> usize {
        match self {
            PegId::A => 0,
            PegId::B => 1,
            PegId::C => 2,
        }
    }
}

impl fmt::Display for PegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PegId::A => write!(f, "A"),
            PegId::B => write!(f, "B"),
            PegId::C => write!(f, "C"),
        }
    }
}

/// One legal single-disk relocation. The size is enough to identify the disk:
/// two disks sharing a peg cannot both be mid-move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub disk_size: u32,
    pub from: PegId,
    pub to: PegId,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.disk_size, self.from, self.to)
    }
}

/// Caller contract violations, raised before any peg state is constructed.
/// Never to be confused with the infeasible outcome of a structurally
/// unsolvable puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected {expected} disks but got {actual}")]
    DiskCountMismatch { expected: usize, actual: usize },

    #[error("disk {index} has size 0; sizes must be positive")]
    ZeroSize { index: usize },

    #[error("disk {index} has an empty color token")]
    EmptyColor { index: usize },
}

/// A validated puzzle: the initial disk stack (bottom first) plus the color
/// palette backing the interned `ColorId`s.
///
/// The disk list is expected to be ordered largest to smallest (ties
/// permitted); the solver relies on this ordering to mean "bottom-most disk
/// first" on the source peg and does not re-sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    disks: Vec<Disk>,
    palette: Vec<String>,
}

impl Puzzle {
    /// Build a puzzle from `(size, color token)` pairs, validating the caller
    /// contract: `specs.len() == n`, positive sizes, non-blank color tokens.
    pub fn from_specs(n: usize, specs: &[(u32, &str)]) -> Result<Self, InputError> {
        if specs.len() != n {
            return Err(InputError::DiskCountMismatch {
                expected: n,
                actual: specs.len(),
            });
        }

        let mut disks = Vec::with_capacity(n);
        let mut palette: Vec<String> = Vec::new();

        for (index, &(size, color)) in specs.iter().enumerate() {
            if size == 0 {
                return Err(InputError::ZeroSize { index });
            }
            let color = color.trim();
            if color.is_empty() {
                return Err(InputError::EmptyColor { index });
            }

            let color_id = match palette.iter().position(|known| known == color) {
                Some(pos) => ColorId(pos as u32),
                None => {
                    palette.push(color.to_string());
                    ColorId(palette.len() as u32 - 1)
                }
            };
            disks.push(Disk {
                size,
                color: color_id,
            });
        }

        Ok(Self { disks, palette })
    }

    /// The initial disk stack, bottom first
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Number of disks
    pub fn disk_count(&self) -> usize {
        self.disks.len()
    }

    /// Number of distinct colors in the puzzle
    pub fn distinct_colors(&self) -> usize {
        self.palette.len()
    }

    /// Original token string for an interned color
    pub fn color_name(&self, color: ColorId) -> &str {
        self.palette
            .get(color.0 as usize)
            .map(String::as_str)
            .unwrap_or("?")
    }

    /// Render a disk as `size:color` for display
    pub fn describe_disk(&self, disk: Disk) -> String {
        format!("{}:{}", disk.size, self.color_name(disk.color))
    }

    /// Classical upper bound on the move count for this puzzle: `2^n - 1`
    pub fn move_upper_bound(&self) -> u128 {
        (1u128 << self.disks.len()) - 1
    }
}
