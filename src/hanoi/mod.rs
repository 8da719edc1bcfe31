//! Colored Tower of Hanoi domain model

pub mod disk;
pub mod io;
pub mod rules;

pub use disk::{ColorId, Disk, InputError, Move, PegId, Puzzle};
pub use io::{create_example_puzzles, load_puzzle_from_file, parse_puzzle_from_string, save_puzzle_to_file};
pub use rules::PlacementRules;
