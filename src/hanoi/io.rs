//! File I/O for puzzle definitions

use super::Puzzle;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a puzzle from a text file.
/// Format: one disk per line as `<size> <color>`, bottom-most (largest) disk
/// first. Blank lines and lines starting with `#` are ignored.
pub fn load_puzzle_from_file<P: AsRef<Path>>(path: P) -> Result<Puzzle> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read puzzle file: {}", path.as_ref().display()))?;

    parse_puzzle_from_string(&content)
        .with_context(|| format!("Failed to parse puzzle from file: {}", path.as_ref().display()))
}

/// Parse a puzzle from its string representation
pub fn parse_puzzle_from_string(content: &str) -> Result<Puzzle> {
    let mut specs: Vec<(u32, &str)> = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut parts = line.split_whitespace();
        let size_token = parts.next();
        let color_token = parts.next();

        let (size_token, color) = match (size_token, color_token) {
            (Some(size), Some(color)) => (size, color),
            _ => anyhow::bail!(
                "Line {}: expected `<size> <color>`, got {:?}",
                line_no + 1,
                line
            ),
        };
        if let Some(extra) = parts.next() {
            anyhow::bail!(
                "Line {}: unexpected trailing token {:?} after `<size> <color>`",
                line_no + 1,
                extra
            );
        }

        let size: u32 = size_token.parse().with_context(|| {
            format!("Line {}: invalid disk size {:?}", line_no + 1, size_token)
        })?;

        specs.push((size, color));
    }

    if specs.is_empty() {
        anyhow::bail!("Puzzle file is empty or contains no disk lines");
    }

    let n = specs.len();
    Puzzle::from_specs(n, &specs).context("Puzzle failed input validation")
}

/// Save a puzzle to a text file in the same format `load_puzzle_from_file` reads
pub fn save_puzzle_to_file<P: AsRef<Path>>(puzzle: &Puzzle, path: P) -> Result<()> {
    let mut content = String::from("# <size> <color>, bottom-most disk first\n");
    for &disk in puzzle.disks() {
        content.push_str(&format!(
            "{} {}\n",
            disk.size,
            puzzle.color_name(disk.color)
        ));
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write puzzle file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Create example puzzle files in the given directory
pub fn create_example_puzzles<P: AsRef<Path>>(directory: P) -> Result<()> {
    let directory = directory.as_ref();
    std::fs::create_dir_all(directory)
        .with_context(|| format!("Failed to create directory {}", directory.display()))?;

    // Classic solvable three-disk puzzle
    let three_disks = "# Solvable in 7 moves\n3 red\n2 blue\n1 red\n";
    std::fs::write(directory.join("three_disks.txt"), three_disks)?;

    // Two same-colored disks: the small one can never land on the big one
    let infeasible = "# No legal solution exists for this stack\n2 red\n1 red\n";
    std::fs::write(directory.join("two_red.txt"), infeasible)?;

    let single = "1 green\n";
    std::fs::write(directory.join("single_disk.txt"), single)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_basic_puzzle() {
        let puzzle = parse_puzzle_from_string("3 red\n2 blue\n1 red\n").unwrap();
        assert_eq!(puzzle.disk_count(), 3);
        assert_eq!(puzzle.disks()[0].size, 3);
        assert_eq!(puzzle.color_name(puzzle.disks()[1].color), "blue");
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let content = "# header\n\n2 red\n\n# middle\n1 blue\n";
        let puzzle = parse_puzzle_from_string(content).unwrap();
        assert_eq!(puzzle.disk_count(), 2);
    }

    #[test]
    fn test_parse_rejects_missing_color() {
        assert!(parse_puzzle_from_string("3\n").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_size() {
        assert!(parse_puzzle_from_string("big red\n").is_err());
    }

    #[test]
    fn test_parse_rejects_trailing_tokens() {
        assert!(parse_puzzle_from_string("3 red extra\n").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_file() {
        assert!(parse_puzzle_from_string("# only comments\n\n").is_err());
    }

    #[test]
    fn test_zero_size_rejected_at_parse() {
        assert!(parse_puzzle_from_string("0 red\n").is_err());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("puzzle.txt");

        let puzzle = parse_puzzle_from_string("3 red\n2 blue\n1 red\n").unwrap();
        save_puzzle_to_file(&puzzle, &path).unwrap();

        let loaded = load_puzzle_from_file(&path).unwrap();
        assert_eq!(loaded, puzzle);
    }

    #[test]
    fn test_create_example_puzzles() {
        let dir = tempdir().unwrap();
        create_example_puzzles(dir.path()).unwrap();

        let classic = load_puzzle_from_file(dir.path().join("three_disks.txt")).unwrap();
        assert_eq!(classic.disk_count(), 3);

        let infeasible = load_puzzle_from_file(dir.path().join("two_red.txt")).unwrap();
        assert_eq!(infeasible.disk_count(), 2);
        assert_eq!(infeasible.distinct_colors(), 1);
    }
}
