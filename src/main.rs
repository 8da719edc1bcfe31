//! Main CLI application for the colored Hanoi solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored_hanoi::{
    config::{CliOverrides, OutputFormat, Settings},
    hanoi::{create_example_puzzles, load_puzzle_from_file},
    solver::{solve_batch, HanoiProblem, MoveValidator, Outcome, Solution},
    utils::{ColorOutput, SolutionFormatter},
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "colored_hanoi")]
#[command(about = "Colored Tower of Hanoi Solver")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a colored Hanoi puzzle
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Puzzle file (overrides config)
        #[arg(short, long)]
        puzzle: Option<PathBuf>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: text, json or visual (overrides config)
        #[arg(short, long)]
        format: Option<String>,

        /// Show the peg layout after every move
        #[arg(long)]
        show_steps: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Solve every puzzle file in a directory in parallel
    Batch {
        /// Directory containing puzzle .txt files
        #[arg(short, long)]
        directory: PathBuf,
    },

    /// Create example configuration and puzzle files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Replay a saved solution against a puzzle file
    Validate {
        /// Puzzle file
        #[arg(short, long)]
        puzzle: PathBuf,

        /// Solution JSON file
        #[arg(short, long)]
        solution: PathBuf,
    },

    /// Analyze a puzzle for solvability
    Analyze {
        /// Puzzle file
        #[arg(short, long)]
        puzzle: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            config,
            puzzle,
            output,
            format,
            show_steps,
            verbose,
        } => solve_command(config, puzzle, output, format, show_steps, verbose),
        Commands::Batch { directory } => batch_command(directory),
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Validate { puzzle, solution } => validate_command(puzzle, solution),
        Commands::Analyze { puzzle } => analyze_command(puzzle),
    }
}

fn parse_format(format: &str) -> Result<OutputFormat> {
    match format {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        "visual" => Ok(OutputFormat::Visual),
        other => anyhow::bail!("Unknown output format {:?} (expected text, json or visual)", other),
    }
}

fn solve_command(
    config_path: PathBuf,
    puzzle_file: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    format: Option<String>,
    show_steps: bool,
    verbose: bool,
) -> Result<()> {
    println!("{}", ColorOutput::info("Starting colored Hanoi solver"));

    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    // Apply CLI overrides
    let cli_overrides = CliOverrides {
        puzzle_file,
        output_dir,
        format: format.as_deref().map(parse_format).transpose()?,
        max_disks: None,
    };
    settings.merge_with_cli(&cli_overrides);

    if verbose {
        println!("Configuration:");
        println!("  Puzzle file: {}", settings.input.puzzle_file.display());
        println!("  Max disks: {}", settings.solver.max_disks);
        println!("  Output dir: {}", settings.output.output_directory.display());
        println!();
    }

    settings
        .validate()
        .context("Configuration validation failed")?;

    let start_time = Instant::now();
    let mut problem =
        HanoiProblem::new(settings.clone()).context("Failed to create problem")?;

    if verbose {
        println!("{}", problem.estimate_solvability());
    }

    let solution = problem.solve().context("Failed to solve puzzle")?;
    let total_time = start_time.elapsed();

    let solution = match solution {
        Some(solution) => solution,
        None => {
            println!(
                "{}",
                ColorOutput::warning(
                    "Infeasible: no legal move sequence exists under this strategy"
                )
            );
            return Ok(());
        }
    };

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Solved: {} in {:.3}s",
            solution.metadata,
            total_time.as_secs_f64()
        ))
    );
    println!("\n{}", SolutionFormatter::format_solution(&solution, show_steps));

    SolutionFormatter::save_solution(
        &solution,
        &settings.output.output_directory,
        &settings.output.format,
    )
    .context("Failed to save solution")?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Solution saved to {}",
            settings.output.output_directory.display()
        ))
    );

    Ok(())
}

fn batch_command(directory: PathBuf) -> Result<()> {
    println!(
        "{}",
        ColorOutput::info(&format!("Solving puzzles in {}", directory.display()))
    );

    let mut entries: Vec<PathBuf> = std::fs::read_dir(&directory)
        .with_context(|| format!("Failed to read directory {}", directory.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "txt").unwrap_or(false))
        .collect();
    entries.sort();

    if entries.is_empty() {
        anyhow::bail!("No .txt puzzle files found in {}", directory.display());
    }

    let mut puzzles = Vec::new();
    let mut names = Vec::new();
    for path in &entries {
        match load_puzzle_from_file(path) {
            Ok(puzzle) => {
                puzzles.push(puzzle);
                names.push(path.clone());
            }
            Err(e) => {
                eprintln!(
                    "{}",
                    ColorOutput::error(&format!("Skipping {}: {:#}", path.display(), e))
                );
            }
        }
    }

    let start_time = Instant::now();
    let outcomes = solve_batch(&puzzles);
    let total_time = start_time.elapsed();

    let mut solved = 0;
    for (path, outcome) in names.iter().zip(&outcomes) {
        match outcome {
            Outcome::Solved(moves) => {
                solved += 1;
                println!(
                    "{}: {}",
                    path.display(),
                    ColorOutput::success(&format!("solved in {} moves", moves.len()))
                );
            }
            Outcome::Infeasible => {
                println!(
                    "{}: {}",
                    path.display(),
                    ColorOutput::warning("infeasible")
                );
            }
        }
    }

    println!(
        "\n{}",
        ColorOutput::info(&format!(
            "{}/{} puzzles solved in {:.3}s",
            solved,
            outcomes.len(),
            total_time.as_secs_f64()
        ))
    );

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let input_dir = directory.join("input/puzzles");
    let output_dir = directory.join("output/solutions");

    for dir in [&config_dir, &input_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let default_settings = Settings::default();
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_puzzles(&input_dir).context("Failed to create example puzzles")?;
    println!("Created example puzzles in: {}", input_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your puzzles to {}", input_dir.display());
    println!("3. Run: cargo run -- solve --config config/default.yaml");

    Ok(())
}

fn validate_command(puzzle_path: PathBuf, solution_path: PathBuf) -> Result<()> {
    println!("{}", ColorOutput::info("Validating solution..."));

    let puzzle = load_puzzle_from_file(&puzzle_path)
        .with_context(|| format!("Failed to load puzzle from {}", puzzle_path.display()))?;

    let solution = Solution::load_from_file(&solution_path)
        .with_context(|| format!("Failed to load solution from {}", solution_path.display()))?;

    let result = MoveValidator::validate(&puzzle, &solution.moves);
    println!("{}", result);

    if result.is_valid {
        println!("{}", ColorOutput::success("Solution is valid!"));
    } else {
        println!("{}", ColorOutput::error("Solution is invalid"));
    }

    Ok(())
}

fn analyze_command(puzzle_path: PathBuf) -> Result<()> {
    println!("{}", ColorOutput::info("Analyzing puzzle..."));

    let puzzle = load_puzzle_from_file(&puzzle_path)
        .with_context(|| format!("Failed to load puzzle from {}", puzzle_path.display()))?;

    println!("Puzzle ({} disks):", puzzle.disk_count());
    for (i, &disk) in puzzle.disks().iter().enumerate() {
        println!("  {}: {}", i, puzzle.describe_disk(disk));
    }
    println!();

    let problem = HanoiProblem::with_puzzle(Settings::default(), puzzle)
        .context("Failed to create problem for analysis")?;
    println!("{}", problem.estimate_solvability());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "colored_hanoi",
            "solve",
            "--config",
            "test.yaml",
            "--show-steps",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("json").unwrap(), OutputFormat::Json);
        assert!(parse_format("xml").is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("input/puzzles/three_disks.txt").exists());
    }

    #[test]
    fn test_batch_command() {
        let temp_dir = tempdir().unwrap();
        create_example_puzzles(temp_dir.path()).unwrap();

        let result = batch_command(temp_dir.path().to_path_buf());
        assert!(result.is_ok());
    }
}
