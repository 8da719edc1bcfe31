//! Solver engine, problem orchestration and solution handling

pub mod engine;
pub mod problem;
pub mod solution;
pub mod validator;

pub use engine::{solve, solve_batch, Outcome};
pub use problem::{HanoiProblem, SolvabilityEstimate, SolvabilityLikelihood};
pub use solution::{PegSnapshot, Solution, SolutionMetadata};
pub use validator::{MoveValidator, ValidationResult};
