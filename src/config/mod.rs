//! Configuration management for the colored Hanoi solver

pub mod settings;

pub use settings::{
    CliOverrides, InputConfig, OutputConfig, OutputFormat, Settings, SolverConfig,
};
