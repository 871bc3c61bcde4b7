//! CLI commands

pub mod generate;
pub mod types;

pub use types::Cli;
