//! serato2cue CLI library.
//!
//! This crate provides the CLI interface for serato2cue.

mod cli;
mod config;
pub mod convert;

pub use cli::Cli;
pub use config::Config;
