//! codemix CLI library
//!
//! This library provides the command-line interface for the codemix
//! code-switching analysis and dialect transformation tools.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod interactive;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
