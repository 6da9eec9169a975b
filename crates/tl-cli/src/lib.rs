//! Timeline trip analyzer CLI library.
//!
//! This crate provides the CLI interface for finding days with long car trips
//! in a location timeline export.

mod cli;
pub mod commands;
mod config;

pub use cli::Cli;
pub use config::Config;
