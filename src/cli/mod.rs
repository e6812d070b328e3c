//! CLI interface for subset-automata.
//!
//! Provides the `convert`, `recognize` and `run` stages over file-based
//! automaton tables and word lists.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
