//! subset-automata - NFA to DFA conversion and word recognition
//!
//! Reads an automaton transition table, converts it into an equivalent DFA
//! via the subset construction, and runs word lists through the result.

use clap::Parser;
use colored::Colorize;
use std::process;

use subset_automata::cli::{commands, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli.command) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
