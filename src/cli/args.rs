//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level command line.
#[derive(Parser)]
#[command(name = "subset-automata")]
#[command(about = "NFA to DFA conversion via subset construction, with word recognition")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Convert an NFA table into an equivalent DFA
    Convert {
        /// NFA definition file
        #[arg(short, long, default_value = "nfa.txt")]
        input: PathBuf,

        /// Directory for the DFA table and DOT renderings
        #[arg(short, long, default_value = "stage1")]
        out_dir: PathBuf,
    },

    /// Run a DFA over a word list
    Recognize {
        /// DFA table (the output of `convert`)
        #[arg(short, long, default_value = "stage1/dfa.txt")]
        dfa: PathBuf,

        /// Word list, one word per line; an empty line is the empty word
        #[arg(short, long, default_value = "words.txt")]
        words: PathBuf,

        /// Result file, one verdict per word in input order
        #[arg(short, long, default_value = "stage2/results.txt")]
        output: PathBuf,
    },

    /// Convert and then recognize in one run
    Run {
        /// NFA definition file
        #[arg(short, long, default_value = "nfa.txt")]
        input: PathBuf,

        /// Word list, one word per line; an empty line is the empty word
        #[arg(short, long, default_value = "words.txt")]
        words: PathBuf,

        /// Base directory for the stage1/ and stage2/ outputs
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
}
