//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::automaton::dfa::{Dfa, Rejection, Verdict};
use crate::diagnostics::{Diagnostics, Warning};
use crate::serialization::dot::{render_dfa, render_nfa};
use crate::serialization::table::{read_dfa, read_nfa, write_dfa};
use crate::subset::construct;

use super::args::Commands;

/// Marker written in place of the empty word in result files.
pub const EMPTY_WORD_MARKER: &str = "(empty word)";

/// Name of the DFA table file produced by the convert stage.
pub const DFA_TABLE_FILE: &str = "dfa.txt";

/// Execute a CLI command
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Convert { input, out_dir } => cmd_convert(&input, &out_dir),
        Commands::Recognize { dfa, words, output } => cmd_recognize(&dfa, &words, &output),
        Commands::Run {
            input,
            words,
            out_dir,
        } => {
            // The recognize stage consumes the convert stage's output, so a
            // failed convert aborts the whole run.
            let stage1 = out_dir.join("stage1");
            cmd_convert(&input, &stage1)?;
            cmd_recognize(
                &stage1.join(DFA_TABLE_FILE),
                &words,
                &out_dir.join("stage2").join("results.txt"),
            )
        }
    }
}

fn print_warnings(diagnostics: &Diagnostics) {
    for warning in diagnostics.warnings() {
        eprintln!("{}: {}", "Warning".yellow().bold(), warning);
    }
}

fn cmd_convert(input: &Path, out_dir: &Path) -> Result<()> {
    let mut diagnostics = Diagnostics::new();

    let file = File::open(input)
        .with_context(|| format!("could not open NFA definition '{}'", input.display()))?;
    let nfa = read_nfa(file, &mut diagnostics)
        .with_context(|| format!("could not read NFA definition '{}'", input.display()))?;
    print_warnings(&diagnostics);

    fs::create_dir_all(out_dir)
        .with_context(|| format!("could not create output directory '{}'", out_dir.display()))?;

    let nfa_dot = out_dir.join("nfa.dot");
    fs::write(&nfa_dot, render_nfa(&nfa, "NFA"))
        .with_context(|| format!("could not write '{}'", nfa_dot.display()))?;

    let dfa = construct(&nfa);

    let table_path = out_dir.join(DFA_TABLE_FILE);
    let table = File::create(&table_path)
        .with_context(|| format!("could not create '{}'", table_path.display()))?;
    write_dfa(&dfa, BufWriter::new(table))
        .with_context(|| format!("could not write '{}'", table_path.display()))?;

    let dfa_dot = out_dir.join("dfa.dot");
    fs::write(&dfa_dot, render_dfa(&dfa, "DFA"))
        .with_context(|| format!("could not write '{}'", dfa_dot.display()))?;

    println!(
        "Converted '{}': {} DFA states, table written to '{}'",
        input.display(),
        dfa.states().count(),
        table_path.display()
    );
    println!("DFA state composition:");
    for (name, members) in dfa.composition() {
        let members: Vec<&str> = members.iter().map(String::as_str).collect();
        println!("  {} -> {{{}}}", name, members.join(", "));
    }

    Ok(())
}

fn cmd_recognize(dfa_path: &Path, words_path: &Path, output: &Path) -> Result<()> {
    let mut diagnostics = Diagnostics::new();

    let file = File::open(dfa_path).with_context(|| {
        format!(
            "could not open DFA table '{}' (run `convert` first to produce it)",
            dfa_path.display()
        )
    })?;
    let dfa = read_dfa(file, &mut diagnostics)
        .with_context(|| format!("could not read DFA table '{}'", dfa_path.display()))?;

    let words = fs::read_to_string(words_path)
        .with_context(|| format!("could not open word list '{}'", words_path.display()))?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("could not create output directory '{}'", parent.display())
            })?;
        }
    }
    let mut out = BufWriter::new(
        File::create(output)
            .with_context(|| format!("could not create '{}'", output.display()))?,
    );

    let results = recognize_words(&dfa, &words, &mut diagnostics);
    let total = results.len();
    let mut accepted = 0usize;
    for (word, accept) in &results {
        if *accept {
            accepted += 1;
        }
        let shown = if word.is_empty() { EMPTY_WORD_MARKER } else { word.as_str() };
        let result = if *accept { "accepted" } else { "rejected" };
        writeln!(out, "{shown} {result}")
            .with_context(|| format!("could not write '{}'", output.display()))?;
    }
    out.flush()
        .with_context(|| format!("could not write '{}'", output.display()))?;

    print_warnings(&diagnostics);
    println!(
        "Recognized {} words ({} accepted), results written to '{}'",
        total,
        accepted,
        output.display()
    );

    Ok(())
}

/// Run a word list through a DFA, returning `(word, accepted)` pairs in input
/// order. An empty line is the empty word. Words containing symbols outside
/// the alphabet are rejected with a warning.
pub fn recognize_words(dfa: &Dfa, words: &str, diagnostics: &mut Diagnostics) -> Vec<(String, bool)> {
    words
        .lines()
        .map(str::trim_end)
        .map(|word| {
            let verdict = dfa.accepts(word);
            if let Verdict::Reject(Rejection::UnknownSymbol(symbol)) = verdict {
                diagnostics.warn(Warning::WordOutsideAlphabet {
                    word: word.to_string(),
                    symbol,
                });
            }
            (word.to_string(), verdict.is_accept())
        })
        .collect()
}
