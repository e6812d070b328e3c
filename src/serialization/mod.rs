//! Reading and writing automata.
//!
//! Automata travel as plain-text transition tables (see [`table`]) and can be
//! rendered to Graphviz DOT (see [`dot`]). Parsing resolves recoverable
//! problems into [`crate::diagnostics::Warning`]s at this boundary, so the
//! core algorithms only ever see structurally valid automata.

pub mod dot;
pub mod table;

pub use self::table::{read_dfa, read_nfa, write_dfa};

/// Errors that can occur while reading or writing an automaton table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Reading or writing the underlying stream failed.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
    /// The table is missing one of its three header lines (states, initial
    /// state, final states).
    #[error("automaton table needs three header lines: states, initial state, final states")]
    MissingHeader,
}
