//! # subset-automata
//!
//! Conversion of nondeterministic finite automata (with epsilon moves) into
//! equivalent deterministic finite automata via the subset construction, plus
//! deterministic simulation of the result over input words.
//!
//! Automata are read from and written to a plain-text transition-table format
//! and can be rendered to Graphviz DOT for visualization.
//!
//! ## Example
//!
//! ```rust
//! use subset_automata::prelude::*;
//!
//! let mut nfa = Nfa::new(["A", "B", "C"], "A", ["C"]);
//! nfa.add_transition("A", Label::Epsilon, "B");
//! nfa.add_transition("B", Label::Symbol('0'), "C");
//!
//! let dfa = construct(&nfa);
//! assert!(dfa.accepts("0").is_accept());
//! assert!(!dfa.accepts("1").is_accept());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod automaton;
pub mod diagnostics;
pub mod serialization;
pub mod subset;

/// CLI interface and command implementations
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::automaton::dfa::{Dfa, Rejection, Verdict};
    pub use crate::automaton::nfa::Nfa;
    pub use crate::automaton::Label;
    pub use crate::diagnostics::{Diagnostics, Warning};
    pub use crate::serialization::table::{read_dfa, read_nfa, write_dfa};
    pub use crate::subset::{construct, StateNamer};
}
