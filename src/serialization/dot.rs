//! Graphviz DOT rendering.
//!
//! Renders either automaton form as a left-to-right directed graph: final
//! states drawn as double circles, an unnamed point node feeding an arrow
//! into the initial state, and epsilon edges labeled `ε`. Edges come out
//! sorted, so rendering the same automaton twice yields identical output.

use crate::automaton::dfa::Dfa;
use crate::automaton::nfa::Nfa;
use crate::automaton::{Label, EPSILON_DISPLAY};
use std::fmt::Write;

fn header(out: &mut String, name: &str, finals: &[&str], initial: &str) {
    let _ = writeln!(out, "digraph {name} {{");
    let _ = writeln!(out, "    rankdir=LR;");
    let _ = writeln!(out, "    node [shape = circle];");
    for state in finals {
        let _ = writeln!(out, "    node [shape = doublecircle]; \"{state}\";");
    }
    let _ = writeln!(out, "    node [shape = circle];");
    let _ = writeln!(out, "    \"\" [shape=point];");
    let _ = writeln!(out, "    \"\" -> \"{initial}\";");
    let _ = writeln!(out);
}

/// Render a nondeterministic automaton. Epsilon edges are labeled with
/// [`EPSILON_DISPLAY`] rather than the wire token.
pub fn render_nfa(nfa: &Nfa, name: &str) -> String {
    let mut out = String::new();
    let finals: Vec<&str> = nfa.finals().collect();
    header(&mut out, name, &finals, nfa.initial());

    for (origin, label, destination) in nfa.transitions() {
        let label = match label {
            Label::Symbol(c) => c.to_string(),
            Label::Epsilon => EPSILON_DISPLAY.to_string(),
        };
        let _ = writeln!(
            out,
            "    \"{origin}\" -> \"{destination}\" [label = \"{label}\"];"
        );
    }

    out.push('}');
    out
}

/// Render a deterministic automaton.
pub fn render_dfa(dfa: &Dfa, name: &str) -> String {
    let mut out = String::new();
    let finals: Vec<&str> = dfa.finals().collect();
    header(&mut out, name, &finals, dfa.initial());

    for (origin, symbol, destination) in dfa.transitions() {
        let _ = writeln!(
            out,
            "    \"{origin}\" -> \"{destination}\" [label = \"{symbol}\"];"
        );
    }

    out.push('}');
    out
}
