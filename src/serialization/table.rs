//! Plain-text transition tables.
//!
//! # Format
//!
//! Blank lines are ignored; every other line is whitespace-separated:
//!
//! ```text
//! A B C          line 1: all state names
//! A              line 2: the initial state
//! C              line 3: the final states
//! A h B          remaining lines: origin symbol destination
//! B 0 C
//! ```
//!
//! In the nondeterministic form the symbol may be the epsilon token `h` and
//! the same `(origin, symbol)` pair may repeat with different destinations.
//! In the deterministic form each pair appears at most once and epsilon never
//! occurs. Neither form declares its alphabet explicitly; it is inferred from
//! the non-epsilon symbols in the transition lines and kept sorted.

use super::TableError;
use crate::automaton::dfa::Dfa;
use crate::automaton::nfa::Nfa;
use crate::automaton::{Label, EPSILON_TOKEN};
use crate::diagnostics::{Diagnostics, Warning};
use std::io::{BufRead, BufReader, Read, Write};

fn content_lines<R: Read>(reader: R) -> Result<Vec<String>, TableError> {
    let mut lines = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}

/// Interpret a transition-line symbol token.
///
/// The epsilon token maps to [`Label::Epsilon`] and any other single
/// character is an alphabet symbol. A longer token cannot be a symbol; it is
/// coerced to epsilon with a warning, which keeps parsing total but silently
/// reinterprets the line's intent.
fn parse_label(token: &str, line: &str, diagnostics: &mut Diagnostics) -> Label {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c == EPSILON_TOKEN => Label::Epsilon,
        (Some(c), None) => Label::Symbol(c),
        _ => {
            diagnostics.warn(Warning::SymbolCoercedToEpsilon {
                token: token.to_string(),
                line: line.to_string(),
            });
            Label::Epsilon
        }
    }
}

/// Read a nondeterministic automaton table.
///
/// Transition lines without exactly three fields are skipped with a warning;
/// reading continues with the next line.
pub fn read_nfa<R: Read>(reader: R, diagnostics: &mut Diagnostics) -> Result<Nfa, TableError> {
    let lines = content_lines(reader)?;
    if lines.len() < 3 {
        return Err(TableError::MissingHeader);
    }

    let states = lines[0].split_whitespace();
    let initial = lines[1].as_str();
    let finals = lines[2].split_whitespace();
    let mut nfa = Nfa::new(states, initial, finals);

    for line in &lines[3..] {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[origin, symbol, destination] = fields.as_slice() else {
            diagnostics.warn(Warning::MalformedTransitionLine { line: line.clone() });
            continue;
        };
        let label = parse_label(symbol, line, diagnostics);
        nfa.add_transition(origin, label, destination);
    }

    Ok(nfa)
}

/// Read a deterministic automaton table.
///
/// Transition lines without exactly three fields, or whose symbol is not a
/// single character, are skipped with a warning.
pub fn read_dfa<R: Read>(reader: R, diagnostics: &mut Diagnostics) -> Result<Dfa, TableError> {
    let lines = content_lines(reader)?;
    if lines.len() < 3 {
        return Err(TableError::MissingHeader);
    }

    let mut dfa = Dfa::new(lines[1].as_str());
    for state in lines[0].split_whitespace() {
        dfa.add_state(state);
    }
    for state in lines[2].split_whitespace() {
        dfa.add_final_state(state);
    }

    for line in &lines[3..] {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[origin, symbol, destination] = fields.as_slice() else {
            diagnostics.warn(Warning::MalformedTransitionLine { line: line.clone() });
            continue;
        };
        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => dfa.add_transition(origin, c, destination),
            _ => diagnostics.warn(Warning::MalformedTransitionLine { line: line.clone() }),
        }
    }

    Ok(dfa)
}

/// Write a deterministic automaton table, everything sorted: states, final
/// states, then transitions by `(origin, symbol)`.
pub fn write_dfa<W: Write>(dfa: &Dfa, mut writer: W) -> Result<(), TableError> {
    let states: Vec<&str> = dfa.states().collect();
    writeln!(writer, "{}", states.join(" "))?;
    writeln!(writer, "{}", dfa.initial())?;
    let finals: Vec<&str> = dfa.finals().collect();
    writeln!(writer, "{}", finals.join(" "))?;
    for (origin, symbol, destination) in dfa.transitions() {
        writeln!(writer, "{origin} {symbol} {destination}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_NFA: &str = "\
A B C
A
C
A h B
B 0 C
B 1 B
";

    #[test]
    fn reads_nfa_table() {
        let mut diagnostics = Diagnostics::new();
        let nfa = read_nfa(SAMPLE_NFA.as_bytes(), &mut diagnostics).unwrap();

        assert!(diagnostics.is_clean());
        assert_eq!(nfa.initial(), "A");
        assert_eq!(nfa.states().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert_eq!(nfa.finals().collect::<Vec<_>>(), vec!["C"]);
        assert_eq!(nfa.alphabet().collect::<Vec<_>>(), vec!['0', '1']);
        assert_eq!(nfa.epsilon_closure_of("A").len(), 2);
    }

    #[test]
    fn skips_malformed_transition_lines() {
        let table = "A B\nA\nB\nA 0\nA 0 B\n";
        let mut diagnostics = Diagnostics::new();
        let nfa = read_nfa(table.as_bytes(), &mut diagnostics).unwrap();

        assert_eq!(
            diagnostics.warnings(),
            &[Warning::MalformedTransitionLine {
                line: "A 0".to_string()
            }]
        );
        // The well-formed line still made it in.
        assert_eq!(nfa.alphabet().collect::<Vec<_>>(), vec!['0']);
    }

    #[test]
    fn coerces_impossible_symbol_tokens_to_epsilon() {
        let table = "A B\nA\nB\nA eps B\n";
        let mut diagnostics = Diagnostics::new();
        let nfa = read_nfa(table.as_bytes(), &mut diagnostics).unwrap();

        assert!(matches!(
            diagnostics.warnings(),
            [Warning::SymbolCoercedToEpsilon { token, .. }] if token.as_str() == "eps"
        ));
        // Coerced to epsilon: alphabet stays empty, closure picks it up.
        assert_eq!(nfa.alphabet().count(), 0);
        assert!(nfa.epsilon_closure_of("A").contains("B"));
    }

    #[test]
    fn missing_header_is_fatal() {
        let mut diagnostics = Diagnostics::new();
        let result = read_nfa("A B\nA\n".as_bytes(), &mut diagnostics);
        assert!(matches!(result, Err(TableError::MissingHeader)));
    }

    #[test]
    fn dfa_table_round_trips() {
        let mut dfa = Dfa::new("AB");
        dfa.add_state("C");
        dfa.add_final_state("C");
        dfa.add_transition("AB", '0', "C");
        dfa.add_transition("C", '1', "C");

        let mut buffer = Vec::new();
        write_dfa(&dfa, &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer.clone()).unwrap(),
            "AB C\nAB\nC\nAB 0 C\nC 1 C\n"
        );

        let mut diagnostics = Diagnostics::new();
        let reread = read_dfa(buffer.as_slice(), &mut diagnostics).unwrap();
        assert!(diagnostics.is_clean());
        assert_eq!(reread.initial(), dfa.initial());
        assert_eq!(
            reread.transitions().collect::<Vec<_>>(),
            dfa.transitions().collect::<Vec<_>>()
        );
        assert_eq!(reread.finals().collect::<Vec<_>>(), vec!["C"]);
    }
}
