//! Deterministic finite automaton and word recognition.

use std::collections::{BTreeMap, BTreeSet};

/// A deterministic finite automaton.
///
/// The transition map is partial: an undefined `(state, symbol)` entry stands
/// for an implicit, unmaterialized sink state. The sink never appears in the
/// state set or the final-state set; reaching it during simulation is a
/// deterministic rejection.
///
/// When produced by subset construction, the automaton also carries the
/// composition mapping from each canonical state name to the set of original
/// nondeterministic states it stands for (for diagnostics).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    states: BTreeSet<String>,
    alphabet: BTreeSet<char>,
    transitions: BTreeMap<String, BTreeMap<char, String>>,
    initial: String,
    finals: BTreeSet<String>,
    composition: BTreeMap<String, BTreeSet<String>>,
}

/// Outcome of recognizing one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The word belongs to the recognized language.
    Accept,
    /// The word was rejected, with the reason observed first.
    Reject(Rejection),
}

impl Verdict {
    /// Whether the word was accepted.
    pub fn is_accept(self) -> bool {
        matches!(self, Verdict::Accept)
    }
}

/// Why a word was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The word contains a symbol outside the automaton's alphabet; the word
    /// is malformed with respect to this automaton.
    UnknownSymbol(char),
    /// No transition was defined for the current state and symbol: the
    /// implicit sink was reached.
    NoTransition,
    /// Every symbol was consumed but the run ended in a non-final state.
    NonFinalState,
}

impl Dfa {
    /// Create an automaton holding only its initial state. States, final
    /// states and transitions are added afterwards.
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        let mut states = BTreeSet::new();
        states.insert(initial.clone());
        Self {
            states,
            alphabet: BTreeSet::new(),
            transitions: BTreeMap::new(),
            initial,
            finals: BTreeSet::new(),
            composition: BTreeMap::new(),
        }
    }

    /// Declare a state.
    pub fn add_state(&mut self, name: &str) {
        self.states.insert(name.to_string());
    }

    /// Declare an alphabet symbol, whether or not any transition uses it.
    pub fn add_symbol(&mut self, symbol: char) {
        self.alphabet.insert(symbol);
    }

    /// Mark a state as final.
    pub fn add_final_state(&mut self, name: &str) {
        self.finals.insert(name.to_string());
    }

    /// Record the single transition for `(origin, symbol)`. The symbol joins
    /// the alphabet; a previously recorded destination for the same pair is
    /// replaced.
    pub fn add_transition(&mut self, origin: &str, symbol: char, destination: &str) {
        self.alphabet.insert(symbol);
        self.transitions
            .entry(origin.to_string())
            .or_default()
            .insert(symbol, destination.to_string());
    }

    /// Attach the canonical-name → member-set mapping produced by subset
    /// construction.
    pub fn set_composition(&mut self, composition: BTreeMap<String, BTreeSet<String>>) {
        self.composition = composition;
    }

    /// All states, in sorted order.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(String::as_str)
    }

    /// The alphabet, in sorted order.
    pub fn alphabet(&self) -> impl Iterator<Item = char> + '_ {
        self.alphabet.iter().copied()
    }

    /// Whether `symbol` belongs to the alphabet.
    pub fn has_symbol(&self, symbol: char) -> bool {
        self.alphabet.contains(&symbol)
    }

    /// The initial state.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// The final states, in sorted order.
    pub fn finals(&self) -> impl Iterator<Item = &str> {
        self.finals.iter().map(String::as_str)
    }

    /// Whether `state` is a final state.
    pub fn is_final(&self, state: &str) -> bool {
        self.finals.contains(state)
    }

    /// The destination for `(state, symbol)`, if defined.
    pub fn transition(&self, state: &str, symbol: char) -> Option<&str> {
        self.transitions
            .get(state)
            .and_then(|by_symbol| by_symbol.get(&symbol))
            .map(String::as_str)
    }

    /// Every transition as a `(origin, symbol, destination)` triple, in
    /// sorted order.
    pub fn transitions(&self) -> impl Iterator<Item = (&str, char, &str)> {
        self.transitions.iter().flat_map(|(origin, by_symbol)| {
            by_symbol
                .iter()
                .map(move |(&symbol, dest)| (origin.as_str(), symbol, dest.as_str()))
        })
    }

    /// The canonical-name → member-set mapping, empty unless the automaton
    /// came out of subset construction.
    pub fn composition(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.composition
    }

    /// Simulate the automaton over `word`.
    ///
    /// The empty word is accepted iff the initial state is final. A symbol
    /// outside the alphabet rejects immediately with
    /// [`Rejection::UnknownSymbol`]; an undefined transition rejects with
    /// [`Rejection::NoTransition`] (the implicit sink). Otherwise the word is
    /// accepted iff the run ends in a final state. Pure and terminating: the
    /// word length bounds the number of steps exactly.
    pub fn accepts(&self, word: &str) -> Verdict {
        let mut current = self.initial.as_str();

        for symbol in word.chars() {
            if !self.alphabet.contains(&symbol) {
                return Verdict::Reject(Rejection::UnknownSymbol(symbol));
            }
            match self.transition(current, symbol) {
                Some(next) => current = next,
                None => return Verdict::Reject(Rejection::NoTransition),
            }
        }

        if self.finals.contains(current) {
            Verdict::Accept
        } else {
            Verdict::Reject(Rejection::NonFinalState)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Accepts binary strings ending in 1.
    fn ends_in_one() -> Dfa {
        let mut dfa = Dfa::new("S");
        dfa.add_state("T");
        dfa.add_final_state("T");
        dfa.add_transition("S", '0', "S");
        dfa.add_transition("S", '1', "T");
        dfa.add_transition("T", '0', "S");
        dfa.add_transition("T", '1', "T");
        dfa
    }

    #[test]
    fn simulation_follows_transitions() {
        let dfa = ends_in_one();
        assert_eq!(dfa.accepts("01"), Verdict::Accept);
        assert_eq!(dfa.accepts("0110"), Verdict::Reject(Rejection::NonFinalState));
    }

    #[test]
    fn empty_word_depends_on_initial_state_only() {
        let dfa = ends_in_one();
        assert_eq!(dfa.accepts(""), Verdict::Reject(Rejection::NonFinalState));

        let mut accepting = ends_in_one();
        accepting.add_final_state("S");
        assert_eq!(accepting.accepts(""), Verdict::Accept);
    }

    #[test]
    fn unknown_symbol_rejects_immediately() {
        let dfa = ends_in_one();
        assert_eq!(dfa.accepts("0x1"), Verdict::Reject(Rejection::UnknownSymbol('x')));
    }

    #[test]
    fn undefined_transition_is_the_implicit_sink() {
        let mut dfa = Dfa::new("S");
        dfa.add_state("T");
        dfa.add_final_state("T");
        dfa.add_transition("S", '1', "T");
        dfa.add_symbol('0');
        // '0' is in the alphabet but S has no transition on it.
        assert_eq!(dfa.accepts("0"), Verdict::Reject(Rejection::NoTransition));
        assert_eq!(dfa.accepts("1"), Verdict::Accept);
    }
}
