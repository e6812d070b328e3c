//! Nondeterministic finite automaton with epsilon moves.

use super::Label;
use std::collections::{BTreeMap, BTreeSet};

/// A nondeterministic finite automaton.
///
/// The transition relation is multi-valued: each `(state, label)` pair maps to
/// a set of destination states, and labels may be the empty move
/// ([`Label::Epsilon`]). The automaton is constructed once from external input
/// and read-only thereafter; all query methods are pure.
///
/// State sets are ordered (`BTreeSet`) so that a set of states is directly
/// usable as a deduplication key during subset construction and iterates in a
/// stable order for canonical naming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    states: BTreeSet<String>,
    alphabet: BTreeSet<char>,
    transitions: BTreeMap<String, BTreeMap<Label, BTreeSet<String>>>,
    initial: String,
    finals: BTreeSet<String>,
}

impl Nfa {
    /// Create an automaton with the given state set, initial state and final
    /// states. Transitions are added afterwards with [`Nfa::add_transition`].
    pub fn new<S, F>(states: S, initial: impl Into<String>, finals: F) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            states: states.into_iter().map(Into::into).collect(),
            alphabet: BTreeSet::new(),
            transitions: BTreeMap::new(),
            initial: initial.into(),
            finals: finals.into_iter().map(Into::into).collect(),
        }
    }

    /// Record a transition. Non-epsilon labels extend the alphabet.
    pub fn add_transition(&mut self, origin: &str, label: Label, destination: &str) {
        if let Label::Symbol(symbol) = label {
            self.alphabet.insert(symbol);
        }
        self.transitions
            .entry(origin.to_string())
            .or_default()
            .entry(label)
            .or_default()
            .insert(destination.to_string());
    }

    /// All declared states, in sorted order.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(String::as_str)
    }

    /// The alphabet (epsilon excluded), in sorted order.
    pub fn alphabet(&self) -> impl Iterator<Item = char> + '_ {
        self.alphabet.iter().copied()
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

    /// Every transition as a flat `(origin, label, destination)` triple, in
    /// sorted order.
    pub fn transitions(&self) -> impl Iterator<Item = (&str, Label, &str)> {
        self.transitions.iter().flat_map(|(origin, by_label)| {
            by_label.iter().flat_map(move |(&label, destinations)| {
                destinations
                    .iter()
                    .map(move |dest| (origin.as_str(), label, dest.as_str()))
            })
        })
    }

    /// The epsilon closure of a set of states: the smallest superset of
    /// `seed` closed under following epsilon-labeled edges.
    ///
    /// Uses an explicit LIFO work-stack; membership is checked before a state
    /// is pushed, so the loop terminates even on epsilon-cycles.
    pub fn epsilon_closure(&self, seed: &BTreeSet<String>) -> BTreeSet<String> {
        let mut closure = seed.clone();
        let mut stack: Vec<String> = seed.iter().cloned().collect();

        while let Some(state) = stack.pop() {
            let destinations = self
                .transitions
                .get(&state)
                .and_then(|by_label| by_label.get(&Label::Epsilon));
            if let Some(destinations) = destinations {
                for dest in destinations {
                    if closure.insert(dest.clone()) {
                        stack.push(dest.clone());
                    }
                }
            }
        }

        closure
    }

    /// The epsilon closure of a single state.
    pub fn epsilon_closure_of(&self, state: &str) -> BTreeSet<String> {
        let mut seed = BTreeSet::new();
        seed.insert(state.to_string());
        self.epsilon_closure(&seed)
    }

    /// Direct successors of `states` on one alphabet symbol (never epsilon):
    /// the union of every member's destinations on `symbol`. An empty result
    /// is the only "no move" signal; there is no sentinel sink value.
    pub fn move_on_symbol(&self, states: &BTreeSet<String>, symbol: char) -> BTreeSet<String> {
        let mut destinations = BTreeSet::new();
        for state in states {
            let successors = self
                .transitions
                .get(state)
                .and_then(|by_label| by_label.get(&Label::Symbol(symbol)));
            if let Some(successors) = successors {
                destinations.extend(successors.iter().cloned());
            }
        }
        destinations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Nfa {
        // A -ε-> B -ε-> C, B -0-> C
        let mut nfa = Nfa::new(["A", "B", "C"], "A", ["C"]);
        nfa.add_transition("A", Label::Epsilon, "B");
        nfa.add_transition("B", Label::Epsilon, "C");
        nfa.add_transition("B", Label::Symbol('0'), "C");
        nfa
    }

    fn set(states: &[&str]) -> BTreeSet<String> {
        states.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn closure_follows_epsilon_chains() {
        let nfa = chain();
        assert_eq!(nfa.epsilon_closure_of("A"), set(&["A", "B", "C"]));
        assert_eq!(nfa.epsilon_closure_of("B"), set(&["B", "C"]));
        assert_eq!(nfa.epsilon_closure_of("C"), set(&["C"]));
    }

    #[test]
    fn closure_terminates_on_epsilon_cycle() {
        let mut nfa = Nfa::new(["X", "Y"], "X", ["Y"]);
        nfa.add_transition("X", Label::Epsilon, "Y");
        nfa.add_transition("Y", Label::Epsilon, "X");
        assert_eq!(nfa.epsilon_closure_of("X"), set(&["X", "Y"]));
    }

    #[test]
    fn move_unions_successors_and_ignores_epsilon() {
        let nfa = chain();
        let from = set(&["A", "B"]);
        assert_eq!(nfa.move_on_symbol(&from, '0'), set(&["C"]));
        // No '1' transitions anywhere.
        assert!(nfa.move_on_symbol(&from, '1').is_empty());
    }

    #[test]
    fn alphabet_excludes_epsilon() {
        let nfa = chain();
        assert_eq!(nfa.alphabet().collect::<Vec<_>>(), vec!['0']);
    }
}
