//! Finite-automaton models.
//!
//! Two distinct transition-table types are used deliberately: the
//! nondeterministic form ([`nfa::Nfa`]) maps `(state, label)` to a *set* of
//! destinations and admits epsilon moves, while the deterministic form
//! ([`dfa::Dfa`]) maps `(state, symbol)` to at most one destination. Keeping
//! them separate makes the single-destination invariant of the deterministic
//! form enforceable by construction.

pub mod dfa;
pub mod nfa;

/// Token used for the empty (epsilon) move in the transition-table text
/// format. Never part of a declared alphabet.
pub const EPSILON_TOKEN: char = 'h';

/// Label rendered for epsilon edges in Graphviz output.
pub const EPSILON_DISPLAY: &str = "ε";

/// Edge label in the nondeterministic transition relation: either an alphabet
/// symbol or the empty move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    /// An ordinary alphabet symbol.
    Symbol(char),
    /// The empty move: no input is consumed.
    Epsilon,
}

impl Label {
    /// Whether this label is the empty move.
    pub fn is_epsilon(self) -> bool {
        matches!(self, Label::Epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epsilon_is_not_a_symbol() {
        assert!(Label::Epsilon.is_epsilon());
        assert!(!Label::Symbol('0').is_epsilon());
    }
}
