//! Subset (powerset) construction: NFA → DFA.
//!
//! Reachable sets of NFA states ("composite states") become single DFA
//! states. Exploration is breadth-first from the epsilon closure of the NFA's
//! initial state; a composite state is identified by its member set, not by
//! its generated name, so rediscovery by a different path never duplicates a
//! state. The implicit sink is never materialized: an empty move target
//! records no transition and creates no state, so the output can be a
//! partial DFA.

use crate::automaton::dfa::Dfa;
use crate::automaton::nfa::Nfa;
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

/// Assigns canonical names to composite states, exactly once per distinct
/// member set.
///
/// Naming policy: the sorted member identifiers concatenated (`{C, A}` →
/// `"AC"`). The name is therefore a pure function of the member set and
/// rediscovery always resolves to the already-assigned name. With multi-char
/// state names concatenation alone can collide (`{A, BC}` vs `{AB, C}`); a
/// later set whose concatenated name is already taken gets a numeric suffix
/// in discovery order, keeping the mapping collision-free and total.
#[derive(Debug, Default)]
pub struct StateNamer {
    by_members: HashMap<BTreeSet<String>, String>,
    by_name: BTreeMap<String, BTreeSet<String>>,
}

impl StateNamer {
    /// Create an empty namer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical name for `members`, assigning one at first discovery.
    /// Returns the name and whether this call assigned it.
    pub fn assign(&mut self, members: &BTreeSet<String>) -> (String, bool) {
        if let Some(name) = self.by_members.get(members) {
            return (name.clone(), false);
        }

        let base: String = members.iter().map(String::as_str).collect();
        let mut name = base.clone();
        let mut suffix = 2usize;
        while self.by_name.contains_key(&name) {
            name = format!("{base}#{suffix}");
            suffix += 1;
        }

        self.by_members.insert(members.clone(), name.clone());
        self.by_name.insert(name.clone(), members.clone());
        (name, true)
    }

    /// The already-assigned name for `members`, if any.
    pub fn lookup(&self, members: &BTreeSet<String>) -> Option<&str> {
        self.by_members.get(members).map(String::as_str)
    }

    /// Consume the namer, yielding the name → member-set mapping.
    pub fn into_composition(self) -> BTreeMap<String, BTreeSet<String>> {
        self.by_name
    }
}

/// Convert a nondeterministic automaton into an equivalent deterministic one.
///
/// Total on any well-formed [`Nfa`]: construction itself never fails. The
/// produced automaton keeps the input alphabet unchanged, has no unreachable
/// states (every state was dequeued during exploration), and carries the
/// composition mapping from canonical names back to member sets.
pub fn construct(nfa: &Nfa) -> Dfa {
    let mut namer = StateNamer::new();

    let initial_set = nfa.epsilon_closure_of(nfa.initial());
    let (initial_name, _) = namer.assign(&initial_set);

    let mut dfa = Dfa::new(initial_name.as_str());
    for symbol in nfa.alphabet() {
        dfa.add_symbol(symbol);
    }

    let mut queue: VecDeque<(String, BTreeSet<String>)> = VecDeque::new();
    queue.push_back((initial_name, initial_set));

    while let Some((name, members)) = queue.pop_front() {
        // A composite state is final iff it contains at least one original
        // final state.
        if members.iter().any(|state| nfa.is_final(state)) {
            dfa.add_final_state(&name);
        }

        for symbol in nfa.alphabet() {
            let raw = nfa.move_on_symbol(&members, symbol);
            let target = nfa.epsilon_closure(&raw);

            // Empty target: the implicit sink. No transition, no state.
            if target.is_empty() {
                continue;
            }

            let (target_name, newly_discovered) = namer.assign(&target);
            if newly_discovered {
                dfa.add_state(&target_name);
                queue.push_back((target_name.clone(), target));
            }
            dfa.add_transition(&name, symbol, &target_name);
        }
    }

    dfa.set_composition(namer.into_composition());
    dfa
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Label;

    fn set(states: &[&str]) -> BTreeSet<String> {
        states.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn namer_is_stable_across_rediscovery() {
        let mut namer = StateNamer::new();
        let (first, new) = namer.assign(&set(&["C", "A"]));
        assert_eq!(first, "AC");
        assert!(new);

        let (again, new) = namer.assign(&set(&["A", "C"]));
        assert_eq!(again, "AC");
        assert!(!new);
    }

    #[test]
    fn namer_disambiguates_concatenation_collisions() {
        let mut namer = StateNamer::new();
        let (first, _) = namer.assign(&set(&["A", "BC"]));
        let (second, _) = namer.assign(&set(&["AB", "C"]));
        assert_eq!(first, "ABC");
        assert_eq!(second, "ABC#2");
    }

    #[test]
    fn worked_example_builds_expected_dfa() {
        // A -ε-> B, B -0-> C, C final.
        let mut nfa = Nfa::new(["A", "B", "C"], "A", ["C"]);
        nfa.add_transition("A", Label::Epsilon, "B");
        nfa.add_transition("B", Label::Symbol('0'), "C");
        nfa.add_transition("C", Label::Symbol('1'), "C");

        let dfa = construct(&nfa);

        assert_eq!(dfa.initial(), "AB");
        assert_eq!(dfa.composition()["AB"], set(&["A", "B"]));
        assert_eq!(dfa.transition("AB", '0'), Some("C"));
        assert_eq!(dfa.transition("AB", '1'), None);
        assert!(dfa.is_final("C"));
        assert!(!dfa.is_final("AB"));
    }

    #[test]
    fn alphabet_is_carried_over_unchanged() {
        let mut nfa = Nfa::new(["A", "B"], "A", ["B"]);
        nfa.add_transition("A", Label::Symbol('0'), "B");
        nfa.add_transition("A", Label::Symbol('1'), "A");

        let dfa = construct(&nfa);
        assert_eq!(dfa.alphabet().collect::<Vec<_>>(), vec!['0', '1']);
    }

    #[test]
    fn empty_move_targets_create_no_states() {
        // B is a dead end: no outgoing transitions at all.
        let mut nfa = Nfa::new(["A", "B"], "A", ["B"]);
        nfa.add_transition("A", Label::Symbol('0'), "B");

        let dfa = construct(&nfa);
        assert_eq!(dfa.states().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(dfa.transition("B", '0'), None);
    }
}
