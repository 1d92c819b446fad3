use crate::fsm::{Alphabet, StateSet};
use std::collections::{BTreeMap, BTreeSet};

/// Deterministic finite-state machine.
///
/// `S` is the state identity: a [`StateSet`] of NFA states for machines produced by subset
/// construction, an equivalence class index for minimized machines. Machines are immutable once
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa<S = StateSet> {
    pub(super) start: S,
    /// All states, in canonical order.
    pub(super) states: BTreeSet<S>,
    pub(super) transitions: BTreeMap<S, BTreeMap<char, S>>,
    pub(super) accepting: BTreeSet<S>,
    pub(super) alphabet: Alphabet,
}

/// A minimized [`Dfa`] whose states are equivalence class indices `0..k`.
pub type MinDfa = Dfa<usize>;

impl<S: Ord + Clone> Dfa<S> {
    /// Creates a machine holding only the start state.
    pub(super) fn new(start: S, alphabet: Alphabet) -> Self {
        Self {
            states: BTreeSet::from([start.clone()]),
            start,
            transitions: BTreeMap::new(),
            accepting: BTreeSet::new(),
            alphabet,
        }
    }

    pub(super) fn add_transition(&mut self, from: S, symbol: char, to: S) {
        self.transitions.entry(from).or_default().insert(symbol, to);
    }

    pub fn start_state(&self) -> &S {
        &self.start
    }

    /// Iterates all states in canonical order.
    pub fn states(&self) -> impl Iterator<Item = &S> + '_ {
        self.states.iter()
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    pub fn accepting_states(&self) -> &BTreeSet<S> {
        &self.accepting
    }

    pub fn is_accepting(&self, state: &S) -> bool {
        self.accepting.contains(state)
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the transition from `state` on `symbol`, if defined.
    pub fn transition(&self, state: &S, symbol: char) -> Option<&S> {
        self.transitions.get(state)?.get(&symbol)
    }

    /// Iterates all transitions ordered by source state, then by symbol.
    pub fn transitions(&self) -> impl Iterator<Item = (&S, char, &S)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(from, row)| row.iter().map(move |(symbol, to)| (from, *symbol, to)))
    }

    /// Whether every state has a transition on every alphabet symbol.
    pub fn is_total(&self) -> bool {
        self.states
            .iter()
            .all(|s| self.alphabet.iter().all(|c| self.transition(s, c).is_some()))
    }

    /// Assigns stable numeric ids to all states by their canonical order.
    ///
    /// The order of [`StateSet`] only depends on the contained NFA states, so the ids are the
    /// same across runs and processes.
    pub fn state_ids(&self) -> BTreeMap<&S, usize> {
        self.states.iter().enumerate().map(|(id, s)| (s, id)).collect()
    }
}

impl Dfa<StateSet> {
    /// The synthetic dead state, if subset construction needed one.
    pub fn dead_state(&self) -> Option<&StateSet> {
        self.states.first().filter(|s| s.is_dead())
    }
}

#[cfg(test)]
mod tests {
    use super::Dfa;
    use crate::fsm::Alphabet;

    #[test]
    fn partial_machine() {
        let alphabet: Alphabet = ['a', 'b'].into_iter().collect();
        let mut dfa = Dfa::new(0usize, alphabet);
        dfa.states.insert(1);
        dfa.accepting.insert(1);
        dfa.add_transition(0, 'a', 1);

        assert_eq!(dfa.transition(&0, 'a'), Some(&1));
        assert_eq!(dfa.transition(&0, 'b'), None);
        assert!(!dfa.is_total());
        assert_eq!(dfa.transitions().collect::<Vec<_>>(), vec![(&0, 'a', &1)]);
        assert_eq!(dfa.state_ids().get(&1), Some(&1));
    }
}
