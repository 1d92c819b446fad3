use crate::fsm::{StateId, StateSet};
use std::collections::BTreeSet;

/// NFA finite-state machine built by Thompson construction.
///
/// All states live in a single arena and refer to each other by index, so the cyclic graphs
/// produced by the star construct need no special handling. The machine has exactly one start
/// and one accept state.
#[derive(Debug, Clone)]
pub struct Nfa {
    pub(super) states: Vec<State>,
    pub(super) fragment: Fragment,
}

/// A start/accept pair inside the arena. The accept state has no outgoing transitions until the
/// fragment is composed into a larger one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Fragment {
    pub(super) start: StateId,
    pub(super) accept: StateId,
}

/// A state in the NFA.
///
/// Two states with identical transitions are still different states; identity is the arena
/// index.
#[derive(Debug, Clone)]
pub(super) struct State {
    pub(super) id: StateId,
    /// Outgoing transitions in insertion order.
    pub(super) transitions: Vec<(Input, StateId)>,
}

/// Label of an NFA transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Input {
    /// Consumes exactly this symbol.
    Literal(char),
    /// Epsilon input, meaning no input needed (the transition can be made at
    /// any time).
    Eps,
}

impl Input {
    /// Whether the `input` can be consumed by this transition.
    pub(super) fn can_take(&self, input: char) -> bool {
        match self {
            Input::Literal(c) => *c == input,
            Input::Eps => false,
        }
    }

    /// The consumed symbol, `None` for epsilon.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Input::Literal(c) => Some(*c),
            Input::Eps => None,
        }
    }
}

impl Nfa {
    pub fn start_state(&self) -> StateId {
        self.fragment.start
    }

    pub fn accept_state(&self) -> StateId {
        self.fragment.accept
    }

    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Returns a read-only reference to the `State` in the NFA.
    ///
    /// # Panics
    ///
    /// When the [`StateId`] does not exist in the NFA.
    pub(super) fn get_state(&self, state_id: StateId) -> &State {
        self.states
            .get(state_id)
            .expect("requested state does not exist")
    }

    /// Returns every transition as `(from, input, to)`, ordered by source state and then by
    /// insertion order.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, Input, StateId)> + '_ {
        self.states.iter().flat_map(|State { id, transitions }| {
            transitions.iter().map(move |(input, dest)| (*id, *input, *dest))
        })
    }

    /// Returns the set of states reachable from `seeds` using only epsilon transitions,
    /// including the seeds themselves. Seeds that are not states of this NFA are ignored.
    pub fn eps_closure(&self, seeds: impl IntoIterator<Item = StateId>) -> StateSet {
        let mut not_visited: Vec<StateId> = seeds
            .into_iter()
            .filter(|&id| id < self.states.len())
            .collect();
        let mut result: BTreeSet<StateId> = not_visited.iter().copied().collect();

        while let Some(state_id) = not_visited.pop() {
            for (input, dest) in self.get_state(state_id).transitions.iter() {
                if *input == Input::Eps && result.insert(*dest) {
                    not_visited.push(*dest);
                }
            }
        }

        result.into_iter().collect()
    }

    /// Returns the states reachable from `states` by one transition consuming `input`. The
    /// result is not epsilon closed. Ids that are not states of this NFA have no moves.
    pub fn move_on(&self, states: &StateSet, input: char) -> StateSet {
        states
            .iter()
            .filter_map(|state_id| self.states.get(state_id))
            .flat_map(|state| {
                state
                    .transitions
                    .iter()
                    .filter(move |(expected, _)| expected.can_take(input))
                    .map(|(_, dest)| *dest)
            })
            .collect()
    }

    /// Returns the states reachable from the start state in ascending order.
    pub fn reachable_states(&self) -> Vec<StateId> {
        let mut not_visited = vec![self.fragment.start];
        let mut visited = BTreeSet::from([self.fragment.start]);

        while let Some(state_id) = not_visited.pop() {
            for (_, dest) in self.get_state(state_id).transitions.iter() {
                if visited.insert(*dest) {
                    not_visited.push(*dest);
                }
            }
        }

        visited.into_iter().collect()
    }
}

impl State {
    /// Creates a new [`State`] with the given id. No transitions are created.
    fn with_id(id: StateId) -> Self {
        Self {
            id,
            transitions: Vec::new(),
        }
    }
}

/// Arena the [`Nfa`] is assembled in.
#[derive(Default)]
pub(super) struct NfaBuilder {
    states: Vec<State>,
}

impl NfaBuilder {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`State`] and returns its id.
    pub(super) fn add_state(&mut self) -> StateId {
        let id = self.states.len();
        self.states.push(State::with_id(id));
        id
    }

    /// Creates a transition between two states using their [`StateId`]s.
    ///
    /// # Panics
    ///
    /// When `start` is not a valid [`StateId`].
    pub(super) fn add_transition(&mut self, start: StateId, end: StateId, input: Input) {
        debug_assert!(end < self.states.len(), "destination state does not exist");
        self.states
            .get_mut(start)
            .expect("state does not exist")
            .transitions
            .push((input, end));
    }

    /// Finishes the arena with `fragment` as the whole machine.
    pub(super) fn build(self, fragment: Fragment) -> Nfa {
        Nfa {
            states: self.states,
            fragment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Fragment, Input, NfaBuilder};
    use crate::fsm::{nfa::build, StateSet};

    #[test]
    fn eps_closure_follows_cycles() {
        // 0 -ε-> 1 -ε-> 2 -ε-> 0, 2 -a-> 3
        let mut builder = NfaBuilder::new();
        let states: Vec<_> = (0..4).map(|_| builder.add_state()).collect();
        builder.add_transition(states[0], states[1], Input::Eps);
        builder.add_transition(states[1], states[2], Input::Eps);
        builder.add_transition(states[2], states[0], Input::Eps);
        builder.add_transition(states[2], states[3], Input::Literal('a'));
        let nfa = builder.build(Fragment {
            start: states[0],
            accept: states[3],
        });

        assert_eq!(nfa.eps_closure([1]).as_slice(), &[0, 1, 2]);

        let moved = nfa.move_on(&nfa.eps_closure([0]), 'a');
        assert_eq!(moved.as_slice(), &[3]);
        assert!(nfa.move_on(&moved, 'a').is_empty());
        assert_eq!(nfa.reachable_states(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn unknown_states_are_ignored() {
        let nfa = build("a").unwrap();

        assert!(nfa.eps_closure([7]).is_empty());
        assert_eq!(nfa.eps_closure([0, 7]).as_slice(), &[0]);

        let outside: StateSet = [0, 7].into_iter().collect();
        assert_eq!(nfa.move_on(&outside, 'a').as_slice(), &[1]);
    }
}
