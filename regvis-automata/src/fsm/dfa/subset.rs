//! Subset construction algorithm for converting an NFA to a DFA.

use super::model::Dfa;
use crate::fsm::{nfa::Nfa, Alphabet, StateSet};

/// Converts `nfa` into a [`Dfa`] over `alphabet` using the powerset construction.
///
/// Each DFA state is the epsilon closure of a set of NFA states. Moves that reach no NFA state
/// are routed to a single dead state (the empty set), which loops on every symbol, so the
/// resulting transition function is total over `alphabet`.
pub fn determinize(nfa: &Nfa, alphabet: &Alphabet) -> Dfa {
    let accept = nfa.accept_state();
    let start = nfa.eps_closure([nfa.start_state()]);

    let mut dfa = Dfa::new(start.clone(), alphabet.clone());
    if start.contains(accept) {
        dfa.accepting.insert(start.clone());
    }

    let mut unmarked = vec![start];
    let mut needs_dead_state = false;

    while let Some(current) = unmarked.pop() {
        for symbol in alphabet.iter() {
            let moved = nfa.move_on(&current, symbol);

            if moved.is_empty() {
                needs_dead_state = true;
                dfa.add_transition(current.clone(), symbol, StateSet::dead());
                continue;
            }

            let next = nfa.eps_closure(moved.iter());

            if dfa.states.insert(next.clone()) {
                // Acceptance is decided once, when the state is discovered.
                if next.contains(accept) {
                    dfa.accepting.insert(next.clone());
                }
                log::trace!("discovered DFA state {} via {} on `{}`", next, current, symbol);
                unmarked.push(next.clone());
            }

            dfa.add_transition(current.clone(), symbol, next);
        }
    }

    if needs_dead_state {
        let dead = StateSet::dead();
        dfa.states.insert(dead.clone());
        for symbol in alphabet.iter() {
            dfa.add_transition(dead.clone(), symbol, dead.clone());
        }
        log::debug!("added dead state to close the transition function");
    }

    log::debug!(
        "subset construction produced {} states, {} accepting",
        dfa.num_states(),
        dfa.accepting.len()
    );

    dfa
}
