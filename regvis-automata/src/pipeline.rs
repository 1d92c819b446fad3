//! The query surface over the individual stages: `parse`, `build`, `determinize`, `minimize`,
//! `accepts` and `trace`, plus [`compile`] running all of them at once.

use crate::{
    error::Error,
    fsm::{
        dfa::{Dfa, MinDfa, Trace},
        nfa::Nfa,
        Alphabet, Simulatable,
    },
};

pub use crate::{
    fsm::{
        dfa::{determinize, minimize},
        nfa::build,
    },
    regex::parse,
};

/// Whether `automaton` accepts `word`.
pub fn accepts<A: Simulatable>(automaton: &A, word: &str) -> bool {
    automaton.accepts(word)
}

/// The step by step run of `dfa` on `word`.
pub fn trace<S: Ord + Clone>(dfa: &Dfa<S>, word: &str) -> Trace {
    dfa.trace(word)
}

/// Every stage produced for one pattern.
#[derive(Debug, Clone)]
pub struct Automata {
    pub postfix: String,
    pub alphabet: Alphabet,
    pub nfa: Nfa,
    pub dfa: Dfa,
    pub min_dfa: MinDfa,
}

/// Runs the whole pipeline over the alphabet derived from `pattern`.
pub fn compile(pattern: &str) -> Result<Automata, Error> {
    compile_with_alphabet(pattern, Alphabet::from_pattern(pattern))
}

/// Runs the whole pipeline over an explicit `alphabet`.
pub fn compile_with_alphabet(pattern: &str, alphabet: Alphabet) -> Result<Automata, Error> {
    let postfix = parse(pattern)?;
    let nfa = build(&postfix)?;
    log::debug!("NFA for `{}` has {} states", pattern, nfa.num_states());

    let dfa = determinize(&nfa, &alphabet);
    let min_dfa = minimize(&dfa);
    log::debug!(
        "`{}`: {} DFA states, {} after minimization",
        pattern,
        dfa.num_states(),
        min_dfa.num_states()
    );

    Ok(Automata {
        postfix,
        alphabet,
        nfa,
        dfa,
        min_dfa,
    })
}
