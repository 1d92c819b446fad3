//! Moore style partition refinement.

use super::model::{Dfa, MinDfa};
use std::collections::{BTreeMap, BTreeSet};

/// For every alphabet symbol, the block the transition target currently belongs to. `None`
/// stands for a missing transition.
type Signature = Vec<Option<usize>>;

/// Collapses behaviorally equivalent states of `dfa` into one state each.
///
/// Starts from the accepting/non-accepting split and refines blocks by transition signature
/// until a full pass splits nothing. Block order is deterministic: the accepting block comes
/// first and the parts of a split block are ordered by signature. The returned machine uses the
/// final block indices as states.
pub fn minimize<S: Ord + Clone>(dfa: &Dfa<S>) -> MinDfa {
    let (accepting, rejecting): (BTreeSet<&S>, BTreeSet<&S>) =
        dfa.states.iter().partition(|s| dfa.is_accepting(s));

    let mut blocks: Vec<BTreeSet<&S>> = [accepting, rejecting]
        .into_iter()
        .filter(|block| !block.is_empty())
        .collect();

    let mut rounds = 0;
    loop {
        rounds += 1;
        let block_of = block_index(&blocks);
        let mut changed = false;
        let mut refined = Vec::with_capacity(blocks.len());

        for block in blocks.iter() {
            let mut groups: BTreeMap<Signature, BTreeSet<&S>> = BTreeMap::new();

            for &state in block.iter() {
                let signature = dfa
                    .alphabet
                    .iter()
                    .map(|symbol| {
                        dfa.transition(state, symbol)
                            .and_then(|target| block_of.get(target).copied())
                    })
                    .collect();
                groups.entry(signature).or_default().insert(state);
            }

            if groups.len() > 1 {
                log::trace!(
                    "round {}: block of {} states split into {}",
                    rounds,
                    block.len(),
                    groups.len()
                );
                changed = true;
            }
            refined.extend(groups.into_values());
        }

        blocks = refined;
        if !changed {
            break;
        }
    }

    log::debug!(
        "partition refinement reached a fixed point after {} rounds with {} blocks",
        rounds,
        blocks.len()
    );

    let block_of = block_index(&blocks);
    let start = block_of
        .get(&dfa.start)
        .copied()
        .expect("start state belongs to a block");

    let mut min = MinDfa::new(start, dfa.alphabet.clone());
    for (index, block) in blocks.iter().enumerate() {
        min.states.insert(index);

        if block.iter().any(|s| dfa.is_accepting(s)) {
            min.accepting.insert(index);
        }

        // Any member is transition equivalent to any other, by construction.
        let Some(representative) = block.first() else {
            continue;
        };
        for symbol in dfa.alphabet.iter() {
            if let Some(target) = dfa
                .transition(representative, symbol)
                .and_then(|target| block_of.get(target))
            {
                min.add_transition(index, symbol, *target);
            }
        }
    }

    min
}

fn block_index<'a, S: Ord>(blocks: &[BTreeSet<&'a S>]) -> BTreeMap<&'a S, usize> {
    blocks
        .iter()
        .enumerate()
        .flat_map(|(index, block)| block.iter().map(move |&s| (s, index)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::minimize;
    use crate::fsm::{dfa::determinize, nfa::build, Alphabet, Simulatable};

    fn alphabet(symbols: &str) -> Alphabet {
        symbols.chars().collect()
    }

    #[test]
    fn star_collapses_to_one_state() {
        // a*
        let dfa = determinize(&build("a*").unwrap(), &alphabet("a"));
        assert_eq!(dfa.num_states(), 2);

        let min = minimize(&dfa);
        assert_eq!(min.num_states(), 1);
        assert_eq!(min.start_state(), &0);
        assert!(min.is_accepting(&0));
        assert_eq!(min.transition(&0, 'a'), Some(&0));
    }

    #[test]
    fn dead_state_stays_its_own_class() {
        // ab
        let dfa = determinize(&build("ab.").unwrap(), &alphabet("ab"));
        let min = minimize(&dfa);

        // start, after `a`, after `ab`, dead
        assert_eq!(min.num_states(), 4);
        assert!(min.is_total());
        assert!(min.accepts("ab"));
        assert!(!min.accepts("a"));
        assert!(!min.accepts("abb"));
    }

    #[test]
    fn union_of_equal_branches() {
        // a+a
        let dfa = determinize(&build("aa+").unwrap(), &alphabet("a"));
        let min = minimize(&dfa);

        assert_eq!(min.num_states(), 3);
        assert!(min.accepts("a"));
        assert!(!min.accepts("aa"));
    }

    #[test]
    fn no_accepting_states() {
        let dfa = determinize(&build("a").unwrap(), &alphabet("b"));
        assert!(dfa.accepting_states().is_empty());

        let min = minimize(&dfa);
        assert_eq!(min.num_states(), 1);
        assert!(min.accepting_states().is_empty());
        assert_eq!(min.transition(&0, 'b'), Some(&0));
    }

    #[test]
    fn idempotent() {
        let dfa = determinize(
            &build("kkk.g.+kk.+*h*.kh*.+kk.h.+").unwrap(),
            &alphabet("ghk"),
        );
        let min = minimize(&dfa);
        let again = minimize(&min);

        assert!(min.num_states() <= dfa.num_states());
        assert_eq!(again.num_states(), min.num_states());
        assert_eq!(again.accepting_states().len(), min.accepting_states().len());
    }
}
