//! State identifiers and canonical state sets.

use std::{cmp::Ordering, fmt};

/// Index of a state inside the arena of an automaton.
pub type StateId = usize;

/// A sorted, deduplicated set of NFA states.
///
/// This is the identity of a DFA state produced by subset construction. Equality, hashing and
/// ordering only look at the contained ids, so two sets built in a different order are the same
/// DFA state. The empty set is reserved for the dead state.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct StateSet(Vec<StateId>);

impl StateSet {
    /// The empty set, used as the identity of the dead state.
    pub fn dead() -> Self {
        Self(Vec::new())
    }

    pub fn is_dead(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, state: StateId) -> bool {
        self.0.binary_search(&state).is_ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the states in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[StateId] {
        &self.0
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        let mut states: Vec<StateId> = iter.into_iter().collect();
        states.sort_unstable();
        states.dedup();
        Self(states)
    }
}

/// Canonical order: smaller sets first, then lexicographic on the sorted ids.
impl Ord for StateSet {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for StateSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dead() {
            return write!(f, "∅");
        }

        write!(
            f,
            "{{{}}}",
            self.iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(",")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::StateSet;

    #[test]
    fn canonical_identity() {
        let a: StateSet = [3, 1, 2, 1].into_iter().collect();
        let b: StateSet = [1, 2, 3].into_iter().collect();

        assert_eq!(a, b);
        assert_eq!(a.as_slice(), &[1, 2, 3]);
        assert!(a.contains(2));
        assert!(!a.contains(4));
    }

    #[test]
    fn ordering_by_size_then_content() {
        let dead = StateSet::dead();
        let small: StateSet = [9].into_iter().collect();
        let large: StateSet = [0, 1].into_iter().collect();
        let other: StateSet = [0, 2].into_iter().collect();

        assert!(dead < small);
        assert!(small < large);
        assert!(large < other);
    }

    #[test]
    fn display() {
        let set: StateSet = [4, 0, 2].into_iter().collect();
        assert_eq!(set.to_string(), "{0,2,4}");
        assert_eq!(StateSet::dead().to_string(), "∅");
    }
}
