use super::model::Nfa;
use crate::fsm::{Simulatable, Simulate, StateSet};

/// Runs an [`Nfa`] by tracking the epsilon closed set of states it can be in.
pub struct NfaSimulator<'a> {
    /// Nfa we are simulating.
    nfa: &'a Nfa,
    current: StateSet,
}

impl<'a> NfaSimulator<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        Self {
            nfa,
            current: nfa.eps_closure([nfa.start_state()]),
        }
    }

    /// The set of states the machine is currently in.
    pub fn current_states(&self) -> &StateSet {
        &self.current
    }
}

impl Simulatable for Nfa {
    type Simulator<'a> = NfaSimulator<'a>;

    fn to_simulator(&self) -> Self::Simulator<'_> {
        NfaSimulator::new(self)
    }
}

impl Simulate for NfaSimulator<'_> {
    fn is_accepting(&self) -> bool {
        self.current.contains(self.nfa.accept_state())
    }

    fn is_stuck(&self) -> bool {
        self.current.is_empty()
    }

    fn feed(&mut self, input: char) -> bool {
        let moved = self.nfa.move_on(&self.current, input);
        self.current = self.nfa.eps_closure(moved.iter());

        self.is_accepting()
    }
}

#[cfg(test)]
mod tests {
    use super::NfaSimulator;
    use crate::fsm::{nfa::build, Simulate};

    #[test]
    fn feed() {
        // (a+b)*c
        let nfa = build("ab+*c.").unwrap();
        let mut sim = NfaSimulator::new(&nfa);

        assert!(!sim.is_accepting());
        assert_eq!(sim.current_states().as_slice(), &[0, 2, 4, 6, 7, 8]);
        assert!(!sim.feed('a'));
        assert!(!sim.feed('b'));
        assert!(sim.feed('c'));
        assert_eq!(sim.current_states().as_slice(), &[9]);
        assert!(!sim.feed('c'));
        assert!(sim.is_stuck());
        assert!(sim.current_states().is_dead());
    }
}
