use super::model::Dfa;
use crate::fsm::{Simulatable, Simulate};

/// Runs a [`Dfa`] one symbol at a time.
///
/// A symbol without a transition from the current state (for example one outside the alphabet)
/// leaves the simulator stuck, and a stuck run never accepts.
pub struct DfaSimulator<'a, S> {
    dfa: &'a Dfa<S>,
    current: Option<&'a S>,
}

impl<'a, S: Ord + Clone> DfaSimulator<'a, S> {
    pub fn new(dfa: &'a Dfa<S>) -> Self {
        Self {
            dfa,
            current: Some(dfa.start_state()),
        }
    }

    /// The state the machine is in, or `None` once a lookup has missed.
    pub fn current_state(&self) -> Option<&'a S> {
        self.current
    }
}

impl<S: Ord + Clone> Simulatable for Dfa<S> {
    type Simulator<'a> = DfaSimulator<'a, S> where Self: 'a;

    fn to_simulator(&self) -> Self::Simulator<'_> {
        DfaSimulator::new(self)
    }
}

impl<S: Ord + Clone> Simulate for DfaSimulator<'_, S> {
    fn is_accepting(&self) -> bool {
        self.current.is_some_and(|s| self.dfa.is_accepting(s))
    }

    fn is_stuck(&self) -> bool {
        self.current.is_none()
    }

    fn feed(&mut self, input: char) -> bool {
        self.current = self
            .current
            .and_then(|state| self.dfa.transition(state, input));

        self.is_accepting()
    }
}
