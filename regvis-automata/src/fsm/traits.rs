/// Finite-state machine that can be turned into a [`Simulate`]-able run.
pub trait Simulatable {
    type Simulator<'a>: Simulate
    where
        Self: 'a;

    /// Creates a simulator positioned at the start state.
    fn to_simulator(&self) -> Self::Simulator<'_>;

    /// Simulates the machine on `input` from the start state and returns whether it accepts.
    fn accepts(&self, input: &str) -> bool {
        self.to_simulator().run(input)
    }
}

pub trait Simulate {
    /// Simulates the finite-state machine from start to finish and returns whether it accepts the
    /// input.
    fn run(mut self, input: &str) -> bool
    where
        Self: Sized,
    {
        for c in input.chars() {
            if self.is_stuck() {
                return false;
            }
            self.feed(c);
        }

        self.is_accepting()
    }

    /// Returns whether the finite-state machine accepts the input fed so far.
    fn is_accepting(&self) -> bool;

    /// Returns whether no further input can lead to acceptance because the run has no current
    /// state left.
    fn is_stuck(&self) -> bool;

    /// Feeds a single character to the finite-state machine and returns whether it has reached an
    /// accepting state.
    fn feed(&mut self, input: char) -> bool;
}
