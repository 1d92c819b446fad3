use super::model::Dfa;
use serde::Serialize;

/// One transition taken while running a [`Dfa`] on a word. State ids are the canonical ids from
/// [`Dfa::state_ids`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    /// Number of symbols consumed after this step.
    pub position: usize,
    /// `None` for the initial step.
    pub symbol: Option<char>,
    pub from: usize,
    /// `None` when the machine has no transition on `symbol`, which ends the trace.
    pub to: Option<usize>,
}

/// The ordered steps of a run plus its verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    pub steps: Vec<TraceStep>,
    pub accepted: bool,
}

impl Trace {
    /// Whether the run ended on a missing transition before consuming the whole word.
    pub fn is_cut_short(&self) -> bool {
        self.steps.last().is_some_and(|step| step.to.is_none())
    }
}

impl<S: Ord + Clone> Dfa<S> {
    /// Runs the machine on `word` and records every step.
    ///
    /// The trace has `word.chars().count() + 1` steps, unless a symbol has no transition, in
    /// which case it stops at that symbol with `to: None` and the word is rejected.
    pub fn trace(&self, word: &str) -> Trace {
        let ids = self.state_ids();
        let id_of = |state: &S| ids[state];

        let mut current = self.start_state();
        let mut steps = vec![TraceStep {
            position: 0,
            symbol: None,
            from: id_of(current),
            to: Some(id_of(current)),
        }];

        for (i, symbol) in word.chars().enumerate() {
            let from = id_of(current);

            let Some(next) = self.transition(current, symbol) else {
                steps.push(TraceStep {
                    position: i + 1,
                    symbol: Some(symbol),
                    from,
                    to: None,
                });
                return Trace {
                    steps,
                    accepted: false,
                };
            };

            steps.push(TraceStep {
                position: i + 1,
                symbol: Some(symbol),
                from,
                to: Some(id_of(next)),
            });
            current = next;
        }

        Trace {
            steps,
            accepted: self.is_accepting(current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TraceStep;
    use crate::fsm::{
        dfa::{determinize, minimize},
        nfa::build,
        Alphabet,
    };

    fn step(position: usize, symbol: Option<char>, from: usize, to: Option<usize>) -> TraceStep {
        TraceStep {
            position,
            symbol,
            from,
            to,
        }
    }

    #[test]
    fn full_run() {
        // ab
        let alphabet: Alphabet = ['a', 'b'].into_iter().collect();
        let dfa = determinize(&build("ab.").unwrap(), &alphabet);

        // ids: 0 = dead, 1 = {0}, 2 = {3}, 3 = {1,2}
        let trace = dfa.trace("ab");
        assert!(trace.accepted);
        assert!(!trace.is_cut_short());
        assert_eq!(
            trace.steps,
            vec![
                step(0, None, 1, Some(1)),
                step(1, Some('a'), 1, Some(3)),
                step(2, Some('b'), 3, Some(2)),
            ]
        );

        let trace = dfa.trace("b");
        assert!(!trace.accepted);
        assert_eq!(trace.steps.len(), 2);
        assert_eq!(trace.steps[1], step(1, Some('b'), 1, Some(0)));
    }

    #[test]
    fn missing_transition_ends_trace() {
        let alphabet: Alphabet = ['a'].into_iter().collect();
        let min = minimize(&determinize(&build("a*").unwrap(), &alphabet));

        let trace = min.trace("aaxa");
        assert!(!trace.accepted);
        assert!(trace.is_cut_short());
        assert_eq!(trace.steps.len(), 4);
        assert_eq!(trace.steps[3], step(3, Some('x'), 0, None));
    }

    #[test]
    fn empty_word() {
        let alphabet: Alphabet = ['a'].into_iter().collect();
        let min = minimize(&determinize(&build("a*").unwrap(), &alphabet));

        let trace = min.trace("");
        assert!(trace.accepted);
        assert_eq!(trace.steps, vec![step(0, None, 0, Some(0))]);
    }
}
