use super::model::Nfa;
use crate::fsm::graph::{Edge, Graph};

impl Nfa {
    /// Exports the states reachable from the start state. Node ids are arena indices, which are
    /// assigned in construction order and therefore stable for a given postfix stream.
    pub fn to_graph(&self) -> Graph {
        let nodes = self.reachable_states();
        let edges = nodes
            .iter()
            .flat_map(|&from| {
                self.get_state(from)
                    .transitions
                    .iter()
                    .map(move |(input, to)| Edge {
                        from,
                        label: input.symbol(),
                        to: *to,
                    })
            })
            .collect();

        Graph {
            nodes,
            edges,
            accepting: [self.accept_state()].into(),
            start: self.start_state(),
        }
    }
}
