use super::model::Dfa;
use crate::fsm::graph::{Edge, Graph};

impl<S: Ord + Clone> Dfa<S> {
    /// Exports the machine with canonical ids in place of the state identities. Edges are ordered
    /// by source id, then by symbol.
    pub fn to_graph(&self) -> Graph {
        let ids = self.state_ids();

        let mut edges: Vec<Edge> = self
            .transitions()
            .map(|(from, symbol, to)| Edge {
                from: ids[from],
                label: Some(symbol),
                to: ids[to],
            })
            .collect();
        edges.sort_by_key(|edge| (edge.from, edge.label));

        Graph {
            nodes: (0..self.num_states()).collect(),
            edges,
            accepting: self.accepting_states().iter().map(|s| ids[s]).collect(),
            start: ids[self.start_state()],
        }
    }
}
