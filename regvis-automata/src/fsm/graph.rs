//! Rendering-independent view of an automaton, consumed by visualization and export code.

use serde::Serialize;
use std::{collections::BTreeSet, fmt};

/// Nodes, labeled edges, accepting nodes and the start node of an automaton, all in terms of
/// canonical numeric state ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Graph {
    pub nodes: Vec<usize>,
    pub edges: Vec<Edge>,
    pub accepting: BTreeSet<usize>,
    pub start: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: usize,
    /// `None` for an epsilon transition.
    pub label: Option<char>,
    pub to: usize,
}

impl Edge {
    /// The label as shown to a user, with `ε` for epsilon.
    pub fn display_label(&self) -> String {
        self.label.map_or_else(|| "ε".to_string(), String::from)
    }
}

impl Graph {
    pub fn is_accepting(&self, node: usize) -> bool {
        self.accepting.contains(&node)
    }

    /// Outgoing edges of `node` in export order.
    pub fn edges_from(&self, node: usize) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(move |e| e.from == node)
    }
}

/// Plain text listing: a header with the start and accepting states followed by one
/// `from --label--> to` line per edge.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Start: {} Accept: {}",
            self.start,
            self.accepting
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(",")
        )?;

        for edge in self.edges.iter() {
            writeln!(f, "{} --{}--> {}", edge.from, edge.display_label(), edge.to)?;
        }

        Ok(())
    }
}
