use regvis_automata::fsm::Graph;

/// Converts an exported automaton to the [graphviz](https://graphviz.org/docs/layouts/dot/) dot
/// language format.
///
/// Accepting states are drawn as double circles and an invisible node points at the start
/// state.
pub fn to_dot(name: &str, graph: &Graph) -> String {
    let accepting_dot = format!(
        "node [shape = doublecircle]; {}",
        graph
            .accepting
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<String>>()
            .join(" ")
    );

    let other_dot = format!(
        "node [shape = circle]; {}",
        graph
            .nodes
            .iter()
            .filter(|&&id| !graph.is_accepting(id))
            .map(|id| id.to_string())
            .collect::<Vec<String>>()
            .join(" ")
    );

    format!(
        "digraph {} {{\n\
            \trankdir = LR;\n\
        \n\
            \t// accepting states\n\
            \t{}\n\
            \t{}\n\
        \n\
            \tstart [shape = none, label = \"\", width = 0, height = 0];\n\
            \tstart -> {};\n\
        \n\
            {}\n\
        }}\n",
        name,
        accepting_dot,
        other_dot,
        graph.start,
        transition_dot(graph)
            .map(|l| format!("\t{}", l))
            .collect::<Vec<String>>()
            .join("\n")
    )
}

/// Converts the edges to the dot format and returns an iterator over it.
fn transition_dot(graph: &Graph) -> impl Iterator<Item = String> + '_ {
    graph.edges.iter().map(|edge| {
        format!(
            "{} -> {} [label = \"{}\"];",
            edge.from,
            edge.to,
            edge.display_label()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::to_dot;
    use regvis_automata::compile;

    #[test]
    fn nfa_dot() {
        let automata = compile("a").unwrap();

        assert_eq!(
            to_dot("nfa", &automata.nfa.to_graph()),
            "digraph nfa {\n\
            \trankdir = LR;\n\
            \n\
            \t// accepting states\n\
            \tnode [shape = doublecircle]; 1\n\
            \tnode [shape = circle]; 0\n\
            \n\
            \tstart [shape = none, label = \"\", width = 0, height = 0];\n\
            \tstart -> 0;\n\
            \n\
            \t0 -> 1 [label = \"a\"];\n\
            }\n"
        );
    }

    #[test]
    fn epsilon_label() {
        let automata = compile("a*").unwrap();
        let dot = to_dot("nfa", &automata.nfa.to_graph());

        assert!(dot.contains("[label = \"ε\"]"));
    }
}
