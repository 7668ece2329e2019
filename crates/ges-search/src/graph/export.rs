//! Conversion to `petgraph` and Graphviz DOT rendering.

use std::fmt;

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};

use super::Pdag;

/// Edge kind carried on exported graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeMark {
    Directed,
    Undirected,
}

impl fmt::Display for EdgeMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directed => f.write_str("directed"),
            Self::Undirected => f.write_str("undirected"),
        }
    }
}

impl Pdag {
    /// One petgraph edge per nonzero entry; node `i` is `NodeIndex::new(i)`.
    ///
    /// An undirected edge becomes a pair of opposite arcs, so traversals over
    /// this graph follow semi-directed paths.
    pub fn adjacency_graph(&self) -> DiGraph<(), ()> {
        let n = self.num_nodes();
        let mut graph = DiGraph::with_capacity(n, self.nonzero_count());
        for _ in 0..n {
            graph.add_node(());
        }
        for i in 0..n {
            for j in 0..n {
                if self.has(i, j) {
                    graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), ());
                }
            }
        }
        graph
    }

    /// Export as a `petgraph` digraph. Node weights are the original indices;
    /// each undirected edge appears once, from the lower to the higher index.
    pub fn to_digraph(&self) -> DiGraph<usize, EdgeMark> {
        let n = self.num_nodes();
        let mut graph = DiGraph::with_capacity(n, self.edge_count());
        let nodes: Vec<NodeIndex> = (0..n).map(|i| graph.add_node(i)).collect();
        for (i, j) in self.directed_edges() {
            graph.add_edge(nodes[i], nodes[j], EdgeMark::Directed);
        }
        for (i, j) in self.undirected_edges() {
            graph.add_edge(nodes[i], nodes[j], EdgeMark::Undirected);
        }
        graph
    }

    /// Render as Graphviz DOT; undirected edges get `dir=none`.
    pub fn to_dot(&self) -> String {
        let graph = self.to_digraph();
        format!(
            "{:?}",
            Dot::with_attr_getters(
                &graph,
                &[Config::EdgeNoLabel],
                &|_, edge| match *edge.weight() {
                    EdgeMark::Directed => String::new(),
                    EdgeMark::Undirected => "dir=none ".to_string(),
                },
                &|_, _| String::new(),
            )
        )
    }
}
