//! Edge ordering for the compelled-edge labeling pass.

use ges_core::errors::GraphError;

use crate::graph::Pdag;

/// Integer labels on the edges of a DAG. Label 0 means no edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeOrder {
    n: usize,
    labels: Vec<u32>,
}

impl EdgeOrder {
    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// Order label of `x→y`, if the edge exists.
    pub fn label(&self, x: usize, y: usize) -> Option<u32> {
        match self.labels[x * self.n + y] {
            0 => None,
            l => Some(l),
        }
    }

    /// Number of labeled edges.
    pub fn edge_count(&self) -> usize {
        self.labels.iter().filter(|&&l| l != 0).count()
    }
}

/// Assign labels 1, 2, ... to the edges of `dag`.
///
/// Heads are visited from the last node of the topological order backwards;
/// each head's incoming edges are labeled by increasing topological position
/// of their tails.
pub fn order_edges(dag: &Pdag) -> Result<EdgeOrder, GraphError> {
    let order = dag.topological_ordering()?;
    let n = dag.num_nodes();
    let mut position = vec![0usize; n];
    for (pos, &v) in order.iter().enumerate() {
        position[v] = pos;
    }

    let mut labels = vec![0u32; n * n];
    let mut next = 1u32;
    for &y in order.iter().rev() {
        let mut tails: Vec<usize> = dag.pa(y).into_iter().collect();
        tails.sort_by_key(|&x| position[x]);
        for x in tails {
            labels[x * n + y] = next;
            next += 1;
        }
    }

    Ok(EdgeOrder { n, labels })
}
