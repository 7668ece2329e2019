//! Edge classification and topological ordering.

use ges_core::errors::GraphError;
use petgraph::algo::is_cyclic_directed;

use super::Pdag;

impl Pdag {
    /// Directed edges `(i, j)` meaning `i→j`, in row-major order.
    pub fn directed_edges(&self) -> Vec<(usize, usize)> {
        let n = self.num_nodes();
        let mut edges = Vec::new();
        for i in 0..n {
            for j in 0..n {
                if self.is_directed(i, j) {
                    edges.push((i, j));
                }
            }
        }
        edges
    }

    /// Undirected edges `(i, j)` with `i < j`, in row-major order.
    pub fn undirected_edges(&self) -> Vec<(usize, usize)> {
        let n = self.num_nodes();
        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.is_undirected(i, j) {
                    edges.push((i, j));
                }
            }
        }
        edges
    }

    /// Unordered adjacent pairs `(i, j)` with `i < j`.
    pub fn skeleton_edges(&self) -> Vec<(usize, usize)> {
        let n = self.num_nodes();
        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.is_adjacent(i, j) {
                    edges.push((i, j));
                }
            }
        }
        edges
    }

    /// Number of adjacent pairs.
    pub fn edge_count(&self) -> usize {
        self.skeleton_edges().len()
    }

    /// Copy keeping only the directed edges.
    pub fn only_directed(&self) -> Pdag {
        let n = self.num_nodes();
        let mut out = Pdag::empty(n);
        for (i, j) in self.directed_edges() {
            out.set(i, j, true);
        }
        out
    }

    /// Copy keeping only the undirected edges.
    pub fn only_undirected(&self) -> Pdag {
        let n = self.num_nodes();
        let mut out = Pdag::empty(n);
        for (i, j) in self.undirected_edges() {
            out.add_undirected(i, j);
        }
        out
    }

    /// Topological order of a DAG by peeling zero in-degree nodes.
    ///
    /// Ready nodes are kept on a stack, seeded in increasing index order.
    /// Fails with `NotADag` if any undirected edge exists or a cycle leaves
    /// edges behind.
    pub fn topological_ordering(&self) -> Result<Vec<usize>, GraphError> {
        if let Some(&(i, j)) = self.undirected_edges().first() {
            return Err(GraphError::NotADag {
                reason: format!("undirected edge {i}-{j}"),
            });
        }
        let n = self.num_nodes();
        let mut in_degree: Vec<usize> = (0..n)
            .map(|j| (0..n).filter(|&i| self.has(i, j)).count())
            .collect();
        let mut ready: Vec<usize> = (0..n).filter(|&j| in_degree[j] == 0).collect();
        let mut order = Vec::with_capacity(n);

        while let Some(i) = ready.pop() {
            order.push(i);
            for j in 0..n {
                if self.has(i, j) {
                    in_degree[j] -= 1;
                    if in_degree[j] == 0 {
                        ready.push(j);
                    }
                }
            }
        }

        if order.len() < n {
            return Err(GraphError::NotADag {
                reason: format!("directed cycle among {} nodes", n - order.len()),
            });
        }
        Ok(order)
    }

    /// Whether the graph is fully directed and acyclic.
    pub fn is_dag(&self) -> bool {
        self.undirected_edges().is_empty() && !is_cyclic_directed(&self.adjacency_graph())
    }
}
