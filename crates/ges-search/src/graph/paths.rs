//! Semi-directed path queries.
//!
//! A semi-directed path follows any nonzero entry `A[u][v]`, so it may use
//! directed edges forwards and undirected edges either way.

use ges_core::NodeSet;
use petgraph::graph::NodeIndex;
use petgraph::visit::{Dfs, NodeFiltered};

use super::Pdag;

impl Pdag {
    /// All simple semi-directed paths from `from` to `to`, in DFS order.
    ///
    /// Uses an explicit stack of `(node, next successor)` frames; the
    /// current path and its membership mask live in the same frame walk.
    pub fn semi_directed_paths(&self, from: usize, to: usize) -> Vec<Vec<usize>> {
        let n = self.num_nodes();
        let mut paths = Vec::new();
        if from == to {
            paths.push(vec![from]);
            return paths;
        }

        let mut on_path = vec![false; n];
        let mut path = vec![from];
        let mut stack: Vec<(usize, usize)> = vec![(from, 0)];
        on_path[from] = true;

        while let Some(frame) = stack.last_mut() {
            let (node, next) = *frame;
            let successor = (next..n).find(|&v| self.has(node, v) && !on_path[v]);
            match successor {
                Some(v) => {
                    frame.1 = v + 1;
                    if v == to {
                        let mut found = path.clone();
                        found.push(v);
                        paths.push(found);
                    } else {
                        on_path[v] = true;
                        path.push(v);
                        stack.push((v, 0));
                    }
                }
                None => {
                    stack.pop();
                    on_path[node] = false;
                    path.pop();
                }
            }
        }
        paths
    }

    /// True iff every semi-directed path `from → to` passes through `blockers`.
    ///
    /// Equivalent to checking each path from [`Pdag::semi_directed_paths`],
    /// computed as reachability with the blockers filtered out.
    pub fn blocks_semi_directed_paths(&self, from: usize, to: usize, blockers: &NodeSet) -> bool {
        if blockers.contains(&from) || blockers.contains(&to) {
            return true;
        }
        if from == to {
            return false;
        }
        let graph = self.adjacency_graph();
        let open = NodeFiltered::from_fn(&graph, |v: NodeIndex| !blockers.contains(&v.index()));
        let mut dfs = Dfs::new(&open, NodeIndex::new(from));
        while let Some(node) = dfs.next(&open) {
            if node.index() == to {
                return false;
            }
        }
        true
    }
}
