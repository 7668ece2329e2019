//! Read-only neighborhood queries over a [`Pdag`].

use ges_core::NodeSet;

use super::Pdag;

impl Pdag {
    /// Nodes joined to `i` by an undirected edge.
    pub fn neighbors(&self, i: usize) -> NodeSet {
        (0..self.num_nodes())
            .filter(|&j| self.has(i, j) && self.has(j, i))
            .collect()
    }

    /// Nodes joined to `i` by any edge.
    pub fn adj(&self, i: usize) -> NodeSet {
        (0..self.num_nodes())
            .filter(|&j| self.has(i, j) || self.has(j, i))
            .collect()
    }

    /// Nodes `j` with `j→i`.
    pub fn pa(&self, i: usize) -> NodeSet {
        (0..self.num_nodes())
            .filter(|&j| self.has(j, i) && !self.has(i, j))
            .collect()
    }

    /// Nodes `j` with `i→j`.
    pub fn ch(&self, i: usize) -> NodeSet {
        (0..self.num_nodes())
            .filter(|&j| self.has(i, j) && !self.has(j, i))
            .collect()
    }

    /// Neighbors of `y` that are adjacent to `x`.
    pub fn na(&self, y: usize, x: usize) -> NodeSet {
        (0..self.num_nodes())
            .filter(|&j| self.is_undirected(y, j) && self.is_adjacent(x, j))
            .collect()
    }

    /// Whether any edge joins `i` and `j`.
    #[inline]
    pub fn is_adjacent(&self, i: usize, j: usize) -> bool {
        self.has(i, j) || self.has(j, i)
    }

    /// Whether `i–j` is undirected.
    #[inline]
    pub fn is_undirected(&self, i: usize, j: usize) -> bool {
        self.has(i, j) && self.has(j, i)
    }

    /// Whether `i→j` is directed.
    #[inline]
    pub fn is_directed(&self, i: usize, j: usize) -> bool {
        self.has(i, j) && !self.has(j, i)
    }

    /// Whether every pair of distinct nodes in `set` is adjacent.
    /// Empty and singleton sets are cliques.
    pub fn is_clique(&self, set: &NodeSet) -> bool {
        let nodes: Vec<usize> = set.iter().copied().collect();
        nodes.iter().enumerate().all(|(k, &a)| {
            nodes[k + 1..].iter().all(|&b| self.is_adjacent(a, b))
        })
    }
}
