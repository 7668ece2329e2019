//! Adjacency-matrix representation of a partially directed graph.

use serde::{Deserialize, Serialize};

use ges_core::errors::GraphError;

/// An n×n 0/1 adjacency matrix without self-loops.
///
/// `i→j` is stored as `A[i][j]=1, A[j][i]=0`; an undirected edge `i–j` sets
/// both entries. The same type holds DAGs, PDAGs and CPDAGs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Pdag {
    n: usize,
    cells: Vec<bool>,
}

impl Pdag {
    /// Graph with `n` nodes and no edges.
    pub fn empty(n: usize) -> Self {
        Self {
            n,
            cells: vec![false; n * n],
        }
    }

    /// Build from a row matrix, validating squareness, entries and the diagonal.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GraphError> {
        let n = rows.len();
        let mut pdag = Self::empty(n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(GraphError::NotSquare {
                    row: i,
                    len: row.len(),
                    expected: n,
                });
            }
            for (j, &value) in row.iter().enumerate() {
                match value {
                    0 => {}
                    1 if i == j => return Err(GraphError::SelfLoop { node: i }),
                    1 => pdag.set(i, j, true),
                    _ => return Err(GraphError::InvalidEntry { row: i, col: j, value }),
                }
            }
        }
        Ok(pdag)
    }

    /// Build a graph from directed and undirected edge lists.
    ///
    /// Panics on out-of-range endpoints; intended for tests and benches.
    pub fn from_edges(n: usize, directed: &[(usize, usize)], undirected: &[(usize, usize)]) -> Self {
        let mut pdag = Self::empty(n);
        for &(i, j) in directed {
            pdag.add_directed(i, j);
        }
        for &(i, j) in undirected {
            pdag.add_undirected(i, j);
        }
        pdag
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// Raw entry `A[i][j] != 0`.
    #[inline]
    pub fn has(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.n + j]
    }

    /// Set raw entry `A[i][j]`. Diagonal writes are ignored.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: bool) {
        if i != j {
            self.cells[i * self.n + j] = value;
        }
    }

    /// Set `i→j`, clearing any reverse entry.
    pub fn add_directed(&mut self, i: usize, j: usize) {
        self.set(i, j, true);
        self.set(j, i, false);
    }

    /// Set `i–j`.
    pub fn add_undirected(&mut self, i: usize, j: usize) {
        self.set(i, j, true);
        self.set(j, i, true);
    }

    /// Remove any edge between `i` and `j`.
    pub fn remove_edge(&mut self, i: usize, j: usize) {
        self.set(i, j, false);
        self.set(j, i, false);
    }

    /// Number of nonzero entries (an undirected edge counts twice).
    pub fn nonzero_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Row-matrix form.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.n.max(1))
            .take(self.n)
            .map(|row| row.iter().map(|&c| u8::from(c)).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Pdag {
    type Error = GraphError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<Pdag> for Vec<Vec<u8>> {
    fn from(pdag: Pdag) -> Self {
        pdag.to_rows()
    }
}

/// Symmetric mask of node pairs the forward phase may never connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedGaps {
    n: usize,
    cells: Vec<bool>,
}

impl FixedGaps {
    /// Mask over `n` nodes that forbids nothing.
    pub fn none(n: usize) -> Self {
        Self {
            n,
            cells: vec![false; n * n],
        }
    }

    /// Build from a 0/1 row matrix. A mark at (i,j) or (j,i) forbids the pair.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GraphError> {
        let n = rows.len();
        let mut gaps = Self::none(n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(GraphError::NotSquare {
                    row: i,
                    len: row.len(),
                    expected: n,
                });
            }
            for (j, &value) in row.iter().enumerate() {
                match value {
                    0 => {}
                    1 => gaps.forbid(i, j),
                    _ => return Err(GraphError::InvalidEntry { row: i, col: j, value }),
                }
            }
        }
        Ok(gaps)
    }

    /// Number of nodes the mask covers.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// Forbid any edge between `i` and `j`.
    pub fn forbid(&mut self, i: usize, j: usize) {
        self.cells[i * self.n + j] = true;
        self.cells[j * self.n + i] = true;
    }

    /// Whether an edge between `i` and `j` is forbidden.
    #[inline]
    pub fn forbids(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.n + j]
    }

    /// Number of forbidden unordered pairs.
    pub fn forbidden_pairs(&self) -> usize {
        let mut count = 0;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.forbids(i, j) {
                    count += 1;
                }
            }
        }
        count
    }
}
