//! Compelled / reversible edge labeling (Find-Compelled).

use serde::{Deserialize, Serialize};

use super::ordering::EdgeOrder;

/// Label attached to each DAG edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeLabel {
    /// Same orientation in every DAG of the equivalence class.
    Compelled,
    /// Orientation differs between members of the class.
    Reversible,
    /// Not yet decided.
    Unknown,
}

/// Per-edge labels over a DAG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeLabels {
    n: usize,
    labels: Vec<Option<EdgeLabel>>,
}

impl EdgeLabels {
    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// Label of `x→y`, if the edge exists.
    pub fn get(&self, x: usize, y: usize) -> Option<EdgeLabel> {
        self.labels[x * self.n + y]
    }

    fn set(&mut self, x: usize, y: usize, label: EdgeLabel) {
        self.labels[x * self.n + y] = Some(label);
    }

    fn parents(&self, y: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.n).filter(move |&x| self.get(x, y).is_some())
    }

    /// Edges `(x, y)` carrying `label`, in row-major order.
    pub fn edges_with(&self, label: EdgeLabel) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for x in 0..self.n {
            for y in 0..self.n {
                if self.get(x, y) == Some(label) {
                    edges.push((x, y));
                }
            }
        }
        edges
    }
}

/// Label every edge of an ordered DAG as compelled or reversible.
///
/// Unknown edges are processed from the highest order label down. For the
/// current edge `x→y`, every compelled `w→x` either forces `w→y` to be
/// compelled or, when `w` is not a parent of `y`, compels every edge into
/// `y` and ends the round. Otherwise the unknown edges into `y` become
/// compelled if some other parent of `y` is not a parent of `x`, and
/// reversible if not.
pub fn label_edges(ordered: &EdgeOrder) -> EdgeLabels {
    let n = ordered.num_nodes();
    let mut out = EdgeLabels {
        n,
        labels: vec![None; n * n],
    };
    for x in 0..n {
        for y in 0..n {
            if ordered.label(x, y).is_some() {
                out.set(x, y, EdgeLabel::Unknown);
            }
        }
    }

    while let Some((x, y)) = highest_unknown(ordered, &out) {
        let compelled_into_x: Vec<usize> = (0..n)
            .filter(|&w| out.get(w, x) == Some(EdgeLabel::Compelled))
            .collect();

        let mut done = false;
        for w in compelled_into_x {
            if out.get(w, y).is_none() {
                let parents: Vec<usize> = out.parents(y).collect();
                for p in parents {
                    out.set(p, y, EdgeLabel::Compelled);
                }
                done = true;
                break;
            }
            out.set(w, y, EdgeLabel::Compelled);
        }
        if done {
            continue;
        }

        let has_z = out
            .parents(y)
            .any(|z| z != x && out.get(z, x).is_none());
        let label = if has_z {
            EdgeLabel::Compelled
        } else {
            EdgeLabel::Reversible
        };
        let unknown: Vec<usize> = out
            .parents(y)
            .filter(|&p| out.get(p, y) == Some(EdgeLabel::Unknown))
            .collect();
        for p in unknown {
            out.set(p, y, label);
        }
    }

    out
}

fn highest_unknown(ordered: &EdgeOrder, labels: &EdgeLabels) -> Option<(usize, usize)> {
    let n = ordered.num_nodes();
    let mut best: Option<(u32, usize, usize)> = None;
    for x in 0..n {
        for y in 0..n {
            if labels.get(x, y) != Some(EdgeLabel::Unknown) {
                continue;
            }
            if let Some(l) = ordered.label(x, y) {
                if best.map_or(true, |(b, _, _)| l > b) {
                    best = Some((l, x, y));
                }
            }
        }
    }
    best.map(|(_, x, y)| (x, y))
}
