//! Decomposable score traits.
//!
//! `LocalScoreModel` is the raw statistical model. `LocalScore` is the
//! capability the search consumes; in practice it is a caching wrapper
//! around a model, but any deterministic implementation works.

use crate::types::NodeSet;

/// A decomposable structure score, queried one family at a time.
///
/// Implementations must be deterministic and defined for every node and
/// every parent subset, including the empty one. Returning
/// `f64::NEG_INFINITY` signals a degenerate fit; the search skips any
/// operator whose delta involves a non-finite score.
pub trait LocalScore: Send + Sync {
    /// Score of `node` given `parents`.
    fn local_score(&self, node: usize, parents: &NodeSet) -> f64;

    /// Number of nodes the score is defined over.
    fn num_nodes(&self) -> usize;
}

/// An uncached scoring model (e.g. penalized Gaussian regression).
pub trait LocalScoreModel: Send + Sync {
    /// Compute the local score from scratch.
    fn compute_local_score(&self, node: usize, parents: &NodeSet) -> f64;

    /// Number of nodes the model is defined over.
    fn num_nodes(&self) -> usize;
}

impl<T: LocalScore + ?Sized> LocalScore for &T {
    fn local_score(&self, node: usize, parents: &NodeSet) -> f64 {
        (**self).local_score(node, parents)
    }

    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }
}
