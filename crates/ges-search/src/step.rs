//! One greedy step: the best operator over every candidate edge.

use rayon::prelude::*;

use ges_core::errors::SearchError;
use ges_core::LocalScore;

use crate::graph::{FixedGaps, Pdag};
use crate::operators::{score_valid_delete_operators, score_valid_insert_operators, OperatorSearch};

/// Knobs shared by both step kinds.
#[derive(Debug, Clone, Copy)]
pub struct StepConfig<'a> {
    /// Pairs the forward step may not connect.
    pub fixed_gaps: Option<&'a FixedGaps>,
    /// Cap on |T0| / |H0|.
    pub max_subset_size: u32,
    /// Evaluate candidate edges on the rayon pool.
    pub parallel: bool,
}

impl Default for StepConfig<'_> {
    fn default() -> Self {
        Self {
            fixed_gaps: None,
            max_subset_size: ges_core::constants::DEFAULT_MAX_SUBSET_SIZE,
            parallel: false,
        }
    }
}

/// Candidate pairs for the forward step, row-major.
pub fn insert_candidates(pdag: &Pdag, fixed_gaps: Option<&FixedGaps>) -> Vec<(usize, usize)> {
    let n = pdag.num_nodes();
    let mut pairs = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if i == j || pdag.is_adjacent(i, j) {
                continue;
            }
            if fixed_gaps.is_some_and(|gaps| gaps.forbids(i, j)) {
                continue;
            }
            pairs.push((i, j));
        }
    }
    pairs
}

/// Candidate pairs for the backward step: directed edges, then each
/// undirected edge once as `(x, y)` with `x < y`.
pub fn delete_candidates(pdag: &Pdag) -> Vec<(usize, usize)> {
    let mut pairs = pdag.directed_edges();
    pairs.extend(pdag.undirected_edges());
    pairs
}

/// Best Insert over all admissible non-adjacent pairs.
pub fn forward_step<S: LocalScore + ?Sized>(
    pdag: &Pdag,
    score: &S,
    config: &StepConfig<'_>,
) -> Result<OperatorSearch, SearchError> {
    let candidates = insert_candidates(pdag, config.fixed_gaps);
    let search = evaluate(&candidates, config.parallel, |x, y| {
        score_valid_insert_operators(x, y, pdag, score, config.max_subset_size)
    })?;
    log_step("forward", candidates.len(), &search);
    Ok(search)
}

/// Best Delete over all edges.
pub fn backward_step<S: LocalScore + ?Sized>(
    pdag: &Pdag,
    score: &S,
    config: &StepConfig<'_>,
) -> Result<OperatorSearch, SearchError> {
    let candidates = delete_candidates(pdag);
    let search = evaluate(&candidates, config.parallel, |x, y| {
        score_valid_delete_operators(x, y, pdag, score, config.max_subset_size)
    })?;
    log_step("backward", candidates.len(), &search);
    Ok(search)
}

/// Run `per_edge` over the candidates and reduce in candidate order, so the
/// parallel and sequential paths pick the same operator.
fn evaluate<F>(
    candidates: &[(usize, usize)],
    parallel: bool,
    per_edge: F,
) -> Result<OperatorSearch, SearchError>
where
    F: Fn(usize, usize) -> Result<OperatorSearch, SearchError> + Sync,
{
    let results: Vec<OperatorSearch> = if parallel {
        candidates
            .par_iter()
            .map(|&(x, y)| per_edge(x, y))
            .collect::<Result<_, _>>()?
    } else {
        candidates
            .iter()
            .map(|&(x, y)| per_edge(x, y))
            .collect::<Result<_, _>>()?
    };

    let mut total = OperatorSearch::default();
    for result in results {
        total.absorb(result);
    }
    Ok(total)
}

fn log_step(phase: &str, candidates: usize, search: &OperatorSearch) {
    match &search.best {
        Some(op) => tracing::debug!(phase, candidates, valid = search.valid, best = %op, "step evaluated"),
        None => tracing::debug!(phase, candidates, valid = search.valid, "no valid operator"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_candidates_skip_adjacent_and_forbidden() {
        let g = Pdag::from_edges(3, &[(0, 1)], &[]);
        let mut gaps = FixedGaps::none(3);
        gaps.forbid(2, 0);
        let pairs = insert_candidates(&g, Some(&gaps));
        assert_eq!(pairs, vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn delete_candidates_take_undirected_once() {
        let g = Pdag::from_edges(3, &[(2, 0)], &[(0, 1)]);
        assert_eq!(delete_candidates(&g), vec![(2, 0), (0, 1)]);
    }
}
