//! Insert(x, y, T): add `x→y` and orient `t→y` for every `t` in T.

use ges_core::errors::SearchError;
use ges_core::{LocalScore, NodeSet};

use super::subsets::{check_candidate_cap, subset_members, MonotoneFlags};
use super::{Operator, OperatorKind, OperatorSearch};
use crate::graph::Pdag;

/// Apply Insert(x, y, T) to a copy of `pdag`.
pub fn apply_insert(x: usize, y: usize, t: &NodeSet, pdag: &Pdag) -> Pdag {
    let mut out = pdag.clone();
    out.set(x, y, true);
    for &node in t {
        out.add_directed(node, y);
    }
    out
}

/// Score every valid Insert(x, y, T) for a non-adjacent pair.
///
/// T ranges over subsets of `neighbors(y) \ adj(x)`. A T failing the clique
/// condition prunes all its supersets; a T passing the path condition
/// validates all its supersets.
pub fn score_valid_insert_operators<S: LocalScore + ?Sized>(
    x: usize,
    y: usize,
    pdag: &Pdag,
    score: &S,
    max_subset_size: u32,
) -> Result<OperatorSearch, SearchError> {
    let adj_x = pdag.adj(x);
    let t0: Vec<usize> = pdag
        .neighbors(y)
        .into_iter()
        .filter(|n| !adj_x.contains(n))
        .collect();
    check_candidate_cap(x, y, t0.len(), max_subset_size)?;

    let na_yx = pdag.na(y, x);
    let pa_y = pdag.pa(y);
    let mut removed = MonotoneFlags::new(t0.len());
    let mut validated = MonotoneFlags::new(t0.len());
    let mut search = OperatorSearch::default();

    for mask in 0..removed.len() {
        if removed.is_set(mask) {
            continue;
        }
        let t = subset_members(mask, &t0);
        let na_yx_t: NodeSet = na_yx.union(&t).copied().collect();

        if !pdag.is_clique(&na_yx_t) {
            removed.mark_supersets(mask);
            continue;
        }
        if !validated.is_set(mask) {
            if !pdag.blocks_semi_directed_paths(y, x, &na_yx_t) {
                continue;
            }
            validated.mark_supersets(mask);
        }

        let mut parents: NodeSet = na_yx_t.union(&pa_y).copied().collect();
        let old_score = score.local_score(y, &parents);
        parents.insert(x);
        let new_score = score.local_score(y, &parents);
        if !old_score.is_finite() || !new_score.is_finite() {
            tracing::trace!(x, y, ?t, old_score, new_score, "skipping degenerate insert");
            continue;
        }

        let delta = new_score - old_score;
        tracing::trace!(x, y, ?t, delta, "scored insert");
        search.valid += 1;
        if search.best.as_ref().map_or(true, |b| delta > b.delta) {
            search.best = Some(Operator {
                kind: OperatorKind::Insert,
                x,
                y,
                result: apply_insert(x, y, &t, pdag),
                subset: t,
                delta,
            });
        }
    }

    Ok(search)
}
