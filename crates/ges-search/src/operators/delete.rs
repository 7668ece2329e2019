//! Delete(x, y, H): remove the x–y edge and orient `y→h`, `x→h` for h in H.

use ges_core::errors::SearchError;
use ges_core::{LocalScore, NodeSet};

use super::subsets::{check_candidate_cap, subset_members, MonotoneFlags};
use super::{Operator, OperatorKind, OperatorSearch};
use crate::graph::Pdag;

/// Apply Delete(x, y, H) to a copy of `pdag`.
///
/// For each h in H the undirected `y–h` loses `h→y`, leaving `y→h`; where
/// h is also an undirected neighbor of x, `x–h` becomes `x→h`.
pub fn apply_delete(x: usize, y: usize, h: &NodeSet, pdag: &Pdag) -> Pdag {
    let mut out = pdag.clone();
    out.remove_edge(x, y);
    let neighbors_x = pdag.neighbors(x);
    for &node in h {
        out.set(node, y, false);
        if neighbors_x.contains(&node) {
            out.set(node, x, false);
        }
    }
    out
}

/// Score every valid Delete(x, y, H) for an adjacent pair.
///
/// H ranges over subsets of `na(y, x)`. Once `na(y, x) \ H` is a clique,
/// every superset of H passes too.
pub fn score_valid_delete_operators<S: LocalScore + ?Sized>(
    x: usize,
    y: usize,
    pdag: &Pdag,
    score: &S,
    max_subset_size: u32,
) -> Result<OperatorSearch, SearchError> {
    let na_yx = pdag.na(y, x);
    let h0: Vec<usize> = na_yx.iter().copied().collect();
    check_candidate_cap(x, y, h0.len(), max_subset_size)?;

    let pa_y = pdag.pa(y);
    let mut validated = MonotoneFlags::new(h0.len());
    let mut search = OperatorSearch::default();

    for mask in 0..validated.len() {
        let h = subset_members(mask, &h0);
        let na_yx_h: NodeSet = na_yx.difference(&h).copied().collect();

        if !validated.is_set(mask) {
            if !pdag.is_clique(&na_yx_h) {
                continue;
            }
            validated.mark_supersets(mask);
        }

        let mut parents: NodeSet = na_yx_h.union(&pa_y).copied().collect();
        parents.insert(x);
        let old_score = score.local_score(y, &parents);
        parents.remove(&x);
        let new_score = score.local_score(y, &parents);
        if !old_score.is_finite() || !new_score.is_finite() {
            tracing::trace!(x, y, ?h, old_score, new_score, "skipping degenerate delete");
            continue;
        }

        let delta = new_score - old_score;
        tracing::trace!(x, y, ?h, delta, "scored delete");
        search.valid += 1;
        if search.best.as_ref().map_or(true, |b| delta > b.delta) {
            search.best = Some(Operator {
                kind: OperatorKind::Delete,
                x,
                y,
                result: apply_delete(x, y, &h, pdag),
                subset: h,
                delta,
            });
        }
    }

    Ok(search)
}
