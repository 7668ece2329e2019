//! Property tests for ges-search: canonicalization, pruning and the driver.

#[path = "../common/mod.rs"]
mod common;

use proptest::prelude::*;

use common::PairwiseScore;
use ges_core::{LocalScore, NodeSet};
use ges_search::canonical::{dag_to_cpdag, pdag_to_cpdag, pdag_to_dag};
use ges_search::operators::{score_valid_delete_operators, score_valid_insert_operators};
use ges_search::{fit, FitOptions, Pdag};

/// Random DAG: edges run forward along a random node order.
fn build_random_dag(n: usize, keys: &[u32], edges: &[(usize, usize)]) -> Pdag {
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&v| (keys[v], v));
    let mut rank = vec![0; n];
    for (pos, &v) in order.iter().enumerate() {
        rank[v] = pos;
    }
    let mut dag = Pdag::empty(n);
    for &(a, b) in edges {
        let (a, b) = (a % n, b % n);
        if a == b {
            continue;
        }
        if rank[a] < rank[b] {
            dag.add_directed(a, b);
        } else {
            dag.add_directed(b, a);
        }
    }
    dag
}

fn dag_strategy() -> impl Strategy<Value = Pdag> {
    (2usize..8).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec(any::<u32>(), n),
            prop::collection::vec((0..n, 0..n), 0..n * 2),
        )
            .prop_map(|(n, keys, edges)| build_random_dag(n, &keys, &edges))
    })
}

/// Arbitrary 0/1 matrix without self-loops (not necessarily a PDAG class).
fn matrix_strategy() -> impl Strategy<Value = Pdag> {
    (2usize..7).prop_flat_map(|n| {
        prop::collection::vec(prop::bool::weighted(0.3), n * n).prop_map(move |cells| {
            let mut g = Pdag::empty(n);
            for i in 0..n {
                for j in 0..n {
                    g.set(i, j, cells[i * n + j]);
                }
            }
            g
        })
    })
}

fn pairwise_strategy(n: usize) -> impl Strategy<Value = PairwiseScore> {
    prop::collection::vec(-3.0f64..6.0, n * n).prop_map(move |weights| {
        let mut score = PairwiseScore::new(n);
        for a in 0..n {
            for b in (a + 1)..n {
                score = score.with_gain(a, b, weights[a * n + b]);
            }
        }
        score
    })
}

/// Brute-force Insert search: every subset, full path scan, no pruning.
fn brute_force_insert(x: usize, y: usize, g: &Pdag, score: &PairwiseScore) -> (usize, Option<f64>) {
    let adj_x = g.adj(x);
    let t0: Vec<usize> = g.neighbors(y).into_iter().filter(|v| !adj_x.contains(v)).collect();
    let na_yx = g.na(y, x);
    let pa_y = g.pa(y);
    let paths = g.semi_directed_paths(y, x);
    let mut valid = 0;
    let mut best: Option<f64> = None;
    for mask in 0..(1usize << t0.len()) {
        let t: NodeSet = t0
            .iter()
            .enumerate()
            .filter(|(b, _)| mask & (1 << b) != 0)
            .map(|(_, &v)| v)
            .collect();
        let na_yx_t: NodeSet = na_yx.union(&t).copied().collect();
        if !g.is_clique(&na_yx_t) {
            continue;
        }
        if !paths.iter().all(|p| p.iter().any(|v| na_yx_t.contains(v))) {
            continue;
        }
        let mut parents: NodeSet = na_yx_t.union(&pa_y).copied().collect();
        let old = score.local_score(y, &parents);
        parents.insert(x);
        let delta = score.local_score(y, &parents) - old;
        valid += 1;
        if best.map_or(true, |b| delta > b) {
            best = Some(delta);
        }
    }
    (valid, best)
}

/// Brute-force Delete search: every subset of na(y, x), clique test each time.
fn brute_force_delete(x: usize, y: usize, g: &Pdag, score: &PairwiseScore) -> (usize, Option<f64>) {
    let na_yx = g.na(y, x);
    let h0: Vec<usize> = na_yx.iter().copied().collect();
    let pa_y = g.pa(y);
    let mut valid = 0;
    let mut best: Option<f64> = None;
    for mask in 0..(1usize << h0.len()) {
        let h: NodeSet = h0
            .iter()
            .enumerate()
            .filter(|(b, _)| mask & (1 << b) != 0)
            .map(|(_, &v)| v)
            .collect();
        let rest: NodeSet = na_yx.difference(&h).copied().collect();
        if !g.is_clique(&rest) {
            continue;
        }
        let mut parents: NodeSet = rest.union(&pa_y).copied().collect();
        parents.insert(x);
        let old = score.local_score(y, &parents);
        parents.remove(&x);
        let delta = score.local_score(y, &parents) - old;
        valid += 1;
        if best.map_or(true, |b| delta > b) {
            best = Some(delta);
        }
    }
    (valid, best)
}

proptest! {
    #[test]
    fn dag_is_its_own_extension(dag in dag_strategy()) {
        prop_assert_eq!(pdag_to_dag(&dag).unwrap(), dag);
    }

    #[test]
    fn cpdag_canonicalization_is_idempotent(dag in dag_strategy()) {
        let cpdag = dag_to_cpdag(&dag).unwrap();
        prop_assert_eq!(pdag_to_cpdag(&cpdag).unwrap(), cpdag.clone());
        prop_assert_eq!(cpdag.skeleton_edges(), dag.skeleton_edges());
    }

    #[test]
    fn cpdag_extension_stays_in_class(dag in dag_strategy()) {
        let cpdag = dag_to_cpdag(&dag).unwrap();
        let extension = pdag_to_dag(&cpdag).unwrap();
        prop_assert!(extension.is_dag());
        prop_assert!(!petgraph::algo::is_cyclic_directed(&extension.to_digraph()));
        prop_assert_eq!(dag_to_cpdag(&extension).unwrap(), cpdag);
    }

    #[test]
    fn blocking_agrees_with_path_scan(
        g in matrix_strategy(),
        from_seed in any::<usize>(),
        to_seed in any::<usize>(),
        blocker_mask in any::<u8>(),
    ) {
        let n = g.num_nodes();
        let (from, to) = (from_seed % n, to_seed % n);
        prop_assume!(from != to);
        let blockers: NodeSet = (0..n)
            .filter(|&v| v != from && v != to && blocker_mask & (1 << v) != 0)
            .collect();
        let by_paths = g
            .semi_directed_paths(from, to)
            .iter()
            .all(|p| p.iter().any(|v| blockers.contains(v)));
        prop_assert_eq!(g.blocks_semi_directed_paths(from, to, &blockers), by_paths);
    }

    #[test]
    fn pruned_insert_matches_brute_force(
        (dag, score) in dag_strategy().prop_flat_map(|dag| {
            let n = dag.num_nodes();
            (Just(dag), pairwise_strategy(n))
        }),
    ) {
        let g = dag_to_cpdag(&dag).unwrap();
        let n = g.num_nodes();
        for x in 0..n {
            for y in 0..n {
                if x == y || g.is_adjacent(x, y) {
                    continue;
                }
                let pruned = score_valid_insert_operators(x, y, &g, &score, 20).unwrap();
                let (valid, best) = brute_force_insert(x, y, &g, &score);
                prop_assert_eq!(pruned.valid, valid);
                prop_assert_eq!(pruned.best.map(|op| op.delta), best);
            }
        }
    }

    #[test]
    fn pruned_delete_matches_brute_force(
        (dag, score) in dag_strategy().prop_flat_map(|dag| {
            let n = dag.num_nodes();
            (Just(dag), pairwise_strategy(n))
        }),
    ) {
        let g = dag_to_cpdag(&dag).unwrap();
        let candidates: Vec<(usize, usize)> = g
            .directed_edges()
            .into_iter()
            .chain(g.undirected_edges())
            .collect();
        for (x, y) in candidates {
            let pruned = score_valid_delete_operators(x, y, &g, &score, 20).unwrap();
            let (valid, best) = brute_force_delete(x, y, &g, &score);
            prop_assert_eq!(pruned.valid, valid);
            prop_assert_eq!(pruned.best.as_ref().map(|op| op.delta), best);
            if let Some(op) = pruned.best {
                prop_assert!(!op.result.is_adjacent(x, y));
                prop_assert!(pdag_to_dag(&op.result).is_ok());
            }
        }
    }

    #[test]
    fn fit_accepts_only_improvements(
        (n, score) in (2usize..6).prop_flat_map(|n| (Just(n), pairwise_strategy(n))),
        iterate in any::<bool>(),
    ) {
        let options = FitOptions::default().with_iterate(iterate);
        let result = fit(&Pdag::empty(n), &score, &options).unwrap();
        let sum: f64 = result.accepted.iter().map(|s| s.delta).sum();
        prop_assert!(result.accepted.iter().all(|s| s.delta > 0.0));
        prop_assert!((sum - result.total_score).abs() < 1e-9);
        prop_assert!(result.total_score >= 0.0);
        prop_assert_eq!(pdag_to_cpdag(&result.cpdag).unwrap(), result.cpdag.clone());
    }

    #[test]
    fn pairwise_fit_keeps_exactly_the_positive_edges(
        (n, score) in (2usize..6).prop_flat_map(|n| (Just(n), pairwise_strategy(n))),
    ) {
        // Under a pairwise score every edge is scored on its own, so the
        // fixed point holds exactly the positively weighted pairs.
        let result = fit(&Pdag::empty(n), &score, &FitOptions::default()).unwrap();
        for a in 0..n {
            for b in (a + 1)..n {
                prop_assert_eq!(result.cpdag.is_adjacent(a, b), score.gain(a, b) > 0.0);
            }
        }
    }
}
