//! End-to-end driver behavior against deterministic score oracles.

mod common;

use common::{CountingModel, PairwiseScore};
use ges_core::errors::{ConfigError, GraphError, SearchError};
use ges_core::{Cancellable, Phase};
use ges_search::{fit, FitOptions, FixedGaps, GesEngine, OperatorKind, Pdag, ScoreCache};

fn chain_score() -> PairwiseScore {
    PairwiseScore::new(3)
        .with_gain(0, 1, 10.0)
        .with_gain(1, 2, 5.0)
        .with_gain(0, 2, -3.0)
}

fn assert_consistent(result: &ges_search::FitResult) {
    let sum: f64 = result.accepted.iter().map(|s| s.delta).sum();
    assert!((sum - result.total_score).abs() < 1e-9);
    assert!(result.accepted.iter().all(|s| s.delta > 0.0));
}

#[test]
fn scenario_a_chain_from_empty_graph() {
    let result = fit(&Pdag::empty(3), &chain_score(), &FitOptions::default()).unwrap();

    assert_eq!(result.cpdag, Pdag::from_edges(3, &[], &[(0, 1), (1, 2)]));
    assert_eq!(result.total_score, 15.0);
    assert_eq!(result.accepted.len(), 2);
    let first = &result.accepted[0];
    assert_eq!((first.kind, first.x, first.y, first.delta), (OperatorKind::Insert, 0, 1, 10.0));
    let second = &result.accepted[1];
    assert_eq!((second.kind, second.x, second.y, second.delta), (OperatorKind::Insert, 1, 2, 5.0));
    assert!(result.accepted.iter().all(|s| s.phase == Phase::Forward));
    assert_eq!(result.passes, 1);
    assert!(!result.budget_exhausted);
    assert_consistent(&result);
}

#[test]
fn scenario_b_single_node() {
    let initial = Pdag::empty(1);
    let result = fit(&initial, &PairwiseScore::new(1), &FitOptions::default()).unwrap();
    assert_eq!(result.cpdag, initial);
    assert_eq!(result.total_score, 0.0);
    assert!(result.accepted.is_empty());
}

#[test]
fn scenario_c_fixed_gaps_forbid_edge() {
    let score = PairwiseScore::new(2).with_gain(0, 1, 10.0);
    let gaps = FixedGaps::from_rows(&[vec![0, 1], vec![0, 0]]).unwrap();
    let options = FitOptions::default().with_fixed_gaps(gaps);
    let result = fit(&Pdag::empty(2), &score, &options).unwrap();
    assert!(!result.cpdag.is_adjacent(0, 1));
    assert_eq!(result.total_score, 0.0);
}

#[test]
fn backward_phase_removes_harmful_edges() {
    let initial = Pdag::from_edges(3, &[], &[(0, 1), (1, 2)]);
    let score = PairwiseScore::new(3).with_gain(0, 1, 4.0).with_gain(1, 2, -5.0);
    let options = FitOptions::default().with_phase_names(&["backward"]).unwrap();
    let result = fit(&initial, &score, &options).unwrap();
    assert_eq!(result.cpdag, Pdag::from_edges(3, &[], &[(0, 1)]));
    assert_eq!(result.total_score, 5.0);
    assert_eq!(result.accepted[0].kind, OperatorKind::Delete);
}

#[test]
fn iterate_stops_when_pass_does_not_improve() {
    let options = FitOptions::default().with_iterate(true);
    let result = fit(&Pdag::empty(3), &chain_score(), &options).unwrap();
    assert_eq!(result.passes, 2);
    assert_eq!(result.total_score, 15.0);
}

#[test]
fn step_budget_stops_gracefully() {
    let options = FitOptions::default().with_max_steps(1);
    let result = fit(&Pdag::empty(3), &chain_score(), &options).unwrap();
    assert!(result.budget_exhausted);
    assert_eq!(result.accepted.len(), 1);
    assert_eq!(result.cpdag, Pdag::from_edges(3, &[], &[(0, 1)]));
    assert_eq!(result.total_score, 10.0);
}

#[test]
fn cancelled_engine_returns_error() {
    let engine = GesEngine::new(FitOptions::default());
    engine.cancellation_token().cancel();
    let err = engine.fit(&Pdag::empty(3), &chain_score()).unwrap_err();
    assert_eq!(err, SearchError::Cancelled);
}

#[test]
fn size_mismatch_is_invalid_input() {
    let err = fit(&Pdag::empty(4), &chain_score(), &FitOptions::default()).unwrap_err();
    match err {
        SearchError::Graph(e) => {
            assert!(e.is_invalid_input());
            assert_eq!(e, GraphError::SizeMismatch { expected: 3, actual: 4 });
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let options = FitOptions::default().with_fixed_gaps(FixedGaps::none(2));
    let err = fit(&Pdag::empty(3), &chain_score(), &options).unwrap_err();
    assert_eq!(
        err,
        SearchError::Graph(GraphError::SizeMismatch { expected: 3, actual: 2 })
    );
}

#[test]
fn subset_cap_outside_range_is_rejected() {
    for cap in [0, 25, 64] {
        let options = FitOptions {
            max_subset_size: cap,
            ..FitOptions::default()
        };
        let err = fit(&Pdag::empty(3), &chain_score(), &options).unwrap_err();
        assert!(matches!(
            err,
            SearchError::Config(ConfigError::ValidationFailed { .. })
        ));
    }

    let options = FitOptions {
        max_subset_size: 24,
        ..FitOptions::default()
    };
    assert!(fit(&Pdag::empty(3), &chain_score(), &options).is_ok());
}

#[test]
fn inextensible_initial_graph_is_rejected() {
    let initial = Pdag::from_edges(4, &[], &[(0, 1), (1, 2), (2, 3), (0, 3)]);
    let err = fit(&initial, &PairwiseScore::new(4), &FitOptions::default()).unwrap_err();
    assert_eq!(
        err,
        SearchError::Graph(GraphError::Inextensible { remaining: 4 })
    );
}

#[test]
fn empty_phase_list_returns_input() {
    let initial = Pdag::from_edges(3, &[], &[(0, 1)]);
    let options = FitOptions {
        phases: Vec::new(),
        ..FitOptions::default()
    };
    let result = fit(&initial, &chain_score(), &options).unwrap();
    assert_eq!(result.cpdag, initial);
    assert!(result.accepted.is_empty());
}

#[test]
fn parallel_fit_matches_sequential() {
    let mut score = PairwiseScore::new(6);
    for (a, b, w) in [
        (0, 1, 6.0),
        (1, 2, 4.0),
        (2, 3, 3.0),
        (3, 4, 2.5),
        (4, 5, 2.0),
        (0, 5, 1.0),
        (1, 4, -0.5),
    ] {
        score = score.with_gain(a, b, w);
    }
    let sequential = fit(&Pdag::empty(6), &score, &FitOptions::default()).unwrap();
    let parallel = fit(
        &Pdag::empty(6),
        &score,
        &FitOptions::default().with_parallel(true),
    )
    .unwrap();
    assert_eq!(sequential, parallel);
    assert_consistent(&sequential);
}

#[test]
fn cache_answers_repeat_searches() {
    let cache = ScoreCache::new(CountingModel::new(chain_score()));
    let first = fit(&Pdag::empty(3), &cache, &FitOptions::default()).unwrap();
    let calls_after_first = cache.model().calls();
    assert!(calls_after_first > 0);
    assert!(cache.stats().hits > 0);

    let second = fit(&Pdag::empty(3), &cache, &FitOptions::default()).unwrap();
    assert_eq!(first, second);
    assert_eq!(cache.model().calls(), calls_after_first);
}

#[test]
fn result_serializes_to_json() {
    let result = fit(&Pdag::empty(3), &chain_score(), &FitOptions::default()).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["cpdag"], serde_json::json!([[0, 1, 0], [1, 0, 1], [0, 1, 0]]));
    assert_eq!(json["accepted"][0]["kind"], "insert");
    assert_eq!(json["accepted"][0]["phase"], "forward");
}
