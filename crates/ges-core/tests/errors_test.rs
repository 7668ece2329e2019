//! Tests for error codes and conversions.

use ges_core::errors::{ConfigError, GesErrorCode, GraphError, ScoreError, SearchError};

#[test]
fn graph_errors_map_to_codes() {
    let cases = [
        (
            GraphError::NotSquare {
                row: 1,
                len: 2,
                expected: 3,
            },
            "INVALID_INPUT",
        ),
        (
            GraphError::SizeMismatch {
                expected: 3,
                actual: 4,
            },
            "INVALID_INPUT",
        ),
        (
            GraphError::InvalidEntry {
                row: 0,
                col: 1,
                value: 2,
            },
            "INVALID_INPUT",
        ),
        (GraphError::SelfLoop { node: 2 }, "INVALID_INPUT"),
        (
            GraphError::NotADag {
                reason: "cycle".to_string(),
            },
            "NOT_A_DAG",
        ),
        (GraphError::Inextensible { remaining: 4 }, "INEXTENSIBLE"),
    ];
    for (err, code) in cases {
        assert_eq!(err.error_code(), code, "{err}");
        assert_eq!(err.is_invalid_input(), code == "INVALID_INPUT");
    }
}

#[test]
fn coded_string_prefixes_code() {
    let err = GraphError::SelfLoop { node: 3 };
    assert_eq!(
        err.coded_string(),
        "[INVALID_INPUT] Adjacency matrix has a self-loop on node 3"
    );
}

#[test]
fn search_error_delegates_codes() {
    let from_graph: SearchError = GraphError::Inextensible { remaining: 2 }.into();
    assert_eq!(from_graph.error_code(), "INEXTENSIBLE");

    let from_config: SearchError = ConfigError::UnknownPhase {
        name: "x".to_string(),
    }
    .into();
    assert_eq!(from_config.error_code(), "UNKNOWN_PHASE");

    let from_score: SearchError = ScoreError::EmptyDataset.into();
    assert_eq!(from_score.error_code(), "SCORE_ERROR");

    assert_eq!(SearchError::Cancelled.error_code(), "CANCELLED");
    assert_eq!(
        SearchError::CandidateSetTooLarge {
            x: 0,
            y: 1,
            size: 30,
            limit: 20
        }
        .error_code(),
        "CANDIDATE_SET_TOO_LARGE"
    );
}

#[test]
fn config_errors_share_code_except_unknown_phase() {
    let parse = ConfigError::ParseError {
        path: "ges.toml".to_string(),
        message: "bad".to_string(),
    };
    assert_eq!(parse.error_code(), "CONFIG_ERROR");
    assert!(parse.to_string().contains("ges.toml"));
}
