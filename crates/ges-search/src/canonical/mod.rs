//! Canonicalization: PDAG → consistent DAG extension → CPDAG.

pub mod extension;
pub mod labeling;
pub mod ordering;

pub use extension::pdag_to_dag;
pub use labeling::{label_edges, EdgeLabel, EdgeLabels};
pub use ordering::{order_edges, EdgeOrder};

use ges_core::errors::GraphError;

use crate::graph::Pdag;

/// CPDAG of the equivalence class containing `dag`: compelled edges stay
/// directed, reversible edges become undirected.
pub fn dag_to_cpdag(dag: &Pdag) -> Result<Pdag, GraphError> {
    let labels = label_edges(&order_edges(dag)?);
    let mut cpdag = Pdag::empty(dag.num_nodes());
    for (x, y) in labels.edges_with(EdgeLabel::Compelled) {
        cpdag.add_directed(x, y);
    }
    for (x, y) in labels.edges_with(EdgeLabel::Reversible) {
        cpdag.add_undirected(x, y);
    }
    Ok(cpdag)
}

/// Canonical CPDAG of the class represented by `pdag`.
pub fn pdag_to_cpdag(pdag: &Pdag) -> Result<Pdag, GraphError> {
    dag_to_cpdag(&pdag_to_dag(pdag)?)
}
