//! Consistent DAG extension of a PDAG.

use ges_core::errors::GraphError;

use crate::graph::Pdag;

/// Orient every undirected edge of `pdag` without creating new v-structures
/// or cycles.
///
/// Repeatedly removes the lowest-index residual node `i` that has no
/// directed children and whose undirected neighbors are each adjacent to
/// every other node adjacent to `i`; its undirected edges are oriented into
/// `i`. The scan restarts from the lowest index after every removal.
pub fn pdag_to_dag(pdag: &Pdag) -> Result<Pdag, GraphError> {
    let n = pdag.num_nodes();
    let mut residual = pdag.clone();
    let mut dag = pdag.only_directed();
    let mut alive = vec![true; n];
    let mut remaining = n;

    while remaining > 0 {
        let candidate = (0..n).find(|&i| alive[i] && is_removable(&residual, i));
        let Some(i) = candidate else {
            return Err(GraphError::Inextensible { remaining });
        };

        for j in residual.neighbors(i) {
            dag.add_directed(j, i);
        }
        for j in 0..n {
            residual.remove_edge(i, j);
        }
        alive[i] = false;
        remaining -= 1;
    }

    Ok(dag)
}

/// Sink with a clique-compatible undirected neighborhood.
fn is_removable(residual: &Pdag, i: usize) -> bool {
    if !residual.ch(i).is_empty() {
        return false;
    }
    let adj_i = residual.adj(i);
    residual.neighbors(i).iter().all(|&y| {
        adj_i
            .iter()
            .all(|&other| other == y || residual.is_adjacent(y, other))
    })
}
