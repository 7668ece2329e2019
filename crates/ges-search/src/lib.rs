//! # ges-search
//!
//! Greedy Equivalence Search over CPDAGs. The driver alternates greedy
//! Insert (forward) and Delete (backward) phases, re-canonicalizing the
//! graph to its CPDAG after every accepted operator.
//!
//! ```text
//! driver ─► step ─► operators ─► LocalScore (usually a ScoreCache)
//!    └────────────► canonical (pdag_to_cpdag)
//! ```

pub mod canonical;
pub mod driver;
pub mod graph;
pub mod operators;
pub mod score_cache;
pub mod step;

pub use canonical::{dag_to_cpdag, pdag_to_cpdag, pdag_to_dag};
pub use driver::{fit, AcceptedStep, FitOptions, FitResult, GesEngine};
pub use graph::{EdgeMark, FixedGaps, Pdag};
pub use operators::{Operator, OperatorKind, OperatorSearch};
pub use score_cache::{CacheStats, ScoreCache};
pub use step::{backward_step, forward_step, StepConfig};
