//! Phase driver: greedy forward/backward passes to a fixed point.

use serde::Serialize;
use tracing::{info, info_span, warn};

use ges_core::config::GesConfig;
use ges_core::constants::{DEFAULT_MAX_SUBSET_SIZE, HARD_MAX_SUBSET_SIZE};
use ges_core::errors::{ConfigError, GraphError, SearchError};
use ges_core::{Cancellable, CancellationToken, LocalScore, NodeSet, Phase};

use crate::canonical::{pdag_to_cpdag, pdag_to_dag};
use crate::graph::{FixedGaps, Pdag};
use crate::operators::OperatorKind;
use crate::step::{backward_step, forward_step, StepConfig};

/// Options for a single `fit`.
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    /// Phases run in order within each pass.
    pub phases: Vec<Phase>,
    /// Repeat passes while the total score strictly improves.
    pub iterate: bool,
    /// Pairs the forward phase may not connect.
    pub fixed_gaps: Option<FixedGaps>,
    /// Cap on |T0| / |H0| per candidate edge.
    pub max_subset_size: u32,
    /// Evaluate step candidates in parallel.
    pub parallel: bool,
    /// Stop after this many accepted operators.
    pub max_steps: Option<u64>,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            phases: Phase::DEFAULT_SEQUENCE.to_vec(),
            iterate: false,
            fixed_gaps: None,
            max_subset_size: DEFAULT_MAX_SUBSET_SIZE,
            parallel: false,
            max_steps: None,
        }
    }
}

impl FitOptions {
    /// Search options from a resolved configuration.
    pub fn from_config(config: &GesConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            phases: config.search.effective_phases()?,
            iterate: config.search.effective_iterate(),
            fixed_gaps: None,
            max_subset_size: config.search.effective_max_subset_size(),
            parallel: config.search.effective_parallel(),
            max_steps: config.search.max_steps,
        })
    }

    /// Replace the phase sequence, failing on an unknown name.
    pub fn with_phase_names<S: AsRef<str>>(mut self, names: &[S]) -> Result<Self, ConfigError> {
        self.phases = Phase::parse_list(names)?;
        Ok(self)
    }

    pub fn with_fixed_gaps(mut self, fixed_gaps: FixedGaps) -> Self {
        self.fixed_gaps = Some(fixed_gaps);
        self
    }

    pub fn with_iterate(mut self, iterate: bool) -> Self {
        self.iterate = iterate;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }
}

/// One accepted operator, in acceptance order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptedStep {
    pub pass: usize,
    pub phase: Phase,
    pub kind: OperatorKind,
    pub x: usize,
    pub y: usize,
    pub subset: NodeSet,
    pub delta: f64,
}

/// Outcome of `fit`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitResult {
    /// Final CPDAG (the initial matrix if nothing was accepted).
    pub cpdag: Pdag,
    /// Sum of accepted deltas.
    pub total_score: f64,
    pub accepted: Vec<AcceptedStep>,
    /// Number of passes over the phase sequence.
    pub passes: usize,
    /// True when `max_steps` stopped the search early.
    pub budget_exhausted: bool,
}

/// Search driver bundling options with a cancellation token.
#[derive(Debug, Clone, Default)]
pub struct GesEngine {
    options: FitOptions,
    cancel: CancellationToken,
}

impl GesEngine {
    pub fn new(options: FitOptions) -> Self {
        Self {
            options,
            cancel: CancellationToken::new(),
        }
    }

    /// Share an existing token, e.g. one cancelled from a signal handler.
    pub fn with_cancellation(options: FitOptions, cancel: CancellationToken) -> Self {
        Self { options, cancel }
    }

    pub fn options(&self) -> &FitOptions {
        &self.options
    }

    /// Token checked before every step.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Run the phase sequence from `initial` until no phase improves the score.
    #[tracing::instrument(skip_all, fields(nodes = initial.num_nodes(), phases = self.options.phases.len()))]
    pub fn fit<S: LocalScore + ?Sized>(&self, initial: &Pdag, score: &S) -> Result<FitResult, SearchError> {
        self.validate(initial, score)?;

        let options = &self.options;
        let step_config = StepConfig {
            fixed_gaps: options.fixed_gaps.as_ref(),
            max_subset_size: options.max_subset_size,
            parallel: options.parallel,
        };

        let mut pdag = initial.clone();
        let mut total_score = 0.0;
        let mut accepted: Vec<AcceptedStep> = Vec::new();
        let mut passes = 0;
        let mut budget_exhausted = false;

        'passes: loop {
            passes += 1;
            let last_total = total_score;

            for &phase in &options.phases {
                let _span = info_span!("phase", %phase, pass = passes).entered();
                let mut phase_steps = 0usize;

                loop {
                    if self.cancel.is_cancelled() {
                        warn!(accepted = accepted.len(), "search cancelled");
                        return Err(SearchError::Cancelled);
                    }
                    if let Some(limit) = options.max_steps {
                        if accepted.len() as u64 >= limit {
                            warn!(limit, total_score, "step budget exhausted");
                            budget_exhausted = true;
                            break 'passes;
                        }
                    }

                    let search = match phase {
                        Phase::Forward => forward_step(&pdag, score, &step_config)?,
                        Phase::Backward => backward_step(&pdag, score, &step_config)?,
                    };
                    let delta = search.best_delta();
                    let Some(op) = search.best.filter(|_| delta > 0.0) else {
                        break;
                    };

                    pdag = pdag_to_cpdag(&op.result)?;
                    total_score += delta;
                    phase_steps += 1;
                    info!(operator = %op, total_score, "accepted operator");
                    accepted.push(AcceptedStep {
                        pass: passes,
                        phase,
                        kind: op.kind,
                        x: op.x,
                        y: op.y,
                        subset: op.subset,
                        delta,
                    });
                }

                info!(steps = phase_steps, total_score, edges = pdag.edge_count(), "phase converged");
            }

            if !options.iterate || total_score <= last_total {
                break;
            }
        }

        info!(
            passes,
            accepted = accepted.len(),
            total_score,
            budget_exhausted,
            "search finished"
        );

        Ok(FitResult {
            cpdag: pdag,
            total_score,
            accepted,
            passes,
            budget_exhausted,
        })
    }

    fn validate<S: LocalScore + ?Sized>(&self, initial: &Pdag, score: &S) -> Result<(), SearchError> {
        let cap = self.options.max_subset_size;
        if cap == 0 || cap > HARD_MAX_SUBSET_SIZE {
            return Err(ConfigError::ValidationFailed {
                field: "max_subset_size".to_string(),
                message: format!("must be between 1 and {HARD_MAX_SUBSET_SIZE}, got {cap}"),
            }
            .into());
        }
        let n = score.num_nodes();
        if initial.num_nodes() != n {
            return Err(GraphError::SizeMismatch {
                expected: n,
                actual: initial.num_nodes(),
            }
            .into());
        }
        if let Some(gaps) = &self.options.fixed_gaps {
            if gaps.num_nodes() != n {
                return Err(GraphError::SizeMismatch {
                    expected: n,
                    actual: gaps.num_nodes(),
                }
                .into());
            }
        }
        pdag_to_dag(initial)?;
        Ok(())
    }
}

/// Run GES once with a fresh cancellation token.
pub fn fit<S: LocalScore + ?Sized>(
    initial: &Pdag,
    score: &S,
    options: &FitOptions,
) -> Result<FitResult, SearchError> {
    GesEngine::new(options.clone()).fit(initial, score)
}
